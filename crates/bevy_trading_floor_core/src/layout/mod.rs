use bevy::{
    math::{Vec2, Vec3},
    reflect::Reflect,
};
use serde::{Deserialize, Serialize};

use crate::errors::InvalidGridConfigError;

/// Largest number of cells a grid may have
pub const MAX_CELLS: usize = 1 << 20;

/// Rows and columns of a rectangular arrangement of repeated objects, centered
/// on the world origin on the X/Z plane.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows, laid out along Z
    pub rows: u32,
    /// Number of columns, laid out along X
    pub cols: u32,
    /// Distance between neighbouring rows and columns
    pub spacing: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 4,
            spacing: 3.,
        }
    }
}

/// One cell of a grid layout
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub row: u32,
    pub col: u32,
    pub position: Vec3,
}

impl Placement {
    /// Stable identifier for the object placed in this cell, e.g. `desk-1-2`
    pub fn key(&self, prefix: &str) -> String {
        format!("{prefix}-{}-{}", self.row, self.col)
    }
}

impl GridConfig {
    pub fn new(rows: u32, cols: u32, spacing: f32) -> Self {
        Self {
            rows,
            cols,
            spacing,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidGridConfigError> {
        if self.rows < 1 {
            return Err(InvalidGridConfigError::NoRows);
        }
        if self.cols < 1 {
            return Err(InvalidGridConfigError::NoColumns);
        }
        if !self.spacing.is_finite() || self.spacing <= 0. {
            return Err(InvalidGridConfigError::InvalidSpacing(self.spacing));
        }
        match (self.rows as usize).checked_mul(self.cols as usize) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(InvalidGridConfigError::TooManyCells {
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Number of cells. Saturates for grids that fail validation.
    pub fn len(&self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance between the outermost placements along X (width) and Z
    /// (depth).
    pub fn extent(&self) -> Vec2 {
        Vec2::new(
            self.cols.saturating_sub(1) as f32 * self.spacing,
            self.rows.saturating_sub(1) as f32 * self.spacing,
        )
    }

    /// Position of the cell at `row`, `col`. Does not check bounds.
    pub fn position_of(&self, row: u32, col: u32) -> Vec3 {
        Vec3::new(
            centered_offset(col, self.cols) * self.spacing,
            0.,
            centered_offset(row, self.rows) * self.spacing,
        )
    }

    /// All placements, in row-major order. Either the whole layout is
    /// produced or none of it.
    pub fn placements(&self) -> Result<Vec<Placement>, InvalidGridConfigError> {
        self.validate()?;

        let mut placements = Vec::with_capacity(self.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                placements.push(Placement {
                    row,
                    col,
                    position: self.position_of(row, col),
                });
            }
        }

        Ok(placements)
    }
}

fn centered_offset(index: u32, count: u32) -> f32 {
    index as f32 - (count as f32 - 1.) / 2.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_desk_grid() {
        let placements = GridConfig::new(3, 4, 3.).placements().unwrap();
        assert_eq!(placements.len(), 12);

        let cell = placements
            .iter()
            .find(|p| p.row == 1 && p.col == 1)
            .unwrap();
        assert_eq!(cell.position, Vec3::new(-1.5, 0., 0.));
    }

    #[test]
    fn row_major_order() {
        let placements = GridConfig::new(2, 3, 1.).placements().unwrap();
        let cells: Vec<_> = placements.iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn placements_are_symmetric_about_origin() {
        for (rows, cols) in [(3, 4), (2, 2), (5, 1), (4, 7)] {
            let placements = GridConfig::new(rows, cols, 2.5).placements().unwrap();

            let mut xs: Vec<f32> = placements.iter().map(|p| p.position.x).collect();
            let mut zs: Vec<f32> = placements.iter().map(|p| p.position.z).collect();
            xs.sort_by(f32::total_cmp);
            zs.sort_by(f32::total_cmp);

            for values in [xs, zs] {
                let mirrored: Vec<f32> = values.iter().rev().map(|v| -v).collect();
                assert_eq!(values, mirrored);
            }
            assert!(placements.iter().all(|p| p.position.y == 0.));
        }
    }

    #[test]
    fn single_cell_sits_at_origin() {
        let placements = GridConfig::new(1, 1, 5.).placements().unwrap();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].position, Vec3::ZERO);
    }

    #[test]
    fn invalid_configs_produce_nothing() {
        assert_eq!(
            GridConfig::new(0, 4, 3.).placements(),
            Err(InvalidGridConfigError::NoRows)
        );
        assert_eq!(
            GridConfig::new(3, 0, 3.).placements(),
            Err(InvalidGridConfigError::NoColumns)
        );
        assert_eq!(
            GridConfig::new(3, 4, 0.).placements(),
            Err(InvalidGridConfigError::InvalidSpacing(0.))
        );
        assert!(GridConfig::new(3, 4, -1.).placements().is_err());
        assert!(GridConfig::new(3, 4, f32::NAN).placements().is_err());
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let grid = GridConfig::new(u32::MAX, u32::MAX, 1.);
        assert_eq!(
            grid.placements(),
            Err(InvalidGridConfigError::TooManyCells {
                rows: u32::MAX,
                cols: u32::MAX,
            })
        );
        assert!(!grid.is_empty());

        let largest = GridConfig::new(1, MAX_CELLS as u32, 1.);
        assert_eq!(largest.validate(), Ok(()));
        assert!(GridConfig::new(2, MAX_CELLS as u32, 1.).validate().is_err());
    }

    #[test]
    fn extent_spans_outer_cells() {
        assert_eq!(GridConfig::new(3, 4, 3.).extent(), Vec2::new(9., 6.));
        assert_eq!(GridConfig::new(1, 1, 3.).extent(), Vec2::ZERO);
    }

    #[test]
    fn placement_keys() {
        let placements = GridConfig::new(2, 2, 1.).placements().unwrap();
        assert_eq!(placements[3].key("desk"), "desk-1-1");
    }
}
