use bevy::reflect::Reflect;
use thiserror::Error;

/// A [`GridConfig`] that cannot produce a layout. Grid configs are authored
/// statically, so this is treated as a programmer error and propagated as-is.
///
/// [`GridConfig`]: crate::layout::GridConfig
#[non_exhaustive]
#[derive(Debug, Error, Reflect, Clone, PartialEq)]
pub enum InvalidGridConfigError {
    #[error("Grid needs at least one row")]
    NoRows,
    #[error("Grid needs at least one column")]
    NoColumns,
    #[error("Grid spacing must be a positive finite number, got {0}")]
    InvalidSpacing(f32),
    #[error("Grid of {rows}x{cols} cells exceeds the limit of {} cells", crate::layout::MAX_CELLS)]
    TooManyCells { rows: u32, cols: u32 },
}
