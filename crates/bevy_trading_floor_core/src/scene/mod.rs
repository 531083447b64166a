pub mod authoring;
pub mod builder;
pub mod hover;

use bevy::{
    color::Srgba,
    math::{Vec2, Vec3},
    reflect::Reflect,
    transform::components::Transform,
};

pub use builder::SceneBuilder;
pub use hover::{HoverGroup, HoverGroupId, HoverStyle, Hoverable};

/// Opaque colour from a `0xRRGGBB` literal
pub fn srgb_hex(hex: u32) -> Srgba {
    Srgba::rgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Primitive shape of a scene record. Planes face +Z in their local frame.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    Cuboid { size: Vec3 },
    Plane { size: Vec2 },
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct Emission {
    pub color: Srgba,
    pub intensity: f32,
}

/// Physically based surface parameters, in the metallic/roughness workflow
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMaterial {
    pub base_color: Srgba,
    pub metallic: f32,
    pub roughness: f32,
    pub emissive: Option<Emission>,
}

impl SurfaceMaterial {
    pub fn new(base_color: Srgba, metallic: f32, roughness: f32) -> Self {
        Self {
            base_color,
            metallic,
            roughness,
            emissive: None,
        }
    }

    pub fn with_emission(mut self, color: Srgba, intensity: f32) -> Self {
        self.emissive = Some(Emission { color, intensity });
        self
    }
}

/// A single shape to instantiate, with its world transform
#[derive(Reflect, Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    pub label: String,
    pub geometry: ShapeGeometry,
    pub material: SurfaceMaterial,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    /// Hover group this shape is highlighted with, if any
    pub hover: Option<HoverGroupId>,
    /// Whether this shape takes the hover colour of its group
    pub highlight_surface: bool,
}

/// Flat list of shapes making up a scene, as produced by a [`SceneBuilder`]
#[derive(Reflect, Debug, Clone, Default, PartialEq)]
pub struct SceneDescription {
    pub shapes: Vec<ShapeRecord>,
    pub hover_groups: Vec<HoverGroup>,
}

impl SceneDescription {
    pub fn shapes_labelled<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a ShapeRecord> {
        self.shapes.iter().filter(move |s| s.label.starts_with(prefix))
    }

    pub fn hover_group(&self, id: HoverGroupId) -> Option<&HoverGroup> {
        self.hover_groups.iter().find(|g| g.id == id)
    }

    pub fn shapes_in_group(&self, id: HoverGroupId) -> impl Iterator<Item = &ShapeRecord> {
        self.shapes.iter().filter(move |s| s.hover == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(srgb_hex(0xff0000), Srgba::rgb_u8(255, 0, 0));
        assert_eq!(srgb_hex(0x2c3e50), Srgba::rgb_u8(0x2c, 0x3e, 0x50));
    }
}
