use bevy::{
    color::Srgba,
    ecs::component::Component,
    prelude::ReflectComponent,
    reflect::Reflect,
    transform::components::{GlobalTransform, Transform},
};

use super::{ShapeRecord, srgb_hex};

/// Index of a hover group within a [`SceneDescription`](super::SceneDescription)
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct HoverGroupId(pub u32);

/// How a group of shapes reacts to the pointer hovering over it
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct HoverStyle {
    pub hover_scale: f32,
    pub idle_color: Srgba,
    pub hover_color: Srgba,
    pub emissive_intensity: f32,
}

impl HoverStyle {
    pub fn terminal() -> Self {
        Self {
            hover_scale: 1.1,
            idle_color: srgb_hex(0x2980b9),
            hover_color: srgb_hex(0x3498db),
            emissive_intensity: 0.5,
        }
    }

    pub fn wall_display() -> Self {
        Self {
            hover_scale: 1.05,
            idle_color: srgb_hex(0xc0392b),
            hover_color: srgb_hex(0xe74c3c),
            emissive_intensity: 0.5,
        }
    }
}

/// A set of shapes that scale and light up together
#[derive(Reflect, Debug, Clone, PartialEq)]
pub struct HoverGroup {
    pub id: HoverGroupId,
    pub label: String,
    /// World transform of the group pivot. Shapes scale around it.
    pub transform: Transform,
    pub style: HoverStyle,
}

impl HoverGroup {
    /// Transform of `shape` relative to the group pivot
    pub fn local_transform_of(&self, shape: &ShapeRecord) -> Transform {
        GlobalTransform::from(shape.transform)
            .reparented_to(&GlobalTransform::from(self.transform))
    }
}

/// Hover highlight state of an object. The flag is owned here and flipped by
/// whatever does picking; the rest of the scene reads the derived targets.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct Hoverable {
    pub hovered: bool,
    pub style: HoverStyle,
}

impl Hoverable {
    pub fn new(style: HoverStyle) -> Self {
        Self {
            hovered: false,
            style,
        }
    }

    pub fn target_scale(&self) -> f32 {
        if self.hovered {
            self.style.hover_scale
        } else {
            1.
        }
    }

    pub fn screen_color(&self) -> Srgba {
        if self.hovered {
            self.style.hover_color
        } else {
            self.style.idle_color
        }
    }
}
