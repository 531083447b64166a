use bevy::{
    math::{Vec2, Vec3},
    transform::components::Transform,
};

use super::{
    HoverGroup, HoverGroupId, HoverStyle, SceneDescription, ShapeGeometry, ShapeRecord,
    SurfaceMaterial,
};

struct Frame {
    label: String,
    transform: Transform,
    hover: Option<HoverGroupId>,
}

/// Builds a [`SceneDescription`] from nested groups. Each group contributes a
/// label segment and a transform that is applied on top of its parent's.
pub struct SceneBuilder {
    stack: Vec<Frame>,
    description: SceneDescription,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            stack: vec![Frame {
                label: String::new(),
                transform: Transform::IDENTITY,
                hover: None,
            }],
            description: SceneDescription::default(),
        }
    }

    fn top(&self) -> &Frame {
        // The root frame is never popped
        &self.stack[self.stack.len() - 1]
    }

    fn qualified_label(&self, label: &str) -> String {
        let parent = &self.top().label;
        if parent.is_empty() {
            label.to_string()
        } else {
            format!("{parent}/{label}")
        }
    }

    fn push_frame(&mut self, label: &str, local: Transform, hover: Option<HoverGroupId>) {
        let frame = Frame {
            label: self.qualified_label(label),
            transform: self.top().transform.mul_transform(local),
            hover: hover.or(self.top().hover),
        };
        self.stack.push(frame);
    }

    /// Add a group whose children are positioned relative to `local`
    pub fn group(
        &mut self,
        label: &str,
        local: Transform,
        children: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.push_frame(label, local, None);
        children(self);
        self.stack.pop();
        self
    }

    /// Like [`SceneBuilder::group`], but the group scales and lights up as a
    /// unit when hovered.
    pub fn hover_group(
        &mut self,
        label: &str,
        local: Transform,
        style: HoverStyle,
        children: impl FnOnce(&mut Self),
    ) -> HoverGroupId {
        let id = HoverGroupId(self.description.hover_groups.len() as u32);
        self.push_frame(label, local, Some(id));
        let group = HoverGroup {
            id,
            label: self.top().label.clone(),
            transform: self.top().transform,
            style,
        };
        self.description.hover_groups.push(group);
        children(self);
        self.stack.pop();
        id
    }

    pub fn shape(
        &mut self,
        label: &str,
        geometry: ShapeGeometry,
        material: SurfaceMaterial,
        local: Transform,
    ) -> &mut ShapeRecord {
        let record = ShapeRecord {
            label: self.qualified_label(label),
            geometry,
            material,
            transform: self.top().transform.mul_transform(local),
            cast_shadow: true,
            receive_shadow: true,
            hover: self.top().hover,
            highlight_surface: false,
        };
        self.description.shapes.push(record);
        let last = self.description.shapes.len() - 1;
        &mut self.description.shapes[last]
    }

    pub fn cuboid(
        &mut self,
        label: &str,
        size: Vec3,
        material: SurfaceMaterial,
        translation: Vec3,
    ) -> &mut ShapeRecord {
        self.shape(
            label,
            ShapeGeometry::Cuboid { size },
            material,
            Transform::from_translation(translation),
        )
    }

    pub fn plane(
        &mut self,
        label: &str,
        size: Vec2,
        material: SurfaceMaterial,
        translation: Vec3,
    ) -> &mut ShapeRecord {
        self.shape(
            label,
            ShapeGeometry::Plane { size },
            material,
            Transform::from_translation(translation),
        )
    }

    pub fn build(self) -> SceneDescription {
        self.description
    }
}

impl ShapeRecord {
    pub fn shadows(&mut self, cast: bool, receive: bool) -> &mut Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    /// Mark this shape as the surface that takes its hover group's colour
    pub fn highlighted(&mut self) -> &mut Self {
        self.highlight_surface = true;
        self
    }
}
