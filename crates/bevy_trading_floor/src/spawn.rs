//! Instantiates a [`SceneDescription`] as Bevy meshes

use bevy::{
    light::{NotShadowCaster, NotShadowReceiver},
    prelude::*,
};
use bevy_trading_floor_core::{
    plugin::TradingFloorSet,
    scene::{
        HoverGroupId, Hoverable, SceneDescription, ShapeGeometry, ShapeRecord, SurfaceMaterial,
    },
};

/// Surface that takes the hover colour of the group entity it belongs to
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct HighlightedSurface {
    pub group: Entity,
}

pub(crate) struct SceneSpawnPlugin;

impl Plugin for SceneSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<HighlightedSurface>().add_systems(
            Update,
            apply_hover_colors.in_set(TradingFloorSet::Highlight),
        );
    }
}

fn standard_material(material: &SurfaceMaterial) -> StandardMaterial {
    StandardMaterial {
        base_color: material.base_color.into(),
        metallic: material.metallic,
        perceptual_roughness: material.roughness,
        emissive: material
            .emissive
            .map(|e| LinearRgba::from(e.color) * e.intensity)
            .unwrap_or(LinearRgba::BLACK),
        ..default()
    }
}

fn mesh(geometry: &ShapeGeometry) -> Mesh {
    match *geometry {
        ShapeGeometry::Cuboid { size } => Cuboid::from_size(size).into(),
        ShapeGeometry::Plane { size } => Plane3d::new(Vec3::Z, size / 2.).into(),
    }
}

fn spawn_shape(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    shape: &ShapeRecord,
    transform: Transform,
    parent: Entity,
) -> Entity {
    let mut entity = commands.spawn((
        Name::new(shape.label.clone()),
        Mesh3d(meshes.add(mesh(&shape.geometry))),
        MeshMaterial3d(materials.add(standard_material(&shape.material))),
        transform,
        ChildOf(parent),
    ));
    if !shape.cast_shadow {
        entity.insert(NotShadowCaster);
    }
    if !shape.receive_shadow {
        entity.insert(NotShadowReceiver);
    }
    entity.id()
}

/// Spawn every shape of `scene` under a new root entity, which is returned.
/// Hover groups become intermediate entities carrying a [`Hoverable`], so
/// that scaling them scales their shapes around the group pivot.
pub fn spawn_scene_description(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    scene: &SceneDescription,
) -> Entity {
    let root = commands
        .spawn((Name::new("trading floor"), Transform::default(), Visibility::default()))
        .id();

    let mut group_entities: Vec<(HoverGroupId, Entity)> = Vec::new();
    for group in &scene.hover_groups {
        let entity = commands
            .spawn((
                Name::new(group.label.clone()),
                Hoverable::new(group.style),
                group.transform,
                Visibility::default(),
                ChildOf(root),
            ))
            .id();
        group_entities.push((group.id, entity));
    }

    for shape in &scene.shapes {
        let group = shape.hover.and_then(|id| {
            let group = scene.hover_group(id)?;
            let entity = group_entities
                .iter()
                .find(|(group_id, _)| *group_id == id)
                .map(|(_, entity)| *entity)?;
            Some((group, entity))
        });

        match group {
            Some((group, group_entity)) => {
                let local = group.local_transform_of(shape);
                let entity = spawn_shape(commands, meshes, materials, shape, local, group_entity);
                if shape.highlight_surface {
                    commands.entity(entity).insert(HighlightedSurface {
                        group: group_entity,
                    });
                }
            }
            None => {
                spawn_shape(commands, meshes, materials, shape, shape.transform, root);
            }
        }
    }

    root
}

/// Recolour highlighted surfaces whose hover group changed state
fn apply_hover_colors(
    groups: Query<&Hoverable, Changed<Hoverable>>,
    surfaces: Query<(&HighlightedSurface, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (surface, material) in &surfaces {
        let Ok(hoverable) = groups.get(surface.group) else {
            continue;
        };
        let Some(mut material) = materials.get_mut(&material.0) else {
            continue;
        };
        let color = hoverable.screen_color();
        material.base_color = color.into();
        material.emissive = LinearRgba::from(color) * hoverable.style.emissive_intensity;
    }
}
