//! The trading floor: building shell, wall displays and a grid of desks with
//! two terminals each.

use std::f32::consts::FRAC_PI_2;

use bevy::{
    math::{Quat, Vec2, Vec3},
    transform::components::Transform,
};

use super::{HoverStyle, SceneBuilder, SceneDescription, SurfaceMaterial, srgb_hex};
use crate::{
    errors::InvalidGridConfigError,
    layout::{GridConfig, Placement},
};

pub const ROOM_SIZE: f32 = 20.;
pub const WALL_HEIGHT: f32 = 10.;
pub const WALL_THICKNESS: f32 = 0.2;

fn floor_material() -> SurfaceMaterial {
    SurfaceMaterial::new(srgb_hex(0x34495e), 0.2, 0.8)
}

fn wall_material() -> SurfaceMaterial {
    SurfaceMaterial::new(srgb_hex(0x2c3e50), 0.3, 0.7)
}

fn hardware_material() -> SurfaceMaterial {
    SurfaceMaterial::new(srgb_hex(0x2c3e50), 0.7, 0.3)
}

fn desk_top_material() -> SurfaceMaterial {
    SurfaceMaterial::new(srgb_hex(0x95a5a6), 0.3, 0.7)
}

fn desk_leg_material() -> SurfaceMaterial {
    SurfaceMaterial::new(srgb_hex(0x7f8c8d), 0.3, 0.7)
}

fn screen_material(style: &HoverStyle) -> SurfaceMaterial {
    SurfaceMaterial::new(style.idle_color, 0.8, 0.2)
        .with_emission(style.idle_color, style.emissive_intensity)
}

/// Whole floor, with one desk per cell of `desk_grid`
pub fn trading_floor(desk_grid: &GridConfig) -> Result<SceneDescription, InvalidGridConfigError> {
    let desks = desk_grid.placements()?;

    let mut builder = SceneBuilder::new();
    building_shell(&mut builder);
    wall_displays(&mut builder);
    trading_desks(&mut builder, &desks);

    Ok(builder.build())
}

/// Floor slab and the four walls around it. Static, receives shadows only.
pub fn building_shell(builder: &mut SceneBuilder) {
    let half = ROOM_SIZE / 2.;
    let wall_y = WALL_HEIGHT / 2.;

    builder
        .cuboid(
            "floor",
            Vec3::new(ROOM_SIZE, WALL_THICKNESS, ROOM_SIZE),
            floor_material(),
            Vec3::new(0., -WALL_THICKNESS / 2., 0.),
        )
        .shadows(false, true);

    let along_x = Vec3::new(ROOM_SIZE, WALL_HEIGHT, WALL_THICKNESS);
    let along_z = Vec3::new(WALL_THICKNESS, WALL_HEIGHT, ROOM_SIZE);
    let walls = [
        ("wall-north", along_x, Vec3::new(0., wall_y, -half)),
        ("wall-south", along_x, Vec3::new(0., wall_y, half)),
        ("wall-west", along_z, Vec3::new(-half, wall_y, 0.)),
        ("wall-east", along_z, Vec3::new(half, wall_y, 0.)),
    ];
    for (label, size, translation) in walls {
        builder
            .cuboid(label, size, wall_material(), translation)
            .shadows(false, true);
    }
}

/// Displays on the north, west and east walls, facing into the room
pub fn wall_displays(builder: &mut SceneBuilder) {
    let inset = ROOM_SIZE / 2. - WALL_THICKNESS;
    let displays = [
        ("display-north", Vec3::new(0., 6., -inset), 0.),
        ("display-west", Vec3::new(-inset, 6., 0.), FRAC_PI_2),
        ("display-east", Vec3::new(inset, 6., 0.), -FRAC_PI_2),
    ];
    for (label, translation, yaw) in displays {
        wall_display(
            builder,
            label,
            Transform::from_translation(translation).with_rotation(Quat::from_rotation_y(yaw)),
        );
    }
}

pub fn wall_display(builder: &mut SceneBuilder, label: &str, local: Transform) {
    let style = HoverStyle::wall_display();
    builder.hover_group(label, local, style, |b| {
        b.cuboid("frame", Vec3::new(4., 2., 0.1), hardware_material(), Vec3::ZERO);
        b.plane(
            "screen",
            Vec2::new(3.8, 1.8),
            screen_material(&style),
            Vec3::new(0., 0., 0.06),
        )
        .shadows(false, false)
        .highlighted();
    });
}

pub fn trading_desks(builder: &mut SceneBuilder, desks: &[Placement]) {
    for desk in desks {
        trading_desk(
            builder,
            &desk.key("desk"),
            Transform::from_translation(desk.position),
        );
    }
}

pub fn trading_desk(builder: &mut SceneBuilder, label: &str, local: Transform) {
    builder.group(label, local, |b| {
        b.cuboid(
            "top",
            Vec3::new(2., 0.1, 1.),
            desk_top_material(),
            Vec3::new(0., 0.8, 0.),
        );

        let leg = Vec3::new(0.1, 0.8, 0.1);
        let legs = [
            Vec3::new(-0.9, 0.4, -0.4),
            Vec3::new(0.9, 0.4, -0.4),
            Vec3::new(-0.9, 0.4, 0.4),
            Vec3::new(0.9, 0.4, 0.4),
        ];
        for (i, translation) in legs.into_iter().enumerate() {
            b.cuboid(&format!("leg-{i}"), leg, desk_leg_material(), translation);
        }

        // Angled slightly towards the middle of the desk
        terminal(
            b,
            "terminal-0",
            Transform::from_xyz(-0.5, 0.8, 0.).with_rotation(Quat::from_rotation_y(0.2)),
        );
        terminal(
            b,
            "terminal-1",
            Transform::from_xyz(0.5, 0.8, 0.).with_rotation(Quat::from_rotation_y(-0.2)),
        );
    });
}

pub fn terminal(builder: &mut SceneBuilder, label: &str, local: Transform) {
    let style = HoverStyle::terminal();
    builder.hover_group(label, local, style, |b| {
        b.cuboid(
            "base",
            Vec3::new(0.4, 0.1, 0.4),
            hardware_material(),
            Vec3::new(0., 0.05, 0.),
        );
        b.cuboid(
            "stand",
            Vec3::new(0.1, 0.5, 0.1),
            hardware_material(),
            Vec3::new(0., 0.3, 0.),
        );
        b.cuboid(
            "housing",
            Vec3::new(1.2, 0.8, 0.1),
            SurfaceMaterial::new(srgb_hex(0x34495e), 0.5, 0.5),
            Vec3::new(0., 0.6, 0.),
        );
        b.plane(
            "screen",
            Vec2::new(1.1, 0.7),
            screen_material(&style),
            Vec3::new(0., 0.6, 0.06),
        )
        .shadows(false, false)
        .highlighted();
    });
}
