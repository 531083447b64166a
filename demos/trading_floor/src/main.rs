extern crate bevy;
extern crate bevy_trading_floor;

use bevy::prelude::*;
use bevy_trading_floor::prelude::*;
use std::f32::consts::PI;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(TradingFloorPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, spawn_floor_when_loaded)
        .add_systems(
            Update,
            (keyboard_locomotion_control, keyboard_hover_control)
                .before(TradingFloorSet::Select),
        )
        .add_systems(Update, log_directives.after(TradingFloorSet::Select))
        .run();
}

#[derive(Resource)]
struct FloorConfigHandle(Handle<TradingFloorConfig>);

#[derive(Component)]
struct Character;

fn setup(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(FloorConfigHandle(
        asset_server.load("default.floor.ron"),
    ));

    // Camera
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0., 12., 16.).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Lights
    commands.spawn((
        Transform::from_rotation(Quat::from_euler(EulerRot::ZYX, 0.0, 1.0, -PI / 4.)),
        DirectionalLight {
            illuminance: 2_000.,
            ..default()
        },
    ));
    commands.spawn((
        Transform::from_xyz(0., 9., 0.),
        PointLight {
            shadows_enabled: true,
            intensity: 4_000_000.,
            range: 40.,
            ..default()
        },
    ));

    println!("Controls:");
    println!("\tArrows: Move");
    println!("\tShift: Sprint");
    println!("\tSpace: Jump (airborne while held)");
    println!("\tH: Toggle hover highlight on all terminals and displays");
}

fn spawn_floor_when_loaded(
    mut commands: Commands,
    handle: Res<FloorConfigHandle>,
    configs: Res<Assets<TradingFloorConfig>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut spawned: Local<bool>,
) {
    if *spawned {
        return;
    }
    let Some(config) = configs.get(&handle.0) else {
        return;
    };
    *spawned = true;

    let scene = match config.scene() {
        Ok(scene) => scene,
        Err(error) => {
            error!("Cannot build trading floor: {error}");
            return;
        }
    };
    spawn_scene_description(&mut commands, &mut meshes, &mut materials, &scene);

    // The character model is a stand-in capsule; clip playback is up to the app
    commands
        .spawn((
            Name::new("character"),
            Character,
            LocomotionState::IDLE,
            AvailableClips::new(
                LocomotionClip::ALL
                    .iter()
                    .map(|clip| config.clips.name_of(*clip).to_string()),
            ),
            CharacterAnimator::from_config(config),
            Transform::from_xyz(0., 0., 8.),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Capsule3d::new(0.25, 0.7))),
                MeshMaterial3d(materials.add(Color::srgb(0.9, 0.6, 0.2))),
                config
                    .character
                    .transform()
                    .with_translation(Vec3::Y * 0.6 * config.character.scale),
            ));
        });
}

fn keyboard_locomotion_control(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut characters: Query<(&mut LocomotionState, &mut Transform), With<Character>>,
) {
    let mut direction = Vec3::ZERO;
    if keyboard_input.pressed(KeyCode::ArrowUp) {
        direction.z -= 1.;
    }
    if keyboard_input.pressed(KeyCode::ArrowDown) {
        direction.z += 1.;
    }
    if keyboard_input.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.;
    }
    if keyboard_input.pressed(KeyCode::ArrowRight) {
        direction.x += 1.;
    }

    let next = LocomotionState {
        is_moving: direction != Vec3::ZERO,
        is_sprinting: keyboard_input.pressed(KeyCode::ShiftLeft),
        is_grounded: !keyboard_input.pressed(KeyCode::Space),
    };

    for (mut state, mut transform) in &mut characters {
        // Only touch the component on real changes so the selector does not rerun
        state.set_if_neq(next);

        if next.is_moving {
            let speed = if next.is_sprint_moving() { 6. } else { 4. };
            transform.translation += direction.normalize() * speed * time.delta_secs();
            transform.look_to(direction, Vec3::Y);
        }
    }
}

fn keyboard_hover_control(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut hoverables: Query<&mut Hoverable>,
) {
    if !keyboard_input.just_pressed(KeyCode::KeyH) {
        return;
    }
    for mut hoverable in &mut hoverables {
        hoverable.hovered = !hoverable.hovered;
    }
}

fn log_directives(mut directives: MessageReader<AnimationDirectiveMessage>) {
    for AnimationDirectiveMessage { entity, directive } in directives.read() {
        match &directive.transition {
            Some(transition) => info!(
                "{entity}: play {} at {}x (from {:?}, blend {}s)",
                directive.target_clip,
                directive.playback_rate,
                transition.from,
                transition.blend_duration_seconds
            ),
            None => info!(
                "{entity}: keep {} at {}x",
                directive.target_clip, directive.playback_rate
            ),
        }
    }
}
