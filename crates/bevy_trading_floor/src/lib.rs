//! # Bevy Trading Floor
//!
//! **Bevy Trading Floor** describes an office trading floor and drives the locomotion animation of
//! a character walking around in it, for [Bevy](https://bevyengine.org/).
//!
//! ## Introduction
//!
//! The crate does not play animations or load models itself. It decides *what* should happen and
//! leaves the *how* to the app:
//!
//! - [`AnimationSelector`] turns a [`LocomotionState`] (moving, sprinting, grounded) into an
//!   [`AnimationDirective`]: which clip to play, at which rate, and whether to crossfade from the
//!   previous clip. Clips are a closed set ([`LocomotionClip`]: idle, run, fall) mapped to the
//!   names in your animation set through a [`ClipMap`]. A crossfade is only requested when the
//!   clip actually changes, so repeated updates with the same state never restart the clip.
//!   Add a [`CharacterAnimator`] together with a [`LocomotionState`] and the [`AvailableClips`]
//!   of your model to an entity, and [`TradingFloorPlugin`] will publish an
//!   [`AnimationDirectiveMessage`] every time its locomotion state changes.
//! - [`GridConfig`] lays out rows and columns of repeated objects centered on the origin. The
//!   desks of the floor are placed with it.
//! - [`SceneDescription`] is the floor itself as plain data: boxes and planes with their
//!   materials and world transforms, grouped into hoverable units (terminals and wall displays).
//!   [`spawn::spawn_scene_description`] instantiates it as meshes.
//!
//! Everything is configured through [`TradingFloorConfig`] assets, defined in `*.floor.ron`
//! files. Every field is optional:
//!
//! ```ron
//! (
//!     desk_grid: (rows: 3, cols: 4, spacing: 3.0),
//!     clips: {
//!         Idle: "IDLE",
//!         Run: "RUN",
//!         Fall: "FALL",
//!     },
//!     selector: (
//!         sprint_playback_rate: 1.25,
//!         blend_duration_seconds: 0.15,
//!         sprint_rate_while_airborne: true,
//!     ),
//!     character: (scale: 1.5, yaw: 3.14159),
//! )
//! ```
//!
//! ## Example
//!
//! ```ignore
//! fn spawn_character(mut commands: Commands, configs: Res<Assets<TradingFloorConfig>>, ...) {
//!     //...
//!     commands.spawn((
//!         LocomotionState::IDLE,
//!         AvailableClips::new(["IDLE", "RUN", "FALL"]),
//!         CharacterAnimator::from_config(config),
//!     ));
//!     //...
//! }
//!
//! fn play_directives(mut directives: MessageReader<AnimationDirectiveMessage>) {
//!     for AnimationDirectiveMessage { entity, directive } in directives.read() {
//!         // hand `directive` to your animation player
//!     }
//! }
//! ```
//!
//! The `inspect` binary of the `bevy_trading_floor_inspect` crate prints the layout, the scene
//! and a locomotion trace for a `*.floor.ron` file without opening a window.
//!
//! [`AnimationSelector`]: prelude::AnimationSelector
//! [`LocomotionState`]: prelude::LocomotionState
//! [`AnimationDirective`]: prelude::AnimationDirective
//! [`LocomotionClip`]: prelude::LocomotionClip
//! [`ClipMap`]: prelude::ClipMap
//! [`CharacterAnimator`]: prelude::CharacterAnimator
//! [`AvailableClips`]: prelude::AvailableClips
//! [`AnimationDirectiveMessage`]: prelude::AnimationDirectiveMessage
//! [`GridConfig`]: prelude::GridConfig
//! [`SceneDescription`]: prelude::SceneDescription
//! [`TradingFloorConfig`]: prelude::TradingFloorConfig

pub mod spawn;

pub use bevy_trading_floor_core as core;

use bevy::app::{App, Plugin};
use bevy_trading_floor_core::plugin::TradingFloorCorePlugin;

/// Adds trading floor support to an app: everything in [`TradingFloorCorePlugin`] plus hover
/// colours for spawned scenes.
#[derive(Default)]
pub struct TradingFloorPlugin;

impl Plugin for TradingFloorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TradingFloorCorePlugin)
            .add_plugins(spawn::SceneSpawnPlugin);
    }
}

pub mod prelude {
    pub use super::TradingFloorPlugin;
    pub use super::spawn::{HighlightedSurface, spawn_scene_description};
    pub use bevy_trading_floor_core::prelude::*;
}
