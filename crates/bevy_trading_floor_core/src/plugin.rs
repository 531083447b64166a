use bevy::{
    app::{App, Plugin, Update},
    asset::AssetApp,
    ecs::schedule::{IntoScheduleConfigs, SystemSet},
};

use crate::{
    character_animator::CharacterAnimator,
    config::{CharacterModelConfig, TradingFloorConfig, loader::TradingFloorConfigLoader},
    layout::{GridConfig, Placement},
    locomotion::{
        AnimationDirective, AvailableClips, ClipTransition, LocomotionClip, LocomotionState,
        SelectorSettings,
    },
    scene::Hoverable,
    systems::{AnimationDirectiveMessage, apply_hover_scale, select_character_animations},
};

/// Adds locomotion animation selection and hover highlighting to an app
#[derive(Default)]
pub struct TradingFloorCorePlugin;

#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum TradingFloorSet {
    /// Locomotion flags are turned into animation directives. Systems that
    /// write [`LocomotionState`] should run before this set, playback systems
    /// after it.
    Select,
    /// Hover flags are turned into transforms
    Highlight,
}

impl Plugin for TradingFloorCorePlugin {
    fn build(&self, app: &mut App) {
        self.register_assets(app);
        self.register_types(app);

        app.add_message::<AnimationDirectiveMessage>();

        app.configure_sets(
            Update,
            (TradingFloorSet::Select, TradingFloorSet::Highlight).chain(),
        );

        app.add_systems(
            Update,
            (
                select_character_animations.in_set(TradingFloorSet::Select),
                apply_hover_scale.in_set(TradingFloorSet::Highlight),
            ),
        );
    }
}

impl TradingFloorCorePlugin {
    /// Registers asset types and their loaders
    fn register_assets(&self, app: &mut App) {
        app.init_asset::<TradingFloorConfig>()
            .init_asset_loader::<TradingFloorConfigLoader>()
            .register_asset_reflect::<TradingFloorConfig>();
    }

    /// "Other" reflect registrations
    fn register_types(&self, app: &mut App) {
        app //
            .register_type::<LocomotionState>()
            .register_type::<LocomotionClip>()
            .register_type::<AvailableClips>()
            .register_type::<CharacterAnimator>()
            .register_type::<AnimationDirective>()
            .register_type::<ClipTransition>()
            .register_type::<SelectorSettings>()
            .register_type::<GridConfig>()
            .register_type::<Placement>()
            .register_type::<CharacterModelConfig>()
            .register_type::<Hoverable>();
    }
}
