pub mod character_animator;
pub mod config;
pub mod errors;
pub mod layout;
pub mod locomotion;
pub mod plugin;
pub mod scene;
pub mod systems;

pub mod prelude {
    use super::*;
    pub use character_animator::CharacterAnimator;
    pub use config::{CharacterModelConfig, TradingFloorConfig};
    pub use errors::{InvalidGridConfigError, MissingClipError};
    pub use layout::{GridConfig, Placement};
    pub use locomotion::{
        AnimationDirective, AnimationSelector, AvailableClips, ClipLibrary, ClipMap,
        ClipTransition, LocomotionClip, LocomotionState, SelectorSettings,
    };
    pub use plugin::*;
    pub use scene::{
        HoverGroup, HoverGroupId, HoverStyle, Hoverable, SceneBuilder, SceneDescription,
        ShapeGeometry, ShapeRecord, SurfaceMaterial,
    };
    pub use systems::AnimationDirectiveMessage;
}
