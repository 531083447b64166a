pub mod loader;

use std::f32::consts::PI;

use bevy::{
    asset::{Asset, ReflectAsset},
    math::{Quat, Vec3},
    reflect::Reflect,
    transform::components::Transform,
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AssetLoaderError, InvalidGridConfigError},
    layout::GridConfig,
    locomotion::{AnimationSelector, ClipMap, SelectorSettings},
    scene::{SceneDescription, authoring},
};

/// How the character model is oriented and sized relative to its controller
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterModelConfig {
    pub scale: f32,
    /// Rotation around +Y, in radians. Most exported models face -Z.
    pub yaw: f32,
}

impl Default for CharacterModelConfig {
    fn default() -> Self {
        Self { scale: 1.5, yaw: PI }
    }
}

impl CharacterModelConfig {
    pub fn transform(&self) -> Transform {
        Transform::from_rotation(Quat::from_rotation_y(self.yaw))
            .with_scale(Vec3::splat(self.scale))
    }
}

/// Everything configurable about the floor, loaded from `*.floor.ron` files
#[derive(Asset, Reflect, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[reflect(Asset)]
#[serde(default)]
pub struct TradingFloorConfig {
    pub desk_grid: GridConfig,
    pub clips: ClipMap,
    pub selector: SelectorSettings,
    pub character: CharacterModelConfig,
}

impl TradingFloorConfig {
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::de::from_str(text)
    }

    /// Parse a `*.floor.ron` file and check its desk grid, so that a bad grid
    /// fails at load time rather than when the scene gets built.
    pub fn from_ron_bytes(bytes: &[u8]) -> Result<Self, AssetLoaderError> {
        let config: Self = ron::de::from_bytes(bytes)?;
        config.desk_grid.validate()?;
        Ok(config)
    }

    pub fn animation_selector(&self) -> AnimationSelector {
        AnimationSelector::new(self.clips.clone(), self.selector.clone())
    }

    pub fn scene(&self) -> Result<SceneDescription, InvalidGridConfigError> {
        authoring::trading_floor(&self.desk_grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locomotion::LocomotionClip;

    #[test]
    fn empty_config_uses_defaults() {
        let config = TradingFloorConfig::from_ron("()").unwrap();
        assert_eq!(config, TradingFloorConfig::default());
        assert_eq!(config.desk_grid, GridConfig::new(3, 4, 3.));
        assert_eq!(config.selector.blend_duration_seconds, 0.15);
        assert_eq!(config.character.scale, 1.5);
    }

    #[test]
    fn partial_config() {
        let config = TradingFloorConfig::from_ron(
            r#"(
                desk_grid: (rows: 2, cols: 5, spacing: 2.5),
                clips: {
                    Idle: "Idle_Loop",
                    Run: "Sprint_Loop",
                },
                selector: (sprint_rate_while_airborne: false),
            )"#,
        )
        .unwrap();

        assert_eq!(config.desk_grid, GridConfig::new(2, 5, 2.5));
        assert_eq!(config.clips.name_of(LocomotionClip::Run), "Sprint_Loop");
        assert_eq!(config.clips.name_of(LocomotionClip::Fall), "FALL");
        assert!(!config.selector.sprint_rate_while_airborne);
        assert_eq!(config.selector.sprint_playback_rate, 1.25);
        assert_eq!(config.scene().unwrap().shapes_labelled("desk-").count(), 10 * 13);
    }

    #[test]
    fn config_roundtrip() {
        let config = TradingFloorConfig::default();
        let text = ron::ser::to_string_pretty(&config, Default::default()).unwrap();
        assert_eq!(TradingFloorConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn loading_rejects_invalid_grid() {
        let result =
            TradingFloorConfig::from_ron_bytes(b"(desk_grid: (rows: 0, cols: 4, spacing: 3.0))");
        assert!(matches!(
            result,
            Err(AssetLoaderError::InvalidGrid(InvalidGridConfigError::NoRows))
        ));

        // Plain parsing leaves validation to whoever builds the scene
        let config =
            TradingFloorConfig::from_ron("(desk_grid: (rows: 0, cols: 4, spacing: 3.0))").unwrap();
        assert!(config.scene().is_err());
    }

    #[test]
    fn loading_reports_malformed_ron() {
        let result = TradingFloorConfig::from_ron_bytes(b"(desk_grid: (rows: 3,");
        assert!(matches!(result, Err(AssetLoaderError::RonSpannedError(_))));
    }

    #[test]
    fn loading_accepts_valid_config() {
        let config =
            TradingFloorConfig::from_ron_bytes(b"(desk_grid: (rows: 1, cols: 2, spacing: 2.0))")
                .unwrap();
        assert_eq!(config.desk_grid, GridConfig::new(1, 2, 2.));
    }
}
