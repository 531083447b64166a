pub mod clip_library;
pub mod selector;

use bevy::{ecs::component::Component, prelude::ReflectComponent, reflect::Reflect};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use clip_library::{AvailableClips, ClipLibrary};
pub use selector::{AnimationDirective, AnimationSelector, ClipTransition, SelectorSettings};

/// Movement flags of a character, supplied by whatever drives it (a character
/// controller, a physics body, network state...).
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[reflect(Component)]
pub struct LocomotionState {
    pub is_moving: bool,
    /// Only has an effect while `is_moving` is set
    pub is_sprinting: bool,
    pub is_grounded: bool,
}

impl LocomotionState {
    pub const IDLE: Self = Self {
        is_moving: false,
        is_sprinting: false,
        is_grounded: true,
    };

    pub fn moving(sprinting: bool) -> Self {
        Self {
            is_moving: true,
            is_sprinting: sprinting,
            is_grounded: true,
        }
    }

    pub fn airborne(self) -> Self {
        Self {
            is_grounded: false,
            ..self
        }
    }

    /// Whether the sprint playback rate applies
    pub fn is_sprint_moving(&self) -> bool {
        self.is_moving && self.is_sprinting
    }
}

/// The closed set of clips the locomotion selector can pick from. The actual
/// asset names are supplied separately through a [`ClipMap`].
#[derive(
    Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum LocomotionClip {
    Idle,
    Run,
    Fall,
}

impl LocomotionClip {
    pub const ALL: [LocomotionClip; 3] = [Self::Idle, Self::Run, Self::Fall];

    /// Clip name used when a [`ClipMap`] has no entry for this clip
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Run => "RUN",
            Self::Fall => "FALL",
        }
    }
}

/// Maps logical locomotion clips to the names of the clips in the character's
/// animation set.
#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipMap {
    #[reflect(ignore)]
    names: IndexMap<LocomotionClip, String>,
}

impl Default for ClipMap {
    fn default() -> Self {
        Self {
            names: LocomotionClip::ALL
                .iter()
                .map(|clip| (*clip, clip.default_name().to_string()))
                .collect(),
        }
    }
}

impl ClipMap {
    /// A map with no entries. Every clip resolves to its default name.
    pub fn empty() -> Self {
        Self {
            names: IndexMap::new(),
        }
    }

    pub fn with_clip(mut self, clip: LocomotionClip, name: impl Into<String>) -> Self {
        self.set(clip, name);
        self
    }

    pub fn set(&mut self, clip: LocomotionClip, name: impl Into<String>) {
        self.names.insert(clip, name.into());
    }

    pub fn name_of(&self, clip: LocomotionClip) -> &str {
        self.names
            .get(&clip)
            .map(String::as_str)
            .unwrap_or_else(|| clip.default_name())
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocomotionClip, &str)> {
        self.names.iter().map(|(clip, name)| (*clip, name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_clip_map_uses_upper_case_names() {
        let map = ClipMap::default();
        assert_eq!(map.name_of(LocomotionClip::Idle), "IDLE");
        assert_eq!(map.name_of(LocomotionClip::Run), "RUN");
        assert_eq!(map.name_of(LocomotionClip::Fall), "FALL");
    }

    #[test]
    fn missing_entry_falls_back_to_default_name() {
        let map = ClipMap::empty().with_clip(LocomotionClip::Run, "Jog");
        assert_eq!(map.name_of(LocomotionClip::Run), "Jog");
        assert_eq!(map.name_of(LocomotionClip::Fall), "FALL");
    }

    #[test]
    fn clip_map_ron_roundtrip() {
        let map = ClipMap::default().with_clip(LocomotionClip::Fall, "Jump_Loop");
        let ron_str = ron::to_string(&map).unwrap();
        let parsed: ClipMap = ron::from_str(&ron_str).unwrap();
        assert_eq!(map, parsed);
        assert_eq!(
            parsed.iter().map(|(clip, _)| clip).collect::<Vec<_>>(),
            LocomotionClip::ALL.to_vec()
        );
    }

    #[test]
    fn sprinting_requires_moving() {
        let state = LocomotionState {
            is_moving: false,
            is_sprinting: true,
            is_grounded: true,
        };
        assert!(!state.is_sprint_moving());
        assert!(LocomotionState::moving(true).is_sprint_moving());
    }
}
