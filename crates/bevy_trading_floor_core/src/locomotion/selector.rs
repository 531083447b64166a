use bevy::reflect::Reflect;
use serde::{Deserialize, Serialize};

use super::{ClipLibrary, ClipMap, LocomotionClip, LocomotionState};
use crate::errors::MissingClipError;

/// Tunables for [`AnimationSelector`]
#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSettings {
    pub base_playback_rate: f32,
    /// Playback rate while moving and sprinting
    pub sprint_playback_rate: f32,
    /// Crossfade duration between two different clips
    pub blend_duration_seconds: f32,
    /// If set, a character that was sprinting when it left the ground keeps the
    /// sprint playback rate on the fall clip.
    pub sprint_rate_while_airborne: bool,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            base_playback_rate: 1.,
            sprint_playback_rate: 1.25,
            blend_duration_seconds: 0.15,
            sprint_rate_while_airborne: true,
        }
    }
}

/// Crossfade request from one clip to another. `from` is `None` when nothing
/// was playing, in which case the target clip should be started immediately.
#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipTransition {
    pub from: Option<String>,
    pub to: String,
    pub blend_duration_seconds: f32,
}

impl ClipTransition {
    pub fn is_initial(&self) -> bool {
        self.from.is_none()
    }
}

/// What the playback layer should do after a locomotion update
#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDirective {
    pub clip: LocomotionClip,
    pub target_clip: String,
    pub playback_rate: f32,
    /// Only present when the resolved clip differs from the previous one
    pub transition: Option<ClipTransition>,
}

/// Picks the locomotion clip for a character and decides when to crossfade.
///
/// The only state is the name of the last clip that was successfully
/// resolved. Calls for a single character must be serialized.
#[derive(Reflect, Debug, Clone, Default)]
pub struct AnimationSelector {
    clips: ClipMap,
    settings: SelectorSettings,
    active_clip: Option<String>,
}

impl AnimationSelector {
    pub fn new(clips: ClipMap, settings: SelectorSettings) -> Self {
        Self {
            clips,
            settings,
            active_clip: None,
        }
    }

    pub fn clip_map(&self) -> &ClipMap {
        &self.clips
    }

    pub fn settings(&self) -> &SelectorSettings {
        &self.settings
    }

    /// Name of the clip currently playing, `None` before the first
    /// successful resolution.
    pub fn active_clip(&self) -> Option<&str> {
        self.active_clip.as_deref()
    }

    /// Forget the active clip. The next resolution starts from scratch.
    pub fn reset(&mut self) {
        self.active_clip = None;
    }

    /// Which clip a state maps to, in priority order: falling, running, idle.
    pub fn resolve_clip(state: &LocomotionState) -> LocomotionClip {
        if !state.is_grounded {
            LocomotionClip::Fall
        } else if state.is_moving {
            LocomotionClip::Run
        } else {
            LocomotionClip::Idle
        }
    }

    pub fn playback_rate(&self, state: &LocomotionState, clip: LocomotionClip) -> f32 {
        let airborne_sprint_blocked =
            clip == LocomotionClip::Fall && !self.settings.sprint_rate_while_airborne;

        if state.is_sprint_moving() && !airborne_sprint_blocked {
            self.settings.sprint_playback_rate
        } else {
            self.settings.base_playback_rate
        }
    }

    /// Resolve the directive for `state`.
    ///
    /// If the resolved clip is not in `library` the selector state is left
    /// untouched and a [`MissingClipError`] is returned.
    pub fn select(
        &mut self,
        state: &LocomotionState,
        library: &(impl ClipLibrary + ?Sized),
    ) -> Result<AnimationDirective, MissingClipError> {
        let clip = Self::resolve_clip(state);
        let target_clip = self.clips.name_of(clip);

        if !library.contains_clip(target_clip) {
            return Err(MissingClipError {
                clip,
                clip_name: target_clip.to_string(),
            });
        }

        let transition = match &self.active_clip {
            Some(active) if active == target_clip => None,
            previous => Some(ClipTransition {
                from: previous.clone(),
                to: target_clip.to_string(),
                blend_duration_seconds: self.settings.blend_duration_seconds,
            }),
        };

        let directive = AnimationDirective {
            clip,
            target_clip: target_clip.to_string(),
            playback_rate: self.playback_rate(state, clip),
            transition,
        };

        if directive.transition.is_some() {
            self.active_clip = Some(directive.target_clip.clone());
        }

        Ok(directive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CLIPS: [&str; 3] = ["IDLE", "RUN", "FALL"];

    fn all_states() -> Vec<LocomotionState> {
        let mut states = Vec::new();
        for is_moving in [false, true] {
            for is_sprinting in [false, true] {
                for is_grounded in [false, true] {
                    states.push(LocomotionState {
                        is_moving,
                        is_sprinting,
                        is_grounded,
                    });
                }
            }
        }
        states
    }

    #[test]
    fn airborne_always_falls() {
        for state in all_states().into_iter().filter(|s| !s.is_grounded) {
            let mut selector = AnimationSelector::default();
            let directive = selector.select(&state, &ALL_CLIPS[..]).unwrap();
            assert_eq!(directive.clip, LocomotionClip::Fall);
            assert_eq!(directive.target_clip, "FALL");
        }
    }

    #[test]
    fn grounded_still_is_idle() {
        for is_sprinting in [false, true] {
            let state = LocomotionState {
                is_moving: false,
                is_sprinting,
                is_grounded: true,
            };
            let mut selector = AnimationSelector::default();
            let directive = selector.select(&state, &ALL_CLIPS[..]).unwrap();
            assert_eq!(directive.target_clip, "IDLE");
            assert_eq!(directive.playback_rate, 1.);
        }
    }

    #[test]
    fn grounded_moving_runs_faster_when_sprinting() {
        let mut selector = AnimationSelector::default();

        let walk = selector
            .select(&LocomotionState::moving(false), &ALL_CLIPS[..])
            .unwrap();
        assert_eq!(walk.target_clip, "RUN");
        assert_eq!(walk.playback_rate, 1.);

        let sprint = selector
            .select(&LocomotionState::moving(true), &ALL_CLIPS[..])
            .unwrap();
        assert_eq!(sprint.target_clip, "RUN");
        assert_eq!(sprint.playback_rate, 1.25);
        // Rate change alone does not retrigger a blend
        assert_eq!(sprint.transition, None);
    }

    #[test]
    fn repeated_state_never_transitions_twice() {
        for state in all_states() {
            let mut selector = AnimationSelector::default();
            selector.select(&state, &ALL_CLIPS[..]).unwrap();
            let second = selector.select(&state, &ALL_CLIPS[..]).unwrap();
            assert_eq!(second.transition, None, "{state:?}");
        }
    }

    #[test]
    fn first_resolution_has_no_source_clip() {
        for state in all_states() {
            let mut selector = AnimationSelector::default();
            let directive = selector.select(&state, &ALL_CLIPS[..]).unwrap();
            let transition = directive.transition.unwrap();
            assert!(transition.is_initial());
            assert_eq!(transition.to, directive.target_clip);
        }
    }

    #[test]
    fn idle_to_run_crossfades_once() {
        let mut selector = AnimationSelector::default();
        selector
            .select(&LocomotionState::IDLE, &ALL_CLIPS[..])
            .unwrap();

        let directive = selector
            .select(&LocomotionState::moving(false), &ALL_CLIPS[..])
            .unwrap();
        assert_eq!(
            directive.transition,
            Some(ClipTransition {
                from: Some("IDLE".into()),
                to: "RUN".into(),
                blend_duration_seconds: 0.15,
            })
        );
        assert_eq!(selector.active_clip(), Some("RUN"));
    }

    #[test]
    fn missing_clip_keeps_previous_state() {
        let library = ["IDLE", "RUN"];
        let mut selector = AnimationSelector::default();
        selector.select(&LocomotionState::IDLE, &library[..]).unwrap();

        let err = selector
            .select(&LocomotionState::IDLE.airborne(), &library[..])
            .unwrap_err();
        assert_eq!(
            err,
            MissingClipError {
                clip: LocomotionClip::Fall,
                clip_name: "FALL".into(),
            }
        );
        assert_eq!(selector.active_clip(), Some("IDLE"));

        // Landing again picks up where we left off
        let directive = selector
            .select(&LocomotionState::moving(false), &library[..])
            .unwrap();
        assert_eq!(
            directive.transition.and_then(|t| t.from),
            Some("IDLE".to_string())
        );
    }

    #[test]
    fn missing_first_clip_leaves_nothing_active() {
        let library: [&str; 0] = [];
        let mut selector = AnimationSelector::default();
        assert!(selector.select(&LocomotionState::IDLE, &library[..]).is_err());
        assert_eq!(selector.active_clip(), None);
    }

    #[test]
    fn custom_clip_names_are_used() {
        let clips = ClipMap::default()
            .with_clip(LocomotionClip::Idle, "Idle_Loop")
            .with_clip(LocomotionClip::Run, "Sprint_Loop");
        let library = ["Idle_Loop", "Sprint_Loop", "FALL"];
        let mut selector = AnimationSelector::new(clips, SelectorSettings::default());

        selector.select(&LocomotionState::IDLE, &library[..]).unwrap();
        let directive = selector
            .select(&LocomotionState::moving(true), &library[..])
            .unwrap();
        let transition = directive.transition.unwrap();
        assert_eq!(transition.from.as_deref(), Some("Idle_Loop"));
        assert_eq!(transition.to, "Sprint_Loop");
    }

    #[test]
    fn sprint_rate_while_falling_is_configurable() {
        let sprint_jump = LocomotionState::moving(true).airborne();

        let mut selector = AnimationSelector::default();
        let directive = selector.select(&sprint_jump, &ALL_CLIPS[..]).unwrap();
        assert_eq!(directive.playback_rate, 1.25);

        let mut selector = AnimationSelector::new(
            ClipMap::default(),
            SelectorSettings {
                sprint_rate_while_airborne: false,
                ..Default::default()
            },
        );
        let directive = selector.select(&sprint_jump, &ALL_CLIPS[..]).unwrap();
        assert_eq!(directive.playback_rate, 1.);
    }

    #[test]
    fn reset_starts_over() {
        let mut selector = AnimationSelector::default();
        selector
            .select(&LocomotionState::IDLE, &ALL_CLIPS[..])
            .unwrap();
        selector.reset();
        assert_eq!(selector.active_clip(), None);

        let directive = selector
            .select(&LocomotionState::IDLE, &ALL_CLIPS[..])
            .unwrap();
        assert!(directive.transition.unwrap().is_initial());
    }
}
