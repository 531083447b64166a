use bevy::{ecs::prelude::*, reflect::prelude::*};

use crate::{
    config::TradingFloorConfig,
    errors::MissingClipError,
    locomotion::{AnimationDirective, AnimationSelector, ClipLibrary, LocomotionState},
};

/// Per-character locomotion animation controls. Owns the character's
/// [`AnimationSelector`] and remembers what it last asked the playback layer
/// to do.
#[derive(Component, Default, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct CharacterAnimator {
    selector: AnimationSelector,
    last_directive: Option<AnimationDirective>,
    /// Error produced by the last update, if any
    error: Option<MissingClipError>,
}

impl CharacterAnimator {
    pub fn new(selector: AnimationSelector) -> Self {
        Self {
            selector,
            last_directive: None,
            error: None,
        }
    }

    pub fn from_config(config: &TradingFloorConfig) -> Self {
        Self::new(config.animation_selector())
    }

    /// Run the selector for a new locomotion state. On success the directive
    /// is stored and returned. On a missing clip the previous directive is
    /// kept and the error is stored instead.
    pub fn update(
        &mut self,
        state: &LocomotionState,
        library: &(impl ClipLibrary + ?Sized),
    ) -> Result<&AnimationDirective, MissingClipError> {
        match self.selector.select(state, library) {
            Ok(directive) => {
                self.error = None;
                Ok(&*self.last_directive.insert(directive))
            }
            Err(error) => {
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    pub fn selector(&self) -> &AnimationSelector {
        &self.selector
    }

    pub fn active_clip(&self) -> Option<&str> {
        self.selector.active_clip()
    }

    pub fn last_directive(&self) -> Option<&AnimationDirective> {
        self.last_directive.as_ref()
    }

    /// If the last update could not find its clip return the error, otherwise
    /// return `None`.
    pub fn get_error(&self) -> Option<&MissingClipError> {
        self.error.as_ref()
    }

    pub fn reset(&mut self) -> &mut Self {
        self.selector.reset();
        self.last_directive = None;
        self.error = None;
        self
    }
}
