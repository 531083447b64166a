use bevy::reflect::Reflect;
use thiserror::Error;

use crate::locomotion::LocomotionClip;

/// The clip the selector resolved to is not in the character's clip library.
///
/// This is recoverable: the selector keeps its previous state and the caller
/// keeps playing whatever it was playing.
#[derive(Debug, Error, Reflect, Clone, PartialEq, Eq)]
#[error("Animation \"{clip_name}\" ({clip:?}) not found in clip library")]
pub struct MissingClipError {
    pub clip: LocomotionClip,
    pub clip_name: String,
}
