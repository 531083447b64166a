use bevy::{ecs::prelude::*, log::prelude::*, math::Vec3, transform::prelude::*};

use crate::{
    character_animator::CharacterAnimator,
    locomotion::{AnimationDirective, AvailableClips, LocomotionState},
    scene::Hoverable,
};

/// Sent whenever a character's animator produces a new directive
#[derive(Message, Debug, Clone, PartialEq)]
pub struct AnimationDirectiveMessage {
    pub entity: Entity,
    pub directive: AnimationDirective,
}

/// Re-run the locomotion selector for every character whose locomotion flags
/// or clip set changed since the last run, or whose animator was just added.
pub fn select_character_animations(
    mut characters: Query<
        (
            Entity,
            &LocomotionState,
            &AvailableClips,
            &mut CharacterAnimator,
        ),
        Or<(
            Changed<LocomotionState>,
            Changed<AvailableClips>,
            Added<CharacterAnimator>,
        )>,
    >,
    mut directives: MessageWriter<AnimationDirectiveMessage>,
) {
    for (entity, state, clips, mut animator) in &mut characters {
        match animator.update(state, clips) {
            Ok(directive) => {
                if let Some(transition) = &directive.transition {
                    debug!(
                        "{entity}: {:?} -> {} ({}s)",
                        transition.from, transition.to, transition.blend_duration_seconds
                    );
                }
                directives.write(AnimationDirectiveMessage {
                    entity,
                    directive: directive.clone(),
                });
            }
            Err(error) => warn!("{entity}: {error}"),
        }
    }
}

/// Snap hoverable objects to their target scale. Smoothing is left to the
/// renderer.
pub fn apply_hover_scale(mut hoverables: Query<(&Hoverable, &mut Transform), Changed<Hoverable>>) {
    for (hoverable, mut transform) in &mut hoverables {
        transform.scale = Vec3::splat(hoverable.target_scale());
    }
}
