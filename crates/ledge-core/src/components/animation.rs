//! State-keyed animation selection.
//!
//! Entities cycle through ordered sprite sequences chosen by locomotion
//! state. The core never touches pixel data; frames are opaque ids the
//! renderer resolves.

use std::collections::HashMap;

use crate::api::types::{EntityState, SpriteId};
use crate::assets::AssetError;
use crate::components::behavior::Updatable;
use crate::components::entity::EntityCore;

/// Ordered sprite sequences keyed by locomotion state.
///
/// Validated against the states an entity can actually reach, so the
/// animator never has to handle a missing sequence mid-frame.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    name: String,
    sequences: HashMap<EntityState, Vec<SpriteId>>,
}

impl AnimationSet {
    /// Build a set, requiring a non-empty sequence for every state in
    /// `required`. Sequences for extra states are allowed and kept.
    pub fn new(
        name: &str,
        sequences: HashMap<EntityState, Vec<SpriteId>>,
        required: &[EntityState],
    ) -> Result<Self, AssetError> {
        for &state in required {
            match sequences.get(&state) {
                None => {
                    return Err(AssetError::MissingAnimation {
                        set: name.to_string(),
                        state,
                    })
                }
                Some(seq) if seq.is_empty() => {
                    return Err(AssetError::EmptyAnimation {
                        set: name.to_string(),
                        state,
                    })
                }
                Some(_) => {}
            }
        }
        Ok(Self {
            name: name.to_string(),
            sequences,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self, state: EntityState) -> &[SpriteId] {
        self.sequences.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Cycles through the sequence for the entity's current state.
///
/// The counter advances once per rendered frame; every `frames_per_step`
/// advances move to the next sprite. A state change switches sequences and
/// resets the counter, which also advances the index once on the switch
/// frame (sequences are authored with that in mind).
#[derive(Debug, Clone)]
pub struct Animator {
    set: AnimationSet,
    current_state: EntityState,
    current_index: usize,
    frame_counter: u32,
    frames_per_step: u32,
}

impl Animator {
    pub fn new(set: AnimationSet, initial_state: EntityState, frames_per_step: u32) -> Self {
        Self {
            set,
            current_state: initial_state,
            current_index: 0,
            frame_counter: 0,
            // zero would stall the counter modulo
            frames_per_step: frames_per_step.max(1),
        }
    }

    pub fn advance(&mut self, core: &EntityCore) {
        if core.state != self.current_state {
            self.current_state = core.state;
            self.frame_counter = 0;
            self.current_index = 0;
        } else {
            self.frame_counter = (self.frame_counter + 1) % self.frames_per_step;
        }
        if self.frame_counter == 0 {
            let len = self.set.frames(self.current_state).len();
            if len > 0 {
                self.current_index = (self.current_index + 1) % len;
            }
        }
    }

    /// The sprite to draw this frame.
    pub fn sprite(&self) -> SpriteId {
        self.set
            .frames(self.current_state)
            .get(self.current_index)
            .copied()
            .unwrap_or(SpriteId(0))
    }

    pub fn set_name(&self) -> &str {
        self.set.name()
    }
}

impl Updatable for Animator {
    fn update(&mut self, core: &mut EntityCore, _dt: f32) {
        self.advance(core);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rect;

    fn seq(ids: &[u32]) -> Vec<SpriteId> {
        ids.iter().copied().map(SpriteId).collect()
    }

    fn two_state_set() -> AnimationSet {
        let sequences = HashMap::from([
            (EntityState::Idle, seq(&[0, 1])),
            (EntityState::Walking, seq(&[10, 11, 12])),
        ]);
        AnimationSet::new("test", sequences, &[EntityState::Idle, EntityState::Walking]).unwrap()
    }

    fn core_in(state: EntityState) -> EntityCore {
        let mut core = EntityCore::new(Rect::new(0, 0, 20, 30));
        core.state = state;
        core
    }

    #[test]
    fn missing_required_state_fails_construction() {
        let sequences = HashMap::from([(EntityState::Idle, seq(&[0]))]);
        let err = AnimationSet::new("broken", sequences, &[EntityState::Idle, EntityState::Dead])
            .unwrap_err();
        assert!(matches!(
            err,
            AssetError::MissingAnimation { state: EntityState::Dead, .. }
        ));
    }

    #[test]
    fn empty_sequence_fails_construction() {
        let sequences = HashMap::from([(EntityState::Idle, Vec::new())]);
        let err = AnimationSet::new("broken", sequences, &[EntityState::Idle]).unwrap_err();
        assert!(matches!(err, AssetError::EmptyAnimation { .. }));
    }

    #[test]
    fn index_advances_every_frames_per_step_updates() {
        let mut anim = Animator::new(two_state_set(), EntityState::Idle, 5);
        let core = core_in(EntityState::Idle);
        assert_eq!(anim.sprite(), SpriteId(0));
        // counter runs 1,2,3,4,0; the index moves on the fifth advance
        for _ in 0..4 {
            anim.advance(&core);
            assert_eq!(anim.sprite(), SpriteId(0));
        }
        anim.advance(&core);
        assert_eq!(anim.sprite(), SpriteId(1));
    }

    #[test]
    fn state_switch_resets_and_shows_the_second_frame() {
        let mut anim = Animator::new(two_state_set(), EntityState::Idle, 5);
        let idle = core_in(EntityState::Idle);
        for _ in 0..7 {
            anim.advance(&idle);
        }
        let walking = core_in(EntityState::Walking);
        anim.advance(&walking);
        // reset lands the counter on zero, which advances past frame 0
        assert_eq!(anim.sprite(), SpriteId(11));
        for _ in 0..5 {
            anim.advance(&walking);
        }
        assert_eq!(anim.sprite(), SpriteId(12));
    }

    #[test]
    fn single_frame_sequence_stays_put() {
        let sequences = HashMap::from([(EntityState::Idle, seq(&[7]))]);
        let set = AnimationSet::new("coin", sequences, &[EntityState::Idle]).unwrap();
        let mut anim = Animator::new(set, EntityState::Idle, 5);
        let core = core_in(EntityState::Idle);
        for _ in 0..12 {
            anim.advance(&core);
            assert_eq!(anim.sprite(), SpriteId(7));
        }
    }
}
