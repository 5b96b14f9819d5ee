use serde::{Deserialize, Serialize};

/// Unique identifier for an entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Opaque frame handle into an animation sequence.
/// The renderer maps (animation set, state, sprite id) to actual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SpriteId(pub u32);

/// A sound cue emitted by the simulation.
/// The numeric value maps to an audio asset owned by the embedding game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SoundCue(pub u32);

/// Locomotion state of an entity. `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityState {
    Idle,
    Walking,
    Jumping,
    Dead,
    Hanging,
    Climbing,
}

impl EntityState {
    /// Hanging and climbing suspend gravity (the entity holds a chain).
    pub fn is_on_chain(self) -> bool {
        matches!(self, EntityState::Hanging | EntityState::Climbing)
    }
}

/// Horizontal facing of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Symbolic message delivered synchronously to an entity's receivers.
/// Unhandled variants are dropped; senders never wait on a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The entity left the ground under its own power.
    Jump,
    /// The entity must transition to `Dead`.
    Die,
    /// Contact damage from a live enemy.
    TakeEnemyDamage,
    /// Contact damage from a spike tile.
    TakeSpikeDamage,
    /// Damage was applied; the sound emitter turns this into a cue.
    PlayDamageSound,
    /// Restore the given amount of health, clamped to the maximum.
    GainHealth(i32),
    /// Pushed out of a wall on the left; patrol flips to walk right.
    AiTurnRight,
    /// Pushed out of a wall on the right; patrol flips to walk left.
    AiTurnLeft,
}

/// Out-of-band signal from the simulation to the embedding game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_states_suspend_gravity() {
        assert!(EntityState::Hanging.is_on_chain());
        assert!(EntityState::Climbing.is_on_chain());
        assert!(!EntityState::Jumping.is_on_chain());
        assert!(!EntityState::Dead.is_on_chain());
    }

    #[test]
    fn state_names_match_manifest_keys() {
        let key: EntityState = serde_json::from_str("\"WALKING\"").unwrap();
        assert_eq!(key, EntityState::Walking);
        assert_eq!(serde_json::to_string(&EntityState::Idle).unwrap(), "\"IDLE\"");
    }
}
