use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::types::EntityState;
use crate::assets::AssetError;

/// Asset manifest describing every animation set and sound for a game.
/// Loaded from a JSON file at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named animation sets: set name → per-state sprite sequences.
    #[serde(default)]
    pub animations: HashMap<String, AnimationSetDescriptor>,
    /// Named audio assets.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes one animation set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSetDescriptor {
    /// Sprite id sequence per locomotion state, keyed by the state's
    /// manifest name (`IDLE`, `WALKING`, ...).
    pub states: HashMap<EntityState, Vec<u32>>,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric cue the simulation emits to trigger this sound. Background
    /// tracks the embedding loop streams on its own carry no cue.
    #[serde(default)]
    pub cue_id: Option<u32>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_sounds() {
        let json = r#"{
            "sounds": {
                "jump": { "path": "audio/jump.wav", "cue_id": 1 },
                "bg_music": { "path": "audio/music.ogg" }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.sounds.len(), 2);

        let jump = &manifest.sounds["jump"];
        assert_eq!(jump.path, "audio/jump.wav");
        assert_eq!(jump.cue_id, Some(1));

        let music = &manifest.sounds["bg_music"];
        assert_eq!(music.path, "audio/music.ogg");
        assert_eq!(music.cue_id, None);
    }

    #[test]
    fn parse_animation_sets() {
        let json = r#"{
            "animations": {
                "pink_guy": {
                    "states": {
                        "IDLE": [10],
                        "WALKING": [11, 12]
                    }
                }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        let set = &manifest.animations["pink_guy"];
        assert_eq!(set.states[&EntityState::Idle], vec![10]);
        assert_eq!(set.states[&EntityState::Walking], vec![11, 12]);
    }

    #[test]
    fn unknown_state_key_is_rejected() {
        let json = r#"{
            "animations": {
                "pink_guy": { "states": { "SWIMMING": [1] } }
            }
        }"#;
        assert!(AssetManifest::from_json(json).is_err());
    }

    #[test]
    fn empty_manifest_parses() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.animations.is_empty());
        assert!(manifest.sounds.is_empty());
    }
}
