use std::collections::HashMap;

use crate::api::types::{EntityState, SoundCue, SpriteId};
use crate::assets::manifest::AssetManifest;
use crate::assets::AssetError;
use crate::components::animation::AnimationSet;

/// Runtime asset lookup, built once from an [`AssetManifest`].
///
/// Entities resolve their animation sets and sound cues through this at
/// spawn time; nothing reads the manifest after construction.
pub struct AssetRegistry {
    animations: HashMap<String, HashMap<EntityState, Vec<SpriteId>>>,
    sounds: HashMap<String, SoundCue>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            sounds: HashMap::new(),
        }
    }

    /// Build a registry from a parsed manifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut animations = HashMap::with_capacity(manifest.animations.len());
        for (name, desc) in &manifest.animations {
            let sequences = desc
                .states
                .iter()
                .map(|(&state, ids)| (state, ids.iter().copied().map(SpriteId).collect()))
                .collect();
            animations.insert(name.clone(), sequences);
        }
        let sounds: HashMap<String, SoundCue> = manifest
            .sounds
            .iter()
            .filter_map(|(name, desc)| desc.cue_id.map(|id| (name.clone(), SoundCue(id))))
            .collect();
        log::info!(
            "asset registry: {} animation sets, {} sound cues",
            animations.len(),
            sounds.len()
        );
        Self { animations, sounds }
    }

    /// Build the named animation set, validating that it covers every
    /// state in `required`.
    pub fn animation_set(
        &self,
        name: &str,
        required: &[EntityState],
    ) -> Result<AnimationSet, AssetError> {
        let sequences = self
            .animations
            .get(name)
            .ok_or_else(|| AssetError::UnknownAnimationSet(name.to_string()))?;
        AnimationSet::new(name, sequences.clone(), required)
    }

    /// Cue for a named sound, if the manifest assigned one.
    pub fn sound(&self, name: &str) -> Option<SoundCue> {
        self.sounds.get(name).copied()
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "animations": {
            "pink_guy": {
                "states": {
                    "IDLE": [10],
                    "WALKING": [11, 12],
                    "JUMPING": [11],
                    "DEAD": [13]
                }
            }
        },
        "sounds": {
            "jump": { "path": "audio/jump.wav", "cue_id": 1 },
            "bg_music": { "path": "audio/music.ogg" }
        }
    }"#;

    fn registry() -> AssetRegistry {
        AssetRegistry::from_manifest(&AssetManifest::from_json(MANIFEST).unwrap())
    }

    #[test]
    fn animation_sets_resolve_with_their_frames() {
        let set = registry()
            .animation_set("pink_guy", &[EntityState::Idle, EntityState::Walking])
            .unwrap();
        assert_eq!(set.name(), "pink_guy");
        assert_eq!(
            set.frames(EntityState::Walking),
            &[SpriteId(11), SpriteId(12)]
        );
    }

    #[test]
    fn unknown_set_is_an_error() {
        let err = registry().animation_set("slime", &[]).unwrap_err();
        assert!(matches!(err, AssetError::UnknownAnimationSet(name) if name == "slime"));
    }

    #[test]
    fn missing_required_state_is_an_error() {
        let err = registry()
            .animation_set("pink_guy", &[EntityState::Hanging])
            .unwrap_err();
        assert!(matches!(
            err,
            AssetError::MissingAnimation {
                state: EntityState::Hanging,
                ..
            }
        ));
    }

    #[test]
    fn sound_cues_resolve_by_name() {
        let registry = registry();
        assert_eq!(registry.sound("jump"), Some(SoundCue(1)));
        // bg_music has a path but no cue; the sim never triggers it
        assert_eq!(registry.sound("bg_music"), None);
        assert_eq!(registry.sound("nonexistent"), None);
    }
}
