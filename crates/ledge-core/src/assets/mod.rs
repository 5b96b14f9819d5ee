pub mod manifest;
pub mod registry;

use thiserror::Error;

use crate::api::types::EntityState;

/// Errors surfaced while wiring asset-derived data into entities.
/// All of these mean broken game data, and all of them show up at
/// construction time rather than mid-frame.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("animation set `{set}` has no sequence for state {state:?}")]
    MissingAnimation { set: String, state: EntityState },
    #[error("animation set `{set}` has an empty sequence for state {state:?}")]
    EmptyAnimation { set: String, state: EntityState },
    #[error("unknown animation set `{0}`")]
    UnknownAnimationSet(String),
    #[error("malformed asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
