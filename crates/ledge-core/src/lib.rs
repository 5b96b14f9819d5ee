pub mod api;
pub mod core;
pub mod components;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::SimConfig;
pub use api::types::{
    Direction, EntityId, EntityState, GameSignal, Message, SoundCue, SpriteId,
};
pub use components::animation::{AnimationSet, Animator};
pub use components::entity::{Entity, EntityCore, SpriteFrame};
pub use components::template::EnemyTemplate;
pub use core::geometry::Rect;
pub use core::map::{Map, TerrainTile};
pub use core::time::{Substeps, DISCRETE_TIMESTEP};
pub use core::world::{FrameEvents, World};
pub use input::state::{Button, InputState};
pub use assets::manifest::AssetManifest;
pub use assets::registry::AssetRegistry;
pub use assets::AssetError;
