//! The world container and the per-frame event sink.

use glam::IVec2;

use crate::api::config::SimConfig;
use crate::api::types::{EntityId, EntityState, GameSignal, SoundCue};
use crate::assets::registry::AssetRegistry;
use crate::assets::AssetError;
use crate::components::entity::Entity;
use crate::components::template::EnemyTemplate;
use crate::core::map::Map;
use crate::input::state::InputState;

/// Per-frame sink of sound cues and game signals.
///
/// The world clears it at the start of every update; the embedding game
/// drains it afterwards. Nothing in the sink persists across frames.
#[derive(Debug, Default)]
pub struct FrameEvents {
    sounds: Vec<SoundCue>,
    signals: Vec<GameSignal>,
}

impl FrameEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }

    pub fn emit_signal(&mut self, signal: GameSignal) {
        self.signals.push(signal);
    }

    pub fn sounds(&self) -> &[SoundCue] {
        &self.sounds
    }

    pub fn signals(&self) -> &[GameSignal] {
        &self.signals
    }

    pub fn clear(&mut self) {
        self.sounds.clear();
        self.signals.clear();
    }
}

/// The live entity set for one level: the player plus every enemy.
///
/// The player is constructed with the world and never removed; enemies
/// spawn from templates and leave the set the frame they die.
#[derive(Debug)]
pub struct World {
    player: Entity,
    enemies: Vec<Entity>,
    config: SimConfig,
    next_id: u32,
}

impl World {
    pub fn new(
        spawn: IVec2,
        registry: &AssetRegistry,
        config: SimConfig,
    ) -> Result<Self, AssetError> {
        let player = Entity::player(EntityId(0), spawn, registry, &config)?;
        Ok(Self {
            player,
            enemies: Vec::new(),
            config,
            next_id: 1,
        })
    }

    pub fn spawn_enemy(
        &mut self,
        template: &EnemyTemplate,
        spawn: IVec2,
        registry: &AssetRegistry,
    ) -> Result<EntityId, AssetError> {
        let id = EntityId(self.next_id);
        let enemy = Entity::enemy(id, template, spawn, registry, &self.config)?;
        self.next_id += 1;
        self.enemies.push(enemy);
        Ok(id)
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    /// Advance the simulation one frame: the player first, then every
    /// enemy against the player, then sweep dead enemies out.
    pub fn update(&mut self, dt: f32, input: &InputState, map: &Map, events: &mut FrameEvents) {
        events.clear();
        self.player.update(dt, input, map, None, events);
        for enemy in &mut self.enemies {
            enemy.update(dt, input, map, Some(&mut self.player), events);
        }
        self.enemies.retain(|enemy| {
            if enemy.core.state == EntityState::Dead {
                log::debug!("removing dead enemy {:?}", enemy.id);
                false
            } else {
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::AssetManifest;
    use crate::core::geometry::Rect;
    use crate::input::state::Button;

    const STEP: f32 = 1.0 / 60.0;

    const FIXTURE: &str = r#"{
        "animations": {
            "player": {
                "states": {
                    "IDLE": [0],
                    "WALKING": [1],
                    "JUMPING": [2],
                    "HANGING": [3],
                    "CLIMBING": [4],
                    "DEAD": [5]
                }
            },
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
            "hit": { "path": "audio/hit.wav", "cue_id": 2 }
        }
    }"#;

    fn registry() -> AssetRegistry {
        AssetRegistry::from_manifest(&AssetManifest::from_json(FIXTURE).unwrap())
    }

    #[test]
    fn spawned_enemies_get_fresh_ids() {
        let registry = registry();
        let mut world = World::new(IVec2::new(50, 70), &registry, SimConfig::default()).unwrap();
        let template = EnemyTemplate::pink_guy();
        let a = world
            .spawn_enemy(&template, IVec2::new(100, 100), &registry)
            .unwrap();
        let b = world
            .spawn_enemy(&template, IVec2::new(200, 100), &registry)
            .unwrap();
        assert_eq!(world.player().id, EntityId(0));
        assert_eq!(a, EntityId(1));
        assert_eq!(b, EntityId(2));
        assert_eq!(world.enemies().len(), 2);
    }

    #[test]
    fn stomped_enemies_leave_the_same_frame() {
        let registry = registry();
        let mut world = World::new(IVec2::new(100, 74), &registry, SimConfig::default()).unwrap();
        world
            .spawn_enemy(&EnemyTemplate::pink_guy(), IVec2::new(100, 100), &registry)
            .unwrap();
        world.player_mut().core.state = EntityState::Jumping;
        world.player_mut().core.y_velocity = 300;
        let map = Map::new(400, 300);
        let mut events = FrameEvents::new();
        world.update(STEP, &InputState::new(), &map, &mut events);
        assert!(world.enemies().is_empty());
        assert_eq!(world.player().core.health, 100);
    }

    #[test]
    fn game_over_fires_exactly_once() {
        let registry = registry();
        let mut world = World::new(IVec2::new(50, 300), &registry, SimConfig::default()).unwrap();
        let map = Map::new(400, 300);
        let mut events = FrameEvents::new();
        world.update(STEP, &InputState::new(), &map, &mut events);
        assert_eq!(world.player().core.state, EntityState::Dead);
        assert_eq!(events.signals(), &[GameSignal::GameOver]);
        world.update(STEP, &InputState::new(), &map, &mut events);
        assert!(events.signals().is_empty());
        assert_eq!(world.player().core.state, EntityState::Dead);
    }

    #[test]
    fn each_update_clears_the_previous_sink() {
        let registry = registry();
        let mut world = World::new(IVec2::new(50, 70), &registry, SimConfig::default()).unwrap();
        let map = Map::new(400, 300).with_solid(Rect::new(0, 100, 200, 20));
        let mut events = FrameEvents::new();
        let jump = InputState::new().with_pressed(Button::Jump);
        world.update(STEP, &jump, &map, &mut events);
        assert_eq!(events.sounds(), &[SoundCue(1)]);
        world.update(STEP, &InputState::new(), &map, &mut events);
        assert!(events.sounds().is_empty());
    }

    #[test]
    fn surviving_enemies_keep_patrolling() {
        let registry = registry();
        let mut world = World::new(IVec2::new(10, 70), &registry, SimConfig::default()).unwrap();
        world
            .spawn_enemy(&EnemyTemplate::pink_guy(), IVec2::new(200, 68), &registry)
            .unwrap();
        let map = Map::new(400, 300).with_solid(Rect::new(0, 100, 400, 20));
        let mut events = FrameEvents::new();
        for _ in 0..30 {
            world.update(STEP, &InputState::new(), &map, &mut events);
        }
        assert_eq!(world.enemies().len(), 1);
        let enemy = &world.enemies()[0];
        // half a second of patrol at 90 px/s, started at the spawn point
        assert!(enemy.core.rect.x > 200, "patrolled to {}", enemy.core.rect.x);
        assert_eq!(enemy.core.state, EntityState::Walking);
    }
}
