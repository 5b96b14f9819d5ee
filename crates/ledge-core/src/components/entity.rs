//! The entity aggregate: one fat struct with optional component slots,
//! driven by a fixed per-frame pipeline. No inheritance, no ECS; slots an
//! entity lacks are skipped.

use glam::IVec2;

use crate::api::config::SimConfig;
use crate::api::types::{Direction, EntityId, EntityState, Message, SpriteId};
use crate::assets::registry::AssetRegistry;
use crate::assets::AssetError;
use crate::components::animation::Animator;
use crate::components::behavior::{MessageReceiver, Outbox, Updatable};
use crate::components::combat::Combat;
use crate::components::control::{PatrolControl, UserControl};
use crate::components::death::DeathWatch;
use crate::components::health::Health;
use crate::components::sound::SoundEmitter;
use crate::components::template::EnemyTemplate;
use crate::core::geometry::Rect;
use crate::core::map::Map;
use crate::core::physics::{Gravity, RigidBody};
use crate::core::world::FrameEvents;
use crate::input::state::InputState;

/// Player hitbox in pixels; the drawn sprite is larger.
const PLAYER_HITBOX: IVec2 = IVec2::new(20, 30);
const PLAYER_BLIT_OFFSET: IVec2 = IVec2::new(15, 3);

/// States the player can reach; its animation set must cover every one.
pub const PLAYER_STATES: [EntityState; 6] = [
    EntityState::Idle,
    EntityState::Walking,
    EntityState::Jumping,
    EntityState::Hanging,
    EntityState::Climbing,
    EntityState::Dead,
];

/// States a patrol-driven enemy can reach. Enemies never touch chains.
pub const ENEMY_STATES: [EntityState; 4] = [
    EntityState::Idle,
    EntityState::Walking,
    EntityState::Jumping,
    EntityState::Dead,
];

// ---------------------------------------------------------------------------
// Core state
// ---------------------------------------------------------------------------

/// The mutable physical state every component works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCore {
    pub rect: Rect,
    /// Horizontal velocity in pixels per second.
    pub x_velocity: i32,
    /// Vertical velocity in pixels per second; negative points up.
    pub y_velocity: i32,
    pub direction: Direction,
    pub state: EntityState,
    pub health: i32,
}

impl EntityCore {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            x_velocity: 0,
            y_velocity: 0,
            direction: Direction::Right,
            state: EntityState::Idle,
            health: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Message dispatch
// ---------------------------------------------------------------------------

/// The entity's message receivers, in delivery order.
///
/// `deliver` drains a FIFO outbox, so anything a receiver emits while
/// handling one message reaches every receiver before the call returns.
/// Health runs before sound and death so a lethal hit plays its damage
/// cue before the `Die` it queued lands.
#[derive(Debug, Default)]
pub struct Receivers {
    pub patrol: Option<PatrolControl>,
    pub health: Option<Health>,
    pub sound: Option<SoundEmitter>,
    pub death: Option<DeathWatch>,
}

impl Receivers {
    pub fn deliver(&mut self, core: &mut EntityCore, msg: Message, events: &mut FrameEvents) {
        let mut out = Outbox::new();
        out.emit(msg);
        while let Some(msg) = out.pop() {
            if let Some(patrol) = self.patrol.as_mut() {
                patrol.receive(core, msg, &mut out, events);
            }
            if let Some(health) = self.health.as_mut() {
                health.receive(core, msg, &mut out, events);
            }
            if let Some(sound) = self.sound.as_mut() {
                sound.receive(core, msg, &mut out, events);
            }
            if let Some(death) = self.death.as_mut() {
                death.receive(core, msg, &mut out, events);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PipelineStage {
    Control,
    Gravity,
    RigidBody,
    Damage,
    Animation,
    DeathCheck,
}

/// Frame order for every entity: intent first, then motion and contact
/// resolution, then the consequences.
const ENTITY_PIPELINE: [PipelineStage; 6] = [
    PipelineStage::Control,
    PipelineStage::Gravity,
    PipelineStage::RigidBody,
    PipelineStage::Damage,
    PipelineStage::Animation,
    PipelineStage::DeathCheck,
];

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// What to draw for an entity this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    pub sprite: SpriteId,
    /// Mirror horizontally; frames are authored facing right.
    pub flip_x: bool,
    /// Top-left shift from the hitbox to the sprite.
    pub blit_offset: IVec2,
}

/// One simulated creature: physical core plus component slots.
#[derive(Debug)]
pub struct Entity {
    pub id: EntityId,
    pub core: EntityCore,
    user_control: Option<UserControl>,
    gravity: Gravity,
    rigid_body: RigidBody,
    combat: Option<Combat>,
    animator: Animator,
    receivers: Receivers,
    blit_offset: IVec2,
}

impl Entity {
    /// Build the player at `spawn` with the full keyboard-driven kit.
    pub fn player(
        id: EntityId,
        spawn: IVec2,
        registry: &AssetRegistry,
        config: &SimConfig,
    ) -> Result<Self, AssetError> {
        let set = registry.animation_set("player", &PLAYER_STATES)?;
        log::info!("spawning player {:?} at {}", id, spawn);
        let mut core = EntityCore::new(Rect::at(spawn, PLAYER_HITBOX));
        core.health = config.max_health;
        Ok(Self {
            id,
            core,
            user_control: Some(UserControl::new(config)),
            gravity: Gravity::new(config.gravity_weight),
            rigid_body: RigidBody,
            combat: None,
            animator: Animator::new(set, EntityState::Idle, config.frames_per_step),
            receivers: Receivers {
                patrol: None,
                health: Some(Health::new(
                    config.max_health,
                    config.enemy_contact_damage,
                    config.spike_damage,
                    config.immunity_ms,
                )),
                sound: Some(SoundEmitter::new(
                    registry.sound("jump"),
                    registry.sound("hit"),
                )),
                death: Some(DeathWatch::new(true)),
            },
            blit_offset: PLAYER_BLIT_OFFSET,
        })
    }

    /// Stamp an enemy out of `template` at `spawn`.
    pub fn enemy(
        id: EntityId,
        template: &EnemyTemplate,
        spawn: IVec2,
        registry: &AssetRegistry,
        config: &SimConfig,
    ) -> Result<Self, AssetError> {
        let set = registry.animation_set(&template.animation_set, &ENEMY_STATES)?;
        log::info!("spawning {} {:?} at {}", template.name, id, spawn);
        let mut core = EntityCore::new(Rect::at(spawn, template.hitbox));
        core.health = template.health;
        Ok(Self {
            id,
            core,
            user_control: None,
            gravity: Gravity::new(config.gravity_weight),
            rigid_body: RigidBody,
            combat: Some(Combat),
            animator: Animator::new(set, EntityState::Idle, config.frames_per_step),
            receivers: Receivers {
                patrol: Some(PatrolControl::new(
                    spawn.x,
                    template.walk_speed,
                    template.patrol_radius,
                )),
                health: Some(Health::new(
                    template.health,
                    config.enemy_contact_damage,
                    config.spike_damage,
                    config.immunity_ms,
                )),
                sound: Some(SoundEmitter::new(None, registry.sound("hit"))),
                death: Some(DeathWatch::new(false)),
            },
            blit_offset: template.blit_offset,
        })
    }

    /// Run one frame of the fixed pipeline. Dead entities are a no-op.
    ///
    /// `player` carries the stomp/contact counterpart for enemies and is
    /// `None` when updating the player itself.
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputState,
        map: &Map,
        mut player: Option<&mut Entity>,
        events: &mut FrameEvents,
    ) {
        if self.core.state == EntityState::Dead {
            return;
        }
        for stage in ENTITY_PIPELINE {
            match stage {
                PipelineStage::Control => {
                    if let Some(user) = &self.user_control {
                        user.update(&mut self.core, input, &mut self.receivers, events);
                    }
                    if let Some(patrol) = self.receivers.patrol.as_mut() {
                        patrol.update(&mut self.core, dt);
                    }
                }
                PipelineStage::Gravity => self.gravity.update(&mut self.core, dt),
                PipelineStage::RigidBody => {
                    self.rigid_body
                        .update(&mut self.core, dt, map, &mut self.receivers, events);
                }
                PipelineStage::Damage => {
                    if let Some(health) = self.receivers.health.as_mut() {
                        health.update(&mut self.core, dt);
                    }
                    if let (Some(combat), Some(player)) =
                        (self.combat.as_ref(), player.as_deref_mut())
                    {
                        combat.update(&mut self.core, &mut self.receivers, player, events);
                    }
                }
                PipelineStage::Animation => self.animator.update(&mut self.core, dt),
                PipelineStage::DeathCheck => {
                    if self.core.state != EntityState::Dead
                        && (self.core.health <= 0 || self.core.rect.top() > map.height())
                    {
                        self.receivers.deliver(&mut self.core, Message::Die, events);
                    }
                }
            }
        }
    }

    /// Deliver one message, and any cascade it triggers, before returning.
    pub fn message(&mut self, msg: Message, events: &mut FrameEvents) {
        self.receivers.deliver(&mut self.core, msg, events);
    }

    /// State override for the embedding game (chain grabs and the like).
    /// Dead stays dead.
    pub fn set_state(&mut self, state: EntityState) {
        if self.core.state != EntityState::Dead {
            self.core.state = state;
        }
    }

    pub fn sprite_frame(&self) -> SpriteFrame {
        SpriteFrame {
            sprite: self.animator.sprite(),
            flip_x: self.core.direction == Direction::Left,
            blit_offset: self.blit_offset,
        }
    }

    pub fn animation_set_name(&self) -> &str {
        self.animator.set_name()
    }
}
