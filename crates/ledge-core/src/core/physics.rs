//! Fixed-timestep integrators: gravity and the rigid body resolver.
//!
//! Both decompose the frame dt into whole 1/60 s sub-steps plus a
//! fractional tail (see [`crate::core::time::Substeps`]). Gravity
//! accumulates all velocity first; the rigid body then moves and resolves
//! one axis at a time per sub-step.

use crate::api::types::{EntityState, Message};
use crate::components::behavior::Updatable;
use crate::components::entity::{EntityCore, Receivers};
use crate::core::geometry::{
    colliding_from_above, colliding_from_below, colliding_from_left, colliding_from_right,
};
use crate::core::map::Map;
use crate::core::time::{Substeps, DISCRETE_TIMESTEP};
use crate::core::world::FrameEvents;

// ---------------------------------------------------------------------------
// Gravity
// ---------------------------------------------------------------------------

/// Constant downward acceleration, suspended while the entity holds a
/// chain (Hanging/Climbing).
///
/// `weight` is the velocity gained per nominal 1/60 s frame, so a full
/// sub-step adds exactly `weight` and the tail adds the truncated
/// proportional share.
#[derive(Debug, Clone)]
pub struct Gravity {
    weight: i32,
}

impl Gravity {
    pub fn new(weight: i32) -> Self {
        Self { weight }
    }
}

impl Updatable for Gravity {
    fn update(&mut self, core: &mut EntityCore, dt: f32) {
        if core.state.is_on_chain() {
            return;
        }
        let steps = Substeps::split(dt);
        for _ in 0..steps.full {
            core.y_velocity += self.weight;
        }
        core.y_velocity += (self.weight as f32 * (steps.remainder / DISCRETE_TIMESTEP)) as i32;
    }
}

// ---------------------------------------------------------------------------
// Rigid body
// ---------------------------------------------------------------------------

/// Moves the entity by its velocity and resolves terrain contact.
///
/// Per full sub-step: move Y, run the vertical pass, move X, run the
/// horizontal pass. The tail then moves Y and runs the vertical pass only
/// when the truncated movement is non-zero (a zero-pixel pass would read a
/// resting entity as unsupported), moves X, always runs the horizontal
/// pass, and finally clamps against the map edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct RigidBody;

impl RigidBody {
    pub fn update(
        &self,
        core: &mut EntityCore,
        dt: f32,
        map: &Map,
        receivers: &mut Receivers,
        events: &mut FrameEvents,
    ) {
        let steps = Substeps::split(dt);
        for _ in 0..steps.full {
            if core.state == EntityState::Dead {
                return;
            }
            core.rect.y += (core.y_velocity as f32 * DISCRETE_TIMESTEP) as i32;
            self.vertical_pass(core, map, receivers, events);
            core.rect.x += (core.x_velocity as f32 * DISCRETE_TIMESTEP) as i32;
            self.horizontal_pass(core, map, receivers, events);
        }
        if core.state == EntityState::Dead {
            return;
        }
        let tail_dy = (core.y_velocity as f32 * steps.remainder) as i32;
        core.rect.y += tail_dy;
        if tail_dy != 0 {
            self.vertical_pass(core, map, receivers, events);
        }
        core.rect.x += (core.x_velocity as f32 * steps.remainder) as i32;
        self.horizontal_pass(core, map, receivers, events);
        clamp_to_map(core, map);
    }

    /// Resolve vertical penetration tile by tile, against the rect as
    /// corrected so far. Spikes hurt instead of landing or crushing; a
    /// non-spike tile that neither snap separates sits embedded in the
    /// entity's body and kills when its underside is above the midline.
    fn vertical_pass(
        &self,
        core: &mut EntityCore,
        map: &Map,
        receivers: &mut Receivers,
        events: &mut FrameEvents,
    ) {
        let mut supported = false;
        for tile in map.overlapping(core.rect) {
            if tile.is_spike {
                receivers.deliver(core, Message::TakeSpikeDamage, events);
                if colliding_from_below(core.rect, tile.rect) {
                    core.rect.set_top(tile.rect.bottom());
                    core.y_velocity = 0;
                }
                continue;
            }
            if colliding_from_below(core.rect, tile.rect) {
                core.rect.set_top(tile.rect.bottom());
                core.y_velocity = 0;
            } else if colliding_from_above(core.rect, tile.rect) {
                supported = true;
                if core.state == EntityState::Jumping {
                    core.state = EntityState::Idle;
                }
                core.rect.set_bottom(tile.rect.top());
                core.y_velocity = 0;
            } else if tile.rect.bottom() < core.rect.center_y() {
                receivers.deliver(core, Message::Die, events);
                return;
            }
        }
        if !supported
            && !matches!(
                core.state,
                EntityState::Hanging | EntityState::Climbing | EntityState::Dead
            )
        {
            core.state = EntityState::Jumping;
        }
    }

    /// Resolve horizontal penetration against non-spike tiles. The snap
    /// emits a turn message instead of flipping the entity itself; patrol
    /// components consume it, everyone else drops it.
    fn horizontal_pass(
        &self,
        core: &mut EntityCore,
        map: &Map,
        receivers: &mut Receivers,
        events: &mut FrameEvents,
    ) {
        for tile in map.overlapping(core.rect) {
            if tile.is_spike {
                continue;
            }
            if colliding_from_right(core.rect, tile.rect) {
                core.rect.set_left(tile.rect.right());
                receivers.deliver(core, Message::AiTurnRight, events);
            }
            if colliding_from_left(core.rect, tile.rect) {
                core.rect.set_right(tile.rect.left());
                receivers.deliver(core, Message::AiTurnLeft, events);
            }
        }
    }
}

fn clamp_to_map(core: &mut EntityCore, map: &Map) {
    if core.rect.top() < 0 {
        core.rect.set_top(0);
    }
    if core.rect.left() < 0 {
        core.rect.set_left(0);
    } else if core.rect.right() > map.width() {
        core.rect.set_right(map.width());
    }
}
