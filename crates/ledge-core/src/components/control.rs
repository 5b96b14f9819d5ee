//! Control components: keyboard-driven for the player, patrol for enemies.

use crate::api::config::SimConfig;
use crate::api::types::{Direction, EntityState, Message};
use crate::components::behavior::{MessageReceiver, Outbox, Updatable};
use crate::components::entity::{EntityCore, Receivers};
use crate::core::world::FrameEvents;
use crate::input::state::{Button, InputState};

const ZERO_VELOCITY: i32 = 0;

/// Drives the player from the frame's input snapshot.
///
/// Each update handles the state the entity entered the frame with, then
/// runs the climbing handler if the entity is climbing by that point, so a
/// hanging-to-climbing transition applies climb velocities the same frame.
#[derive(Debug, Clone)]
pub struct UserControl {
    walk_speed: i32,
    jump_velocity: i32,
    climb_up_velocity: i32,
    climb_down_velocity: i32,
}

impl UserControl {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            walk_speed: config.walk_speed,
            jump_velocity: config.jump_velocity,
            climb_up_velocity: config.climb_up_velocity,
            climb_down_velocity: config.climb_down_velocity,
        }
    }

    pub fn update(
        &self,
        core: &mut EntityCore,
        input: &InputState,
        receivers: &mut Receivers,
        events: &mut FrameEvents,
    ) {
        match core.state {
            EntityState::Idle => self.handle_idle(core, input, receivers, events),
            EntityState::Walking => self.handle_walking(core, input, receivers, events),
            EntityState::Jumping => self.handle_jumping(core, input),
            EntityState::Hanging => self.handle_hanging(core, input, receivers, events),
            _ => {}
        }
        if core.state == EntityState::Climbing {
            self.handle_climbing(core, input);
        }
    }

    fn jump(&self, core: &mut EntityCore, receivers: &mut Receivers, events: &mut FrameEvents) {
        core.state = EntityState::Jumping;
        core.y_velocity = self.jump_velocity;
        receivers.deliver(core, Message::Jump, events);
    }

    fn handle_idle(
        &self,
        core: &mut EntityCore,
        input: &InputState,
        receivers: &mut Receivers,
        events: &mut FrameEvents,
    ) {
        core.x_velocity = ZERO_VELOCITY;
        if input.is_pressed(Button::Left) {
            core.state = EntityState::Walking;
            core.direction = Direction::Left;
            core.x_velocity = -self.walk_speed;
        }
        if input.is_pressed(Button::Right) {
            core.state = EntityState::Walking;
            core.direction = Direction::Right;
            core.x_velocity = self.walk_speed;
        }
        if input.is_pressed(Button::Jump) {
            self.jump(core, receivers, events);
        }
    }

    fn handle_walking(
        &self,
        core: &mut EntityCore,
        input: &InputState,
        receivers: &mut Receivers,
        events: &mut FrameEvents,
    ) {
        if input.is_pressed(Button::Left) {
            core.direction = Direction::Left;
            core.x_velocity = -self.walk_speed;
        }
        if input.is_pressed(Button::Right) {
            core.direction = Direction::Right;
            core.x_velocity = self.walk_speed;
        }
        if !(input.is_pressed(Button::Left) || input.is_pressed(Button::Right)) {
            core.state = EntityState::Idle;
            core.x_velocity = ZERO_VELOCITY;
        }
        if input.is_pressed(Button::Jump) {
            self.jump(core, receivers, events);
        }
    }

    fn handle_jumping(&self, core: &mut EntityCore, input: &InputState) {
        if input.is_pressed(Button::Left) {
            core.x_velocity = -self.walk_speed;
            core.direction = Direction::Left;
        }
        if input.is_pressed(Button::Right) {
            core.x_velocity = self.walk_speed;
            core.direction = Direction::Right;
        }
        if !(input.is_pressed(Button::Left) || input.is_pressed(Button::Right)) {
            core.x_velocity = ZERO_VELOCITY;
        }
    }

    fn handle_hanging(
        &self,
        core: &mut EntityCore,
        input: &InputState,
        receivers: &mut Receivers,
        events: &mut FrameEvents,
    ) {
        core.x_velocity = ZERO_VELOCITY;
        core.y_velocity = ZERO_VELOCITY;
        if input.is_pressed(Button::Up) || input.is_pressed(Button::Down) {
            core.state = EntityState::Climbing;
        }
        // facing flips away from the chain, towards the camera-side wall
        if input.is_pressed(Button::Left) {
            core.direction = Direction::Right;
        }
        if input.is_pressed(Button::Right) {
            core.direction = Direction::Left;
        }
        if input.is_pressed(Button::Jump) {
            self.jump(core, receivers, events);
        }
    }

    fn handle_climbing(&self, core: &mut EntityCore, input: &InputState) {
        if input.is_pressed(Button::Up) {
            core.y_velocity = self.climb_up_velocity;
        }
        if input.is_pressed(Button::Down) {
            core.y_velocity = self.climb_down_velocity;
        }
        if !(input.is_pressed(Button::Up) || input.is_pressed(Button::Down)) {
            core.state = EntityState::Hanging;
        }
    }
}

/// Walks an enemy back and forth between two bounds around its spawn point.
///
/// Direction authority lives here: wall contacts arrive as `AiTurn*`
/// messages from the collision resolver instead of the resolver flipping
/// the entity itself.
#[derive(Debug, Clone)]
pub struct PatrolControl {
    walk_speed: i32,
    left_bound: i32,
    right_bound: i32,
}

impl PatrolControl {
    pub fn new(spawn_x: i32, walk_speed: i32, patrol_radius: i32) -> Self {
        Self {
            walk_speed,
            left_bound: spawn_x - patrol_radius,
            right_bound: spawn_x + patrol_radius,
        }
    }
}

impl Updatable for PatrolControl {
    fn update(&mut self, core: &mut EntityCore, _dt: f32) {
        core.state = EntityState::Walking;
        match core.direction {
            Direction::Left => {
                if core.rect.x > self.left_bound {
                    core.x_velocity = -self.walk_speed;
                } else {
                    core.direction = Direction::Right;
                    core.x_velocity = self.walk_speed;
                }
            }
            Direction::Right => {
                if core.rect.x < self.right_bound {
                    core.x_velocity = self.walk_speed;
                } else {
                    core.direction = Direction::Left;
                    core.x_velocity = -self.walk_speed;
                }
            }
        }
    }
}

impl MessageReceiver for PatrolControl {
    fn receive(
        &mut self,
        core: &mut EntityCore,
        msg: Message,
        _out: &mut Outbox,
        _events: &mut FrameEvents,
    ) {
        match msg {
            Message::AiTurnRight => {
                core.direction = Direction::Right;
                core.x_velocity = -core.x_velocity;
            }
            Message::AiTurnLeft => {
                core.direction = Direction::Left;
                core.x_velocity = -core.x_velocity;
            }
            _ => {}
        }
    }
}
