use crate::api::types::Message;
use crate::components::behavior::{MessageReceiver, Outbox, Updatable};
use crate::components::entity::EntityCore;
use crate::core::world::FrameEvents;

/// Hit points plus the post-hit immunity window.
///
/// Damage arrives as messages. While the window is open they are dropped
/// without side effects; applying damage re-opens it, emits the damage
/// sound, and at zero health emits `Die`.
#[derive(Debug, Clone)]
pub struct Health {
    max: i32,
    enemy_contact_damage: i32,
    spike_damage: i32,
    immunity_ms: f32,
    immunity_left_ms: f32,
}

impl Health {
    pub fn new(max: i32, enemy_contact_damage: i32, spike_damage: i32, immunity_ms: f32) -> Self {
        Self {
            max,
            enemy_contact_damage,
            spike_damage,
            immunity_ms,
            immunity_left_ms: 0.0,
        }
    }

    pub fn is_immune(&self) -> bool {
        self.immunity_left_ms > 0.0
    }

    fn apply_damage(&mut self, core: &mut EntityCore, amount: i32, out: &mut Outbox) {
        core.health -= amount;
        self.immunity_left_ms = self.immunity_ms;
        out.emit(Message::PlayDamageSound);
        if core.health <= 0 {
            out.emit(Message::Die);
        }
    }
}

impl Updatable for Health {
    fn update(&mut self, _core: &mut EntityCore, dt: f32) {
        self.immunity_left_ms = (self.immunity_left_ms - dt * 1000.0).max(0.0);
    }
}

impl MessageReceiver for Health {
    fn receive(
        &mut self,
        core: &mut EntityCore,
        msg: Message,
        out: &mut Outbox,
        _events: &mut FrameEvents,
    ) {
        match msg {
            Message::TakeEnemyDamage => {
                if !self.is_immune() {
                    self.apply_damage(core, self.enemy_contact_damage, out);
                }
            }
            Message::TakeSpikeDamage => {
                if !self.is_immune() {
                    self.apply_damage(core, self.spike_damage, out);
                }
            }
            Message::GainHealth(amount) => {
                core.health = (core.health + amount).min(self.max);
            }
            _ => {}
        }
    }
}
