use std::collections::VecDeque;

use crate::api::types::Message;
use crate::components::entity::EntityCore;
use crate::core::world::FrameEvents;

/// Follow-up messages produced while handling an update or another message.
/// The dispatcher drains this before the triggering call returns, so
/// delivery stays synchronous end to end.
#[derive(Debug, Default)]
pub struct Outbox {
    queue: VecDeque<Message>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, msg: Message) {
        self.queue.push_back(msg);
    }

    pub fn pop(&mut self) -> Option<Message> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Per-frame behavior driven by the entity pipeline with no context beyond
/// the entity itself. Components needing input, terrain, or another entity
/// expose their own update methods instead of faking this signature.
pub trait Updatable {
    fn update(&mut self, core: &mut EntityCore, dt: f32);
}

/// Handler for symbolic messages. Implementations match the variants they
/// care about and drop the rest.
pub trait MessageReceiver {
    fn receive(
        &mut self,
        core: &mut EntityCore,
        msg: Message,
        out: &mut Outbox,
        events: &mut FrameEvents,
    );
}
