use crate::api::types::{Message, SoundCue};
use crate::components::behavior::{MessageReceiver, Outbox};
use crate::components::entity::EntityCore;
use crate::core::world::FrameEvents;

/// Turns entity messages into sound cues for the embedding game.
/// A slot left empty (cue absent from the registry) stays silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoundEmitter {
    jump: Option<SoundCue>,
    hit: Option<SoundCue>,
}

impl SoundEmitter {
    pub fn new(jump: Option<SoundCue>, hit: Option<SoundCue>) -> Self {
        Self { jump, hit }
    }
}

impl MessageReceiver for SoundEmitter {
    fn receive(
        &mut self,
        _core: &mut EntityCore,
        msg: Message,
        _out: &mut Outbox,
        events: &mut FrameEvents,
    ) {
        let cue = match msg {
            Message::Jump => self.jump,
            Message::PlayDamageSound => self.hit,
            _ => None,
        };
        if let Some(cue) = cue {
            events.emit_sound(cue);
        }
    }
}
