use crate::api::types::{EntityState, GameSignal, Message};
use crate::components::behavior::{MessageReceiver, Outbox};
use crate::components::entity::EntityCore;
use crate::core::world::FrameEvents;

/// Final arbiter of the `Dead` transition.
///
/// The first `Die` wins; later ones are no-ops because `Dead` is terminal.
/// For the player the transition also raises the game-over signal.
#[derive(Debug, Clone, Copy)]
pub struct DeathWatch {
    signals_game_over: bool,
}

impl DeathWatch {
    pub fn new(signals_game_over: bool) -> Self {
        Self { signals_game_over }
    }
}

impl MessageReceiver for DeathWatch {
    fn receive(
        &mut self,
        core: &mut EntityCore,
        msg: Message,
        _out: &mut Outbox,
        events: &mut FrameEvents,
    ) {
        if msg != Message::Die || core.state == EntityState::Dead {
            return;
        }
        core.state = EntityState::Dead;
        if self.signals_game_over {
            log::info!("player died, signalling game over");
            events.emit_signal(GameSignal::GameOver);
        }
    }
}
