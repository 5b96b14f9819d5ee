use crate::api::types::{EntityState, Message};
use crate::components::entity::{Entity, EntityCore, Receivers};
use crate::core::geometry::overlaps;
use crate::core::world::FrameEvents;

/// Player-enemy contact rules, run from the enemy's pipeline.
///
/// A falling player whose feet are above the enemy's midline stomps it;
/// any other contact hurts the player. Both outcomes go through messaging,
/// so immunity and death handling stay where they live.
#[derive(Debug, Clone, Copy, Default)]
pub struct Combat;

impl Combat {
    pub fn update(
        &self,
        core: &mut EntityCore,
        receivers: &mut Receivers,
        player: &mut Entity,
        events: &mut FrameEvents,
    ) {
        if core.state == EntityState::Dead || player.core.state == EntityState::Dead {
            return;
        }
        if !overlaps(core.rect, player.core.rect) {
            return;
        }
        if stomped(&player.core, core) {
            receivers.deliver(core, Message::Die, events);
        } else {
            player.message(Message::TakeEnemyDamage, events);
        }
    }
}

fn stomped(player: &EntityCore, enemy: &EntityCore) -> bool {
    player.rect.bottom() < enemy.rect.center_y() && player.y_velocity > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rect;

    fn falling_player_at(y: i32) -> EntityCore {
        let mut core = EntityCore::new(Rect::new(100, y, 20, 30));
        core.y_velocity = 300;
        core
    }

    #[test]
    fn feet_above_midline_while_falling_is_a_stomp() {
        let enemy = EntityCore::new(Rect::new(100, 100, 32, 32)); // midline 116
        assert!(stomped(&falling_player_at(80), &enemy)); // feet at 110
        assert!(!stomped(&falling_player_at(90), &enemy)); // feet at 120
    }

    #[test]
    fn the_midline_itself_is_not_a_stomp() {
        let enemy = EntityCore::new(Rect::new(100, 100, 32, 32));
        assert!(!stomped(&falling_player_at(86), &enemy)); // feet exactly at 116
    }

    #[test]
    fn rising_players_never_stomp() {
        let enemy = EntityCore::new(Rect::new(100, 100, 32, 32));
        let mut player = falling_player_at(80);
        player.y_velocity = -200;
        assert!(!stomped(&player, &enemy));
        player.y_velocity = 0;
        assert!(!stomped(&player, &enemy));
    }
}
