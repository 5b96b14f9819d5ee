use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Immutable description of one enemy variety.
///
/// Enemies are stamped out of these at spawn time; the record itself is
/// plain data so level files can carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    /// Collision box size in pixels.
    pub hitbox: IVec2,
    /// Top-left shift between the collision box and the drawn sprite.
    pub blit_offset: IVec2,
    pub health: i32,
    pub walk_speed: i32,
    pub patrol_radius: i32,
    /// Animation set resolved through the registry at spawn time.
    pub animation_set: String,
}

impl EnemyTemplate {
    pub fn pink_guy() -> Self {
        Self {
            name: "pink_guy".into(),
            hitbox: IVec2::new(32, 32),
            blit_offset: IVec2::new(0, 0),
            health: 100,
            walk_speed: 90,
            patrol_radius: 50,
            animation_set: "pink_guy".into(),
        }
    }

    pub fn trash_monster() -> Self {
        Self {
            name: "trash_monster".into(),
            hitbox: IVec2::new(35, 32),
            blit_offset: IVec2::new(4, 0),
            health: 100,
            walk_speed: 90,
            patrol_radius: 50,
            animation_set: "trash_monster".into(),
        }
    }

    /// The tall one; its sprite frames extend well past the hitbox.
    pub fn tooth_walker() -> Self {
        Self {
            name: "tooth_walker".into(),
            hitbox: IVec2::new(30, 65),
            blit_offset: IVec2::new(40, 0),
            health: 100,
            walk_speed: 90,
            patrol_radius: 50,
            animation_set: "tooth_walker".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_keep_their_shapes() {
        assert_eq!(EnemyTemplate::pink_guy().hitbox, IVec2::new(32, 32));
        assert_eq!(EnemyTemplate::trash_monster().blit_offset, IVec2::new(4, 0));
        let tall = EnemyTemplate::tooth_walker();
        assert_eq!(tall.hitbox, IVec2::new(30, 65));
        assert_eq!(tall.blit_offset, IVec2::new(40, 0));
    }

    #[test]
    fn records_survive_a_level_file_round_trip() {
        let template = EnemyTemplate::trash_monster();
        let json = serde_json::to_string(&template).unwrap();
        let back: EnemyTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, template);
    }
}
