/// Tuning constants for the simulation, provided by the game at startup.
///
/// Velocities are in pixels per second; negative vertical values point up.
/// The defaults reproduce the reference game feel.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Per-entity gravity weight; velocity gained per nominal 1/60 s frame.
    pub gravity_weight: i32,
    /// Horizontal ground and air speed.
    pub walk_speed: i32,
    /// Launch velocity applied on a jump.
    pub jump_velocity: i32,
    /// Upward climb speed while on a chain.
    pub climb_up_velocity: i32,
    /// Downward climb speed while on a chain.
    pub climb_down_velocity: i32,
    /// Starting and maximum health.
    pub max_health: i32,
    /// Damage per enemy contact.
    pub enemy_contact_damage: i32,
    /// Damage per spike contact.
    pub spike_damage: i32,
    /// Window after a hit during which further damage is ignored.
    pub immunity_ms: f32,
    /// Animator updates per animation frame advance.
    pub frames_per_step: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // Weights below 60 let a grounded entity sink less than a pixel
            // per sub-step, which reads as "unsupported" to the falling
            // check and flickers the state. Keep >= 60.
            gravity_weight: 60,
            walk_speed: 180,
            jump_velocity: -750,
            climb_up_velocity: -120,
            climb_down_velocity: 180,
            max_health: 100,
            enemy_contact_damage: 20,
            spike_damage: 20,
            immunity_ms: 500.0,
            frames_per_step: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_the_right_way() {
        let cfg = SimConfig::default();
        assert!(cfg.jump_velocity < 0, "jumps go up");
        assert!(cfg.climb_up_velocity < 0 && cfg.climb_down_velocity > 0);
        assert!(cfg.gravity_weight > 0);
        assert!(cfg.max_health > 0);
    }
}
