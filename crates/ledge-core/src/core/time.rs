/// Nominal simulation step. Movement and gravity are integrated in slices
/// of this length regardless of how long the rendered frame took.
pub const DISCRETE_TIMESTEP: f32 = 1.0 / 60.0;

/// Cap to prevent spiral of death (max 10 sub-steps per frame).
pub const MAX_FULL_STEPS: u32 = 10;

/// A frame delta decomposed into whole fixed steps plus a fractional tail.
///
/// Integrators run the full steps at `DISCRETE_TIMESTEP` each and then the
/// remainder scaled proportionally, so one 1/30 s frame and two 1/60 s
/// frames simulate the same distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Substeps {
    /// Number of whole `DISCRETE_TIMESTEP` steps in the frame.
    pub full: u32,
    /// Leftover time shorter than one step, in seconds.
    pub remainder: f32,
}

impl Substeps {
    pub fn split(frame_dt: f32) -> Self {
        let full = (frame_dt / DISCRETE_TIMESTEP) as u32;
        if full > MAX_FULL_STEPS {
            // A capped frame drops its remainder too; the tail of a stall
            // is not worth simulating.
            return Self {
                full: MAX_FULL_STEPS,
                remainder: 0.0,
            };
        }
        Self {
            full,
            remainder: frame_dt % DISCRETE_TIMESTEP,
        }
    }
}
