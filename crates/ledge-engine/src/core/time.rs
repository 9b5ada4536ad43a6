/// Default cap on fixed steps per frame.
pub const DEFAULT_MAX_STEPS: u32 = 5;

/// Fixed timestep accumulator.
/// States always see the same `dt`, whatever the host's frame pacing.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    ///
    /// Negative or non-finite frame times are ignored. Time beyond
    /// `max_steps` worth is discarded so a stalled tab does not replay seconds
    /// of gameplay in one frame.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Drop any partial step. The runner calls this after a state change so
    /// the new stack starts on a step boundary.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}
