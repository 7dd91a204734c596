/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Periodic interval timer built on the same accumulator pattern.
///
/// The spawn interval and the 1 Hz countdown both advance inside the fixed
/// step instead of running as independent browser timers, so every firing
/// lands on a deterministic clock value. Ticks are reported, never queued:
/// a caller that drops a tick (e.g. while spawning is paused) loses it.
pub struct IntervalTimer {
    period: f32,
    elapsed: f32,
}

impl IntervalTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds. Returns how many whole periods elapsed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let ticks = (self.elapsed / self.period) as u32;
        self.elapsed -= ticks as f32 * self.period;
        ticks
    }

    /// The timer period in seconds.
    pub fn period(&self) -> f32 {
        self.period
    }
}
