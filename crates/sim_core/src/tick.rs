//! Fixed-tick timing for the headless simulation loop.

/// Counts fixed simulation steps at a constant rate.
///
/// The simulation is tick-driven and run-to-completion; wall-clock pacing is
/// the host's concern, so this clock only tracks logical time.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    fixed_dt: f32,
    tick: u64,
}

impl TickClock {
    /// Create a clock stepping at the given rate in Hz.
    pub fn from_hz(hz: f32) -> Self {
        Self {
            fixed_dt: 1.0 / hz,
            tick: 0,
        }
    }

    /// Advance by one step and return the step's delta time in seconds.
    pub fn advance(&mut self) -> f32 {
        self.tick += 1;
        self.fixed_dt
    }

    /// Fixed delta time in seconds.
    pub fn dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Logical elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.tick as f32 * self.fixed_dt
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::from_hz(60.0)
    }
}
