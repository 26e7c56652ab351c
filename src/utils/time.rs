#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};

/// Timer for tracking frame timing and elapsed time.
///
/// The application ticks it once per redraw; the reading taken at that tick
/// is the "current time" handed to per-frame logic.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a timer whose first reading is `start`.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start_time: start,
            last_update: start,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Updates the timer (called by the app each frame).
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Updates the timer with an explicit clock reading.
    pub fn tick_at(&mut self, now: Instant) {
        self.delta = now.saturating_duration_since(self.last_update);
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.last_update = now;
        self.frame_count += 1;
    }

    /// The clock reading taken at the most recent tick.
    #[inline]
    #[must_use]
    pub fn now(&self) -> Instant {
        self.last_update
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}
