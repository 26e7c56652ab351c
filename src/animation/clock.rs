use crate::utils::time::{Duration, Instant};

/// Start marker of the current animation loop.
///
/// Single writer: only [`FeedingDriver::tick`](super::FeedingDriver::tick)
/// resets it. Elapsed time never goes negative; a reading earlier than the
/// start counts as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClock {
    start: Instant,
    completed_loops: u64,
}

impl AnimationClock {
    #[must_use]
    pub fn started_at(start: Instant) -> Self {
        Self {
            start,
            completed_loops: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> Instant {
        self.start
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    #[inline]
    #[must_use]
    pub fn elapsed_secs(&self, now: Instant) -> f32 {
        self.elapsed(now).as_secs_f32()
    }

    /// Starts a new loop at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.start = now;
        self.completed_loops += 1;
    }

    /// Number of resets so far.
    #[inline]
    #[must_use]
    pub fn completed_loops(&self) -> u64 {
        self.completed_loops
    }
}
