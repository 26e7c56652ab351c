use super::time::Duration;

/// Frame rate sampler. Reports once per accumulated second.
pub struct FpsCounter {
    frame_count: u32,
    accumulated_time: Duration,
    pub current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            accumulated_time: Duration::ZERO,
            current_fps: 0.0,
        }
    }

    /// Records one frame that took `delta`.
    ///
    /// Returns the new FPS value when a full second has been accumulated.
    pub fn record(&mut self, delta: Duration) -> Option<f32> {
        self.frame_count += 1;
        self.accumulated_time += delta;

        if self.accumulated_time.as_secs_f32() >= 1.0 {
            self.current_fps = self.frame_count as f32 / self.accumulated_time.as_secs_f32();

            self.accumulated_time = Duration::ZERO;
            self.frame_count = 0;

            return Some(self.current_fps);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_after_one_second() {
        let mut fps = FpsCounter::new();
        for _ in 0..59 {
            assert!(fps.record(Duration::from_millis(16)).is_none());
        }
        let reported = fps.record(Duration::from_millis(60)).expect("one second elapsed");
        assert!((reported - 60.0).abs() < 0.5, "got {reported}");
    }
}
