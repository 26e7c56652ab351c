use std::f32::consts::FRAC_PI_2;

/// Timing and amplitude constants of the feeding loop.
///
/// All durations are seconds, frequencies radians per second, angles
/// radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedingParams {
    pub feed_duration: f32,
    pub chew_duration: f32,

    /// Horizontal distance the fork and slice cover during Feed.
    pub travel_distance: f32,
    /// Peak height of the arc the fork follows.
    pub bob_amplitude: f32,
    /// Roll of the slice about its forward axis at the end of Feed.
    pub slice_roll: f32,
    /// Largest sideways pupil shift while tracking the fork.
    pub max_look_offset: f32,
    /// Mouth grows to `1 + gain` while the fork approaches.
    pub mouth_open_gain: f32,

    pub chew_frequency: f32,
    pub mouth_chew_width: f32,
    pub mouth_chew_height: f32,
    pub mouth_chew_swing: f32,
    pub squint_depth: f32,
    pub tilt_frequency: f32,
    pub tilt_amplitude: f32,
}

impl FeedingParams {
    pub const DEFAULT: Self = Self {
        feed_duration: 2.0,
        chew_duration: 3.0,

        travel_distance: 2.8,
        bob_amplitude: 0.2,
        slice_roll: FRAC_PI_2,
        max_look_offset: 0.15,
        mouth_open_gain: 0.6,

        chew_frequency: 5.0,
        mouth_chew_width: 1.3,
        mouth_chew_height: 1.6,
        mouth_chew_swing: 0.3,
        squint_depth: 0.1,
        tilt_frequency: 3.0,
        tilt_amplitude: 0.05,
    };

    /// Length of one full loop (Feed + Chew).
    #[inline]
    #[must_use]
    pub fn loop_duration(&self) -> f32 {
        self.feed_duration + self.chew_duration
    }
}

impl Default for FeedingParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Segment of the loop selected by elapsed time.
///
/// The partition is half-open: `[0, feed)` is Feed, `[feed, feed + chew)`
/// is Chew and everything from `feed + chew` on is LoopReset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Linear progress in `[0, 1)`.
    Feed { progress: f32 },
    /// Seconds since Chew began.
    Chew { chew_elapsed: f32 },
    LoopReset,
}

impl Phase {
    /// Negative input is treated as zero. NaN falls through to LoopReset so
    /// a corrupt reading restarts the loop.
    #[must_use]
    pub fn at(elapsed: f32, params: &FeedingParams) -> Self {
        let elapsed = if elapsed < 0.0 { 0.0 } else { elapsed };

        if elapsed < params.feed_duration {
            Self::Feed {
                progress: elapsed / params.feed_duration,
            }
        } else if elapsed < params.loop_duration() {
            Self::Chew {
                chew_elapsed: elapsed - params.feed_duration,
            }
        } else {
            Self::LoopReset
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Feed { .. } => "feed",
            Self::Chew { .. } => "chew",
            Self::LoopReset => "loop-reset",
        }
    }
}

/// Cubic ease-out: fast start, decelerating into 1.
#[inline]
#[must_use]
pub fn ease_out_cubic(progress: f32) -> f32 {
    1.0 - (1.0 - progress).powi(3)
}
