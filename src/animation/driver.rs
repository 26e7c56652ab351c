use std::f32::consts::PI;

use glam::Vec3;

use super::clock::AnimationClock;
use super::phase::{FeedingParams, Phase, ease_out_cubic};
use super::pose::{FrameUpdate, Part, PartWrite, RestPose};
use crate::utils::time::Instant;

/// Per-frame driver of the feed-and-chew loop.
///
/// [`sample`](Self::sample) is a pure function of elapsed time: the same
/// input always yields the same [`FrameUpdate`]. [`tick`](Self::tick) adds
/// the one side effect, restarting the [`AnimationClock`] once a loop is
/// complete.
///
/// Phase selection depends only on when frames happen to land, so a slow
/// frame can skip part of a phase. That is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedingDriver {
    params: FeedingParams,
    rest: RestPose,
}

impl FeedingDriver {
    #[must_use]
    pub fn new(params: FeedingParams, rest: RestPose) -> Self {
        Self { params, rest }
    }

    #[inline]
    #[must_use]
    pub fn params(&self) -> &FeedingParams {
        &self.params
    }

    #[inline]
    #[must_use]
    pub fn rest(&self) -> &RestPose {
        &self.rest
    }

    /// Evaluates the frame at `now` against `clock`.
    ///
    /// In the LoopReset phase the clock is restarted at `now`, so the next
    /// call sees an elapsed time close to zero.
    pub fn tick(&self, now: Instant, clock: &mut AnimationClock) -> FrameUpdate {
        let elapsed = clock.elapsed_secs(now);
        let update = self.sample(elapsed);
        log::trace!("Feeding phase '{}' at {elapsed:.3}s", update.phase.name());

        if update.phase == Phase::LoopReset {
            clock.reset(now);
            log::debug!(
                "Feeding loop {} finished after {elapsed:.3}s, restarting",
                clock.completed_loops()
            );
        }

        update
    }

    /// Transform writes for a given elapsed time in seconds.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> FrameUpdate {
        let phase = Phase::at(elapsed, &self.params);
        let mut update = FrameUpdate::new(phase);

        match phase {
            Phase::Feed { progress } => self.feed(progress, &mut update),
            Phase::Chew { chew_elapsed } => self.chew(chew_elapsed, &mut update),
            Phase::LoopReset => {
                update.push(PartWrite::new(Part::Fork).with_visible(true));
                update.push(PartWrite::new(Part::Slice).with_visible(true));
            }
        }

        update
    }

    fn feed(&self, progress: f32, update: &mut FrameUpdate) {
        let p = &self.params;
        let eased = ease_out_cubic(progress);

        // fork and slice ride the same arc toward the mouth
        let start = self.rest.utensil_start;
        let utensil = Vec3::new(
            start.x + eased * p.travel_distance,
            start.y + (eased * PI).sin() * p.bob_amplitude,
            start.z,
        );

        update.push(
            PartWrite::new(Part::Fork)
                .with_position(utensil)
                .with_visible(true),
        );
        update.push(
            PartWrite::new(Part::Slice)
                .with_position(utensil)
                .with_rotation(Vec3::new(0.0, 0.0, eased * p.slice_roll))
                .with_visible(true),
        );

        // pupils glance toward the fork side (-x)
        let look = (eased * p.max_look_offset).min(p.max_look_offset);
        let look_offset = Vec3::new(-look, 0.0, 0.0);
        update.push(PartWrite::new(Part::LeftPupil).with_position(self.rest.left_pupil + look_offset));
        update.push(PartWrite::new(Part::RightPupil).with_position(self.rest.right_pupil + look_offset));

        let mouth = 1.0 + eased * p.mouth_open_gain;
        update.push(PartWrite::new(Part::Mouth).with_scale(Vec3::new(mouth, mouth, 1.0)));

        // undo whatever the previous Chew left behind
        update.push(PartWrite::new(Part::LeftEye).with_scale(Vec3::ONE));
        update.push(PartWrite::new(Part::RightEye).with_scale(Vec3::ONE));
        update.push(PartWrite::new(Part::Body).with_rotation(Vec3::ZERO));
    }

    fn chew(&self, chew_elapsed: f32, update: &mut FrameUpdate) {
        let p = &self.params;
        let wave = (chew_elapsed * p.chew_frequency).sin();
        let cycle = wave * 0.5 + 0.5;

        update.push(PartWrite::new(Part::Fork).with_visible(false));
        update.push(PartWrite::new(Part::Slice).with_visible(false));

        update.push(PartWrite::new(Part::Mouth).with_scale(Vec3::new(
            p.mouth_chew_width + cycle * p.mouth_chew_swing,
            p.mouth_chew_height - cycle * p.mouth_chew_swing,
            1.0,
        )));

        let squint = wave * p.squint_depth + (1.0 - p.squint_depth);
        let eye_scale = Vec3::new(1.0, squint, 1.0);
        update.push(PartWrite::new(Part::LeftEye).with_scale(eye_scale));
        update.push(PartWrite::new(Part::RightEye).with_scale(eye_scale));

        update.push(PartWrite::new(Part::LeftPupil).with_position(self.rest.left_pupil));
        update.push(PartWrite::new(Part::RightPupil).with_position(self.rest.right_pupil));

        let tilt = (chew_elapsed * p.tilt_frequency).sin() * p.tilt_amplitude;
        update.push(PartWrite::new(Part::Body).with_rotation(Vec3::new(0.0, 0.0, tilt)));
    }
}
