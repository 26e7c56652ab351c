//! Feeding driver tests
//!
//! Tests for:
//! - Phase selection and half-open boundaries
//! - Feed-phase poses (utensil arc, slice roll, pupil look, mouth growth)
//! - Chew-phase poses (hidden utensil, mouth cycle, squint, head tilt)
//! - Loop reset through `tick` and the animation clock
//! - Idempotence of `sample`

use std::f32::consts::{FRAC_PI_2, PI};
use std::time::{Duration, Instant};

use chomp::animation::{
    AnimationClock, FeedingDriver, FeedingParams, FrameUpdate, Part, Phase, RestPose,
    ease_out_cubic,
};
use glam::Vec3;

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn position(update: &FrameUpdate, part: Part) -> Vec3 {
    update
        .get(part)
        .and_then(|w| w.position)
        .unwrap_or_else(|| panic!("{part:?} has no position write"))
}

fn rotation(update: &FrameUpdate, part: Part) -> Vec3 {
    update
        .get(part)
        .and_then(|w| w.rotation)
        .unwrap_or_else(|| panic!("{part:?} has no rotation write"))
}

fn scale(update: &FrameUpdate, part: Part) -> Vec3 {
    update
        .get(part)
        .and_then(|w| w.scale)
        .unwrap_or_else(|| panic!("{part:?} has no scale write"))
}

// ============================================================================
// Feed
// ============================================================================

#[test]
fn elapsed_zero_is_rest_pose() {
    let driver = FeedingDriver::default();
    let rest = RestPose::DEFAULT;
    let update = driver.sample(0.0);

    assert_eq!(update.phase, Phase::Feed { progress: 0.0 });

    assert!(vec3_approx(position(&update, Part::Fork), rest.utensil_start));
    assert!(vec3_approx(position(&update, Part::Slice), rest.utensil_start));
    assert!(vec3_approx(rotation(&update, Part::Slice), Vec3::ZERO));

    assert!(vec3_approx(position(&update, Part::LeftPupil), rest.left_pupil));
    assert!(vec3_approx(position(&update, Part::RightPupil), rest.right_pupil));

    assert!(vec3_approx(scale(&update, Part::Mouth), Vec3::ONE));
    assert!(vec3_approx(scale(&update, Part::LeftEye), Vec3::ONE));
    assert!(vec3_approx(rotation(&update, Part::Body), Vec3::ZERO));

    assert_eq!(update.visibility(Part::Fork), Some(true));
    assert_eq!(update.visibility(Part::Slice), Some(true));
}

#[test]
fn elapsed_one_second_is_eased_seven_eighths() {
    let driver = FeedingDriver::default();
    let rest = RestPose::DEFAULT;
    let update = driver.sample(1.0);

    let Phase::Feed { progress } = update.phase else {
        panic!("expected Feed, got {:?}", update.phase);
    };
    assert!(approx_eq(progress, 0.5));
    let eased = ease_out_cubic(progress);
    assert!(approx_eq(eased, 0.875));

    let fork = position(&update, Part::Fork);
    assert!(approx_eq(fork.x, rest.utensil_start.x + 0.875 * 2.8));
    assert!(approx_eq(fork.y, rest.utensil_start.y + (0.875 * PI).sin() * 0.2));
    assert!(approx_eq(fork.z, rest.utensil_start.z));

    // slice follows the fork exactly
    assert!(vec3_approx(position(&update, Part::Slice), fork));
    assert!(approx_eq(rotation(&update, Part::Slice).z, 0.875 * FRAC_PI_2));

    let mouth = scale(&update, Part::Mouth);
    assert!(vec3_approx(mouth, Vec3::new(1.525, 1.525, 1.0)));

    let look = 0.875 * 0.15;
    assert!(approx_eq(position(&update, Part::LeftPupil).x, rest.left_pupil.x - look));
    assert!(approx_eq(position(&update, Part::RightPupil).x, rest.right_pupil.x - look));
}

#[test]
fn end_of_feed_reaches_full_roll_and_look() {
    let driver = FeedingDriver::default();
    let update = driver.sample(1.999);

    assert!(matches!(update.phase, Phase::Feed { .. }));
    assert!((rotation(&update, Part::Slice).z - FRAC_PI_2).abs() < 1e-3);

    let fork = position(&update, Part::Fork);
    assert!((fork.x - (-3.0 + 2.8)).abs() < 1e-3);

    // look offset never exceeds its cap
    let rest = RestPose::DEFAULT;
    let shift = rest.left_pupil.x - position(&update, Part::LeftPupil).x;
    assert!(shift <= 0.15 + 1e-6);
}

#[test]
fn feed_utensil_arc_stays_within_bob_amplitude() {
    let driver = FeedingDriver::default();
    let start = RestPose::DEFAULT.utensil_start;
    let mut t = 0.0;
    while t < 2.0 {
        let fork = position(&driver.sample(t), Part::Fork);
        assert!(fork.y >= start.y - EPSILON);
        assert!(fork.y <= start.y + 0.2 + EPSILON);
        t += 0.05;
    }
}

// ============================================================================
// Chew
// ============================================================================

#[test]
fn chew_starts_exactly_at_two_seconds() {
    let driver = FeedingDriver::default();
    let update = driver.sample(2.0);

    assert_eq!(update.phase, Phase::Chew { chew_elapsed: 0.0 });
    assert_eq!(update.visibility(Part::Fork), Some(false));
    assert_eq!(update.visibility(Part::Slice), Some(false));

    // sin(0) = 0 → cycle = 0.5
    assert!(vec3_approx(scale(&update, Part::Mouth), Vec3::new(1.45, 1.45, 1.0)));
    assert!(approx_eq(scale(&update, Part::LeftEye).y, 0.9));
    assert!(approx_eq(rotation(&update, Part::Body).z, 0.0));
}

#[test]
fn chew_at_three_and_a_half_seconds() {
    let driver = FeedingDriver::default();
    let rest = RestPose::DEFAULT;
    let update = driver.sample(3.5);

    let Phase::Chew { chew_elapsed } = update.phase else {
        panic!("expected Chew, got {:?}", update.phase);
    };
    assert!(approx_eq(chew_elapsed, 1.5));

    let cycle = 7.5_f32.sin() * 0.5 + 0.5;
    let mouth = scale(&update, Part::Mouth);
    assert!(approx_eq(mouth.x, 1.3 + 0.3 * cycle));
    assert!(approx_eq(mouth.y, 1.6 - 0.3 * cycle));
    assert!(approx_eq(mouth.z, 1.0));

    let squint = 7.5_f32.sin() * 0.1 + 0.9;
    assert!(vec3_approx(scale(&update, Part::LeftEye), Vec3::new(1.0, squint, 1.0)));
    assert!(vec3_approx(scale(&update, Part::RightEye), Vec3::new(1.0, squint, 1.0)));

    assert!(vec3_approx(position(&update, Part::LeftPupil), rest.left_pupil));
    assert!(vec3_approx(position(&update, Part::RightPupil), rest.right_pupil));

    assert!(approx_eq(rotation(&update, Part::Body).z, 4.5_f32.sin() * 0.05));

    assert_eq!(update.visibility(Part::Fork), Some(false));
    assert_eq!(update.visibility(Part::Slice), Some(false));
}

#[test]
fn chew_mouth_width_and_height_move_in_opposition() {
    let driver = FeedingDriver::default();
    let a = scale(&driver.sample(2.1), Part::Mouth);
    let b = scale(&driver.sample(2.3), Part::Mouth);

    // width + height is constant across the cycle
    assert!(approx_eq(a.x + a.y, 2.9));
    assert!(approx_eq(b.x + b.y, 2.9));
    assert!((a.x - b.x) * (a.y - b.y) <= 0.0);
}

#[test]
fn chew_squint_and_tilt_stay_bounded() {
    let driver = FeedingDriver::default();
    let mut t = 2.0;
    while t < 5.0 {
        let update = driver.sample(t);
        let squint = scale(&update, Part::LeftEye).y;
        assert!((0.8 - EPSILON..=1.0 + EPSILON).contains(&squint));
        assert!(rotation(&update, Part::Body).z.abs() <= 0.05 + EPSILON);
        t += 0.037;
    }
}

// ============================================================================
// Loop reset
// ============================================================================

#[test]
fn loop_reset_restores_visibility() {
    let driver = FeedingDriver::default();

    for elapsed in [5.0, 5.01, 9.0] {
        let update = driver.sample(elapsed);
        assert_eq!(update.phase, Phase::LoopReset);
        assert_eq!(update.visibility(Part::Fork), Some(true));
        assert_eq!(update.visibility(Part::Slice), Some(true));
    }
}

#[test]
fn phase_names_follow_the_timeline() {
    let driver = FeedingDriver::default();
    let names: Vec<&str> = [0.5, 3.0, 5.0]
        .into_iter()
        .map(|t| driver.sample(t).phase.name())
        .collect();
    assert_eq!(names, ["feed", "chew", "loop-reset"]);
}

#[test]
fn tick_past_loop_end_restarts_clock() {
    let driver = FeedingDriver::default();
    let t0 = Instant::now();
    let mut clock = AnimationClock::started_at(t0);

    let late = t0 + Duration::from_millis(5010);
    let update = driver.tick(late, &mut clock);
    assert_eq!(update.phase, Phase::LoopReset);
    assert_eq!(clock.start(), late);
    assert_eq!(clock.completed_loops(), 1);

    let next = late + Duration::from_millis(16);
    let update = driver.tick(next, &mut clock);
    let Phase::Feed { progress } = update.phase else {
        panic!("expected Feed after reset, got {:?}", update.phase);
    };
    assert!(progress < 0.01);
    assert_eq!(clock.completed_loops(), 1);
}

#[test]
fn tick_inside_loop_leaves_clock_alone() {
    let driver = FeedingDriver::default();
    let t0 = Instant::now();
    let mut clock = AnimationClock::started_at(t0);

    for ms in [0, 500, 1999, 2000, 4999] {
        driver.tick(t0 + Duration::from_millis(ms), &mut clock);
    }
    assert_eq!(clock.start(), t0);
    assert_eq!(clock.completed_loops(), 0);
}

#[test]
fn clock_reading_before_start_counts_as_zero() {
    let t0 = Instant::now() + Duration::from_secs(1);
    let clock = AnimationClock::started_at(t0);
    assert_eq!(clock.elapsed_secs(Instant::now()), 0.0);
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn sample_is_idempotent() {
    let driver = FeedingDriver::default();
    for elapsed in [0.0, 0.7, 1.3, 2.0, 3.3, 4.9, 5.0] {
        assert_eq!(driver.sample(elapsed), driver.sample(elapsed));
    }
}

#[test]
fn custom_params_shift_phase_boundaries() {
    let params = FeedingParams {
        feed_duration: 1.0,
        chew_duration: 1.0,
        ..FeedingParams::DEFAULT
    };
    let driver = FeedingDriver::new(params, RestPose::DEFAULT);

    assert!(matches!(driver.sample(0.99).phase, Phase::Feed { .. }));
    assert!(matches!(driver.sample(1.0).phase, Phase::Chew { .. }));
    assert_eq!(driver.sample(2.0).phase, Phase::LoopReset);
}

#[test]
fn every_write_targets_a_distinct_part() {
    let driver = FeedingDriver::default();
    for elapsed in [0.5, 3.0, 5.0] {
        let update = driver.sample(elapsed);
        for (i, a) in update.writes.iter().enumerate() {
            for b in &update.writes[i + 1..] {
                assert_ne!(a.part, b.part, "duplicate write at {elapsed}s");
            }
        }
    }
}
