//! Animation Module
//!
//! The feed-and-chew loop:
//!
//! - [`AnimationClock`]: start marker of the current loop, reset on completion
//! - [`Phase`]: Feed / Chew / LoopReset, selected from elapsed time
//! - [`FeedingDriver`]: turns elapsed time into a [`FrameUpdate`]
//! - [`PartWrite`]: one part's new position / rotation / scale / visibility
//!
//! The driver never touches the scene directly. Its output is applied by
//! [`TomatoRig::apply`](crate::character::TomatoRig::apply).

pub mod clock;
pub mod driver;
pub mod phase;
pub mod pose;

pub use clock::AnimationClock;
pub use driver::FeedingDriver;
pub use phase::{FeedingParams, Phase, ease_out_cubic};
pub use pose::{FrameUpdate, Part, PartWrite, RestPose};
