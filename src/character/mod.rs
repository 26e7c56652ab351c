//! Character Module
//!
//! The tomato itself: [`build_tomato`] declares the model, [`TomatoRig`]
//! names the parts the animation driver moves.

pub mod model;
pub mod rig;

pub use model::{build_tomato, palette};
pub use rig::TomatoRig;
