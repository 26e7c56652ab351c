#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

//! An animated cartoon tomato that is fed a tomato slice on a fork and
//! chews it, looping forever in an orbitable 3D viewport.
//!
//! - [`animation`]: the time-driven feed-and-chew state machine
//! - [`character`]: the tomato model and the rig the animation moves
//! - [`scene`] and [`resources`]: scene graph, meshes, materials, primitives
//! - [`renderer`] and [`app`]: wgpu forward renderer and the winit host
//! - [`viewport`]: background, lights, camera and orbit controls

pub mod animation;
pub mod app;
pub mod character;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod utils;
pub mod viewport;

pub use animation::{AnimationClock, FeedingDriver, FeedingParams, FrameUpdate, Part, Phase};
pub use app::App;
pub use character::{TomatoRig, build_tomato};
pub use errors::{ChompError, Result};
pub use renderer::{RenderSettings, Renderer};
pub use resources::{Geometry, Mesh, MeshStandardMaterial};
pub use scene::{Camera, Light, Node, Scene, Transform};
pub use utils::OrbitControls;
