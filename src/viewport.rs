//! Viewport setup.
//!
//! Background, lighting rig, camera and orbit controls around the
//! character. The render loop itself lives in [`App`](crate::app::App).

use glam::Vec3;

use crate::resources::color::{hex_to_linear, hex_to_linear_rgba};
use crate::scene::{Camera, Environment, Light, NodeHandle, Scene, Transform};
use crate::utils::OrbitControls;

pub const BACKGROUND: u32 = 0xffb3ba;
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Handles of the nodes the viewport adds to the scene.
#[derive(Debug, Clone)]
pub struct Stage {
    pub camera: NodeHandle,
    pub lights: Vec<NodeHandle>,
}

/// Adds background, environment, lights and the camera to `scene`.
pub fn setup_stage(scene: &mut Scene, aspect: f32) -> Stage {
    scene.background = Some(hex_to_linear_rgba(BACKGROUND));
    scene.environment = Environment::studio();

    let white = hex_to_linear(0xffffff);
    let lights = vec![
        scene.add_light(Light::new_ambient(white, 0.6), Transform::new()),
        scene.add_light(
            Light::new_directional(white, 1.0).with_shadows(true),
            Transform::from_position(Vec3::new(5.0, 5.0, 5.0)),
        ),
        scene.add_light(
            Light::new_directional(white, 0.4),
            Transform::from_position(Vec3::new(-5.0, 3.0, -5.0)),
        ),
        scene.add_light(
            Light::new_spot(white, 0.5, 0.3, 1.0),
            Transform::from_position(Vec3::new(0.0, 10.0, 0.0)),
        ),
    ];

    let camera = scene.add_camera(
        Camera::new_perspective(CAMERA_FOV_DEGREES, aspect, CAMERA_NEAR, CAMERA_FAR),
        Transform::from_position(CAMERA_POSITION),
    );
    scene.active_camera = Some(camera);

    log::debug!("Stage ready: {} lights, camera at {CAMERA_POSITION}", lights.len());

    Stage { camera, lights }
}

/// Turntable controls matching the initial camera placement.
#[must_use]
pub fn orbit_controls() -> OrbitControls {
    OrbitControls::horizontal(Vec3::ZERO, CAMERA_POSITION.length())
}
