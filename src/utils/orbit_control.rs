use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec2, Vec3};
use winit::event::MouseButton;

use crate::app::input::Input;
use crate::scene::transform::Transform;

/// Spherical-coordinate camera controller.
///
/// `theta` is the azimuth around +Y and `phi` the polar angle measured from
/// +Y. The camera is placed at `center + radius * (sinφ sinθ, cosφ, sinφ cosθ)`
/// and looks at `center`.
///
/// Left drag rotates, scroll zooms and right drag pans. Zoom and pan can be
/// switched off, and the polar angle can be pinned by setting
/// `min_polar_angle == max_polar_angle`.
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,

    pub center: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: true,
            enable_zoom: true,
            enable_pan: true,
            min_distance: 1.0,
            max_distance: 1000.0,
            min_polar_angle: 0.0,
            max_polar_angle: PI,

            center,
            radius,
            theta: 0.0,
            phi: FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Turntable preset: rotation around the vertical axis only, no zoom,
    /// no pan. The camera stays on the horizon plane through `center`.
    #[must_use]
    pub fn horizontal(center: Vec3, radius: f32) -> Self {
        Self {
            enable_zoom: false,
            enable_pan: false,
            min_polar_angle: FRAC_PI_2,
            max_polar_angle: FRAC_PI_2,
            ..Self::new(center, radius)
        }
    }

    pub fn update(&mut self, transform: &mut Transform, input: &Input, fov_degrees: f32, dt: f32) {
        let screen_height = input.screen_size.y.max(1.0);

        if input.is_button_pressed(MouseButton::Left) {
            let rotate_per_pixel = 2.0 * PI / screen_height;
            self.rotate_delta.x -= input.cursor_delta.x * rotate_per_pixel * self.rotate_speed;
            self.rotate_delta.y -= input.cursor_delta.y * rotate_per_pixel * self.rotate_speed;
        }

        if self.enable_damping {
            let target_fps = 60.0;

            let retention = (1.0 - self.damping_factor).powf(dt * target_fps);

            let delta_apply = self.rotate_delta * (1.0 - retention);

            self.theta += delta_apply.x;
            self.phi += delta_apply.y;

            self.rotate_delta *= retention;
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        const EPS: f32 = 0.0001;
        let min_phi = self.min_polar_angle.max(EPS);
        let max_phi = self.max_polar_angle.min(PI - EPS).max(min_phi);
        self.phi = self.phi.clamp(min_phi, max_phi);

        if self.enable_zoom && input.scroll_delta.y != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(input.scroll_delta.y.abs());
            if input.scroll_delta.y > 0.0 {
                self.radius *= scale;
            } else {
                self.radius /= scale;
            }
            self.radius = self.radius.clamp(self.min_distance, self.max_distance);
        }

        if self.enable_pan && input.is_button_pressed(MouseButton::Right) {
            let half_fov = fov_degrees.to_radians() / 2.0;
            let target_world_height = 2.0 * self.radius * half_fov.tan();
            let pixels_to_world_ratio = target_world_height / screen_height;

            let forward = -self.direction();
            let right = forward.cross(Vec3::Y).normalize();
            let up = right.cross(forward).normalize();

            let pan_delta_world = (right * -input.cursor_delta.x + up * input.cursor_delta.y)
                * pixels_to_world_ratio
                * self.pan_speed;

            self.center += pan_delta_world;
        }

        transform.position = self.center + self.direction() * self.radius;
        transform.look_at(self.center, Vec3::Y);
    }

    /// Unit vector from the center toward the camera.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }
}
