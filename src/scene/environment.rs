//! Environment lighting.
//!
//! A cheap stand-in for an image-based "studio" environment: a hemisphere
//! gradient from `sky_color` (straight up) to `ground_color` (straight
//! down), scaled by `intensity` and by each material's own
//! `env_map_intensity`.

use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    pub sky_color: Vec3,
    pub ground_color: Vec3,
    pub intensity: f32,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sky_color: Vec3::ZERO,
            ground_color: Vec3::ZERO,
            intensity: 0.0,
        }
    }

    /// Soft, neutral light box: bright above, dim below.
    #[must_use]
    pub fn studio() -> Self {
        Self {
            sky_color: Vec3::new(1.0, 0.98, 0.95),
            ground_color: Vec3::new(0.25, 0.24, 0.26),
            intensity: 0.6,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.intensity > 0.0
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
