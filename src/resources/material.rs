use glam::Vec4;

use crate::resources::color::hex_to_linear_rgba;

/// Metal/roughness surface description used by the forward pass.
///
/// Mirrors the parameters a standard PBR material exposes. Values are fixed
/// once the material is added to a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshStandardMaterial {
    /// Linear RGBA base color.
    pub color: Vec4,
    pub roughness: f32,
    pub metalness: f32,
    /// Scale applied to the scene environment's contribution.
    pub env_map_intensity: f32,
}

impl MeshStandardMaterial {
    #[must_use]
    pub fn new(color: Vec4) -> Self {
        Self {
            color,
            roughness: 1.0,
            metalness: 0.0,
            env_map_intensity: 1.0,
        }
    }

    /// Material from an sRGB `0xRRGGBB` color.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        Self::new(hex_to_linear_rgba(hex))
    }

    #[must_use]
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_env_map_intensity(mut self, intensity: f32) -> Self {
        self.env_map_intensity = intensity.max(0.0);
        self
    }
}

impl Default for MeshStandardMaterial {
    fn default() -> Self {
        Self::new(Vec4::ONE)
    }
}
