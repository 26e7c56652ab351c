//! GPU-side uniform layouts.
//!
//! Every field is a 16-byte multiple so the Rust layout matches WGSL's
//! uniform address space rules without manual padding.

use bytemuck::{Pod, Zeroable};
use glam::{Affine3A, Mat3, Mat4, Vec3};

use crate::resources::material::MeshStandardMaterial;
use crate::scene::light::{Light, LightKind};
use crate::scene::{Camera, Environment};

pub const MAX_LIGHTS: usize = 8;

const LIGHT_DIRECTIONAL: f32 = 0.0;
const LIGHT_SPOT: f32 = 1.0;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GpuLight {
    /// xyz: world position, w: kind (0 directional, 1 spot)
    pub position: [f32; 4],
    /// xyz: direction the light travels, w: cos of the outer cone
    pub direction: [f32; 4],
    /// rgb: color × intensity, w: cos of the inner cone
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GlobalUniforms {
    pub view_projection: [[f32; 4]; 4],
    pub camera_position: [f32; 4],
    pub ambient: [f32; 4],
    pub sky_color: [f32; 4],
    pub ground_color: [f32; 4],
    /// x: number of valid entries in `lights`
    pub light_count: [u32; 4],
    pub lights: [GpuLight; MAX_LIGHTS],
}

impl Default for GlobalUniforms {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl GlobalUniforms {
    /// Packs camera, environment and lights. Ambient lights are summed;
    /// directional and spot lights beyond [`MAX_LIGHTS`] are dropped.
    pub fn from_scene<'a>(
        camera: &Camera,
        environment: &Environment,
        lights: impl Iterator<Item = (&'a Light, &'a Affine3A)>,
    ) -> Self {
        let mut u = Self {
            view_projection: camera.view_projection_matrix().to_cols_array_2d(),
            camera_position: camera.position().extend(1.0).to_array(),
            sky_color: (environment.sky_color * environment.intensity).extend(0.0).to_array(),
            ground_color: (environment.ground_color * environment.intensity).extend(0.0).to_array(),
            ..Self::default()
        };

        let mut ambient = Vec3::ZERO;
        let mut count = 0usize;

        for (light, world) in lights {
            let radiance = light.color * light.intensity;
            let position: Vec3 = world.translation.into();
            // directional and spot lights aim at the origin
            let direction = (-position).normalize_or(Vec3::NEG_Y);

            let gpu = match &light.kind {
                LightKind::Ambient => {
                    ambient += radiance;
                    continue;
                }
                LightKind::Directional => GpuLight {
                    position: position.extend(LIGHT_DIRECTIONAL).to_array(),
                    direction: direction.extend(-1.0).to_array(),
                    color: radiance.extend(1.0).to_array(),
                },
                LightKind::Spot(spot) => {
                    let cos_outer = spot.angle.cos();
                    let cos_inner = (spot.angle * (1.0 - spot.penumbra)).cos();
                    GpuLight {
                        position: position.extend(LIGHT_SPOT).to_array(),
                        direction: direction.extend(cos_outer).to_array(),
                        color: radiance.extend(cos_inner).to_array(),
                    }
                }
            };

            if count == MAX_LIGHTS {
                log::warn!("More than {MAX_LIGHTS} lights in scene, extra lights ignored");
                continue;
            }
            u.lights[count] = gpu;
            count += 1;
        }

        u.ambient = ambient.extend(0.0).to_array();
        u.light_count = [count as u32, 0, 0, 0];
        u
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model's linear part, widened to 4×4.
    pub normal_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// x: roughness, y: metalness, z: environment intensity
    pub params: [f32; 4],
}

impl ObjectUniforms {
    #[must_use]
    pub fn new(world: &Affine3A, material: &MeshStandardMaterial) -> Self {
        let linear = Mat3::from(world.matrix3);
        let normal = if linear.determinant().abs() > f32::EPSILON {
            linear.inverse().transpose()
        } else {
            Mat3::IDENTITY
        };

        Self {
            model: Mat4::from(*world).to_cols_array_2d(),
            normal_matrix: Mat4::from_mat3(normal).to_cols_array_2d(),
            color: material.color.to_array(),
            params: [
                material.roughness,
                material.metalness,
                material.env_map_intensity,
                0.0,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sizes_are_16_byte_multiples() {
        assert_eq!(std::mem::size_of::<GpuLight>() % 16, 0);
        assert_eq!(std::mem::size_of::<GlobalUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<ObjectUniforms>(), 160);
    }

    #[test]
    fn ambient_lights_are_summed_not_listed() {
        let camera = Camera::new_perspective(50.0, 1.0, 0.1, 100.0);
        let ambient = Light::new_ambient(Vec3::ONE, 0.6);
        let sun = Light::new_directional(Vec3::ONE, 1.0);
        let at_origin = Affine3A::IDENTITY;
        let above = Affine3A::from_translation(Vec3::new(0.0, 5.0, 0.0));

        let u = GlobalUniforms::from_scene(
            &camera,
            &Environment::new(),
            [(&ambient, &at_origin), (&sun, &above)].into_iter(),
        );

        assert_eq!(u.light_count[0], 1);
        assert!((u.ambient[0] - 0.6).abs() < 1e-6);
        assert!((u.lights[0].direction[1] + 1.0).abs() < 1e-6);
    }
}
