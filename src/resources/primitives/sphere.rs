use std::f32::consts::PI;

use crate::resources::geometry::{Geometry, Vertex};

/// Sphere parameters.
///
/// `phi` sweeps around the vertical axis, `theta` runs from the north pole
/// (0) to the south pole (π). Partial ranges produce sphere segments, e.g.
/// `theta_length = π/2` is the upper hemisphere.
#[derive(Debug, Clone, Copy)]
pub struct SphereOptions {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub phi_start: f32,
    pub phi_length: f32,
    pub theta_start: f32,
    pub theta_length: f32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 16,
            phi_start: 0.0,
            phi_length: 2.0 * PI,
            theta_start: 0.0,
            theta_length: PI,
        }
    }
}

impl SphereOptions {
    #[must_use]
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self {
            radius,
            width_segments,
            height_segments,
            ..Self::default()
        }
    }
}

#[must_use]
pub fn create_sphere(options: SphereOptions) -> Geometry {
    let radius = options.radius;
    let width_segments = options.width_segments.max(3);
    let height_segments = options.height_segments.max(2);
    let theta_end = (options.theta_start + options.theta_length).min(PI);

    let stride = width_segments + 1;
    let mut vertices = Vec::with_capacity((stride * (height_segments + 1)) as usize);
    let mut indices = Vec::new();

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let theta = options.theta_start + v * options.theta_length;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let phi = options.phi_start + u * options.phi_length;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let px = -radius * cos_phi * sin_theta;
            let py = radius * cos_theta;
            let pz = radius * sin_phi * sin_theta;

            // poles collapse to a point, normal is still radial
            let normal = [-cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];

            vertices.push(Vertex::new([px, py, pz], normal, [u, 1.0 - v]));
        }
    }

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * stride + ix + 1;
            let b = iy * stride + ix;
            let c = (iy + 1) * stride + ix;
            let d = (iy + 1) * stride + ix + 1;

            // skip the degenerate triangle at each closed pole
            if iy != 0 || options.theta_start > 0.0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 || theta_end < PI {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Geometry::new(vertices, indices)
}
