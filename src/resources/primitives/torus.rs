use std::f32::consts::PI;

use glam::Vec3;

use crate::resources::geometry::{Geometry, Vertex};

/// Torus lying in the XY plane, centered on the origin.
///
/// `arc` limits the sweep around the main ring, starting at +X and turning
/// toward +Y. An arc of π gives the upper half ring.
#[derive(Debug, Clone, Copy)]
pub struct TorusOptions {
    pub radius: f32,
    pub tube: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
    pub arc: f32,
}

impl Default for TorusOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            tube: 0.4,
            radial_segments: 12,
            tubular_segments: 48,
            arc: 2.0 * PI,
        }
    }
}

#[must_use]
pub fn create_torus(options: TorusOptions) -> Geometry {
    let radial_segments = options.radial_segments.max(3);
    let tubular_segments = options.tubular_segments.max(3);
    let stride = tubular_segments + 1;

    let mut vertices = Vec::with_capacity((stride * (radial_segments + 1)) as usize);
    let mut indices = Vec::new();

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * 2.0 * PI;
        let (sin_v, cos_v) = v.sin_cos();

        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * options.arc;
            let (sin_u, cos_u) = u.sin_cos();

            let ring = options.radius + options.tube * cos_v;
            let position = Vec3::new(ring * cos_u, ring * sin_u, options.tube * sin_v);
            let center = Vec3::new(options.radius * cos_u, options.radius * sin_u, 0.0);
            let normal = (position - center).normalize_or_zero();

            vertices.push(Vertex::new(
                position.to_array(),
                normal.to_array(),
                [
                    i as f32 / tubular_segments as f32,
                    j as f32 / radial_segments as f32,
                ],
            ));
        }
    }

    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;

            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Geometry::new(vertices, indices)
}
