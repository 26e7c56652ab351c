use std::f32::consts::PI;

use glam::Vec3;

use crate::resources::geometry::{Geometry, Vertex};

/// Cylinder (or truncated cone) centered on the origin, axis along +Y.
#[derive(Debug, Clone, Copy)]
pub struct CylinderOptions {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    pub open_ended: bool,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius_top: 1.0,
            radius_bottom: 1.0,
            height: 1.0,
            radial_segments: 32,
            height_segments: 1,
            open_ended: false,
        }
    }
}

impl CylinderOptions {
    #[must_use]
    pub fn new(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        Self {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
            ..Self::default()
        }
    }
}

#[must_use]
pub fn create_cylinder(options: CylinderOptions) -> Geometry {
    let radial_segments = options.radial_segments.max(3);
    let height_segments = options.height_segments.max(1);
    let half_height = options.height / 2.0;
    let slope = if options.height > 0.0 {
        (options.radius_bottom - options.radius_top) / options.height
    } else {
        0.0
    };

    let stride = radial_segments + 1;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // ---- Side wall ----
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let radius = v * (options.radius_bottom - options.radius_top) + options.radius_top;
        let y = -v * options.height + half_height;

        for ix in 0..=radial_segments {
            let u = ix as f32 / radial_segments as f32;
            let (sin_t, cos_t) = (u * 2.0 * PI).sin_cos();

            let normal = Vec3::new(sin_t, slope, cos_t).normalize();
            vertices.push(Vertex::new(
                [radius * sin_t, y, radius * cos_t],
                normal.to_array(),
                [u, 1.0 - v],
            ));
        }
    }

    for iy in 0..height_segments {
        for ix in 0..radial_segments {
            let a = iy * stride + ix;
            let b = (iy + 1) * stride + ix;
            let c = (iy + 1) * stride + ix + 1;
            let d = iy * stride + ix + 1;

            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    // ---- Caps ----
    if !options.open_ended {
        if options.radius_top > 0.0 {
            push_cap(&mut vertices, &mut indices, options.radius_top, half_height, radial_segments, true);
        }
        if options.radius_bottom > 0.0 {
            push_cap(&mut vertices, &mut indices, options.radius_bottom, -half_height, radial_segments, false);
        }
    }

    Geometry::new(vertices, indices)
}

fn push_cap(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    radius: f32,
    y: f32,
    radial_segments: u32,
    top: bool,
) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = [0.0, sign, 0.0];

    let center = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, y, 0.0], normal, [0.5, 0.5]));

    let ring_start = vertices.len() as u32;
    for ix in 0..=radial_segments {
        let u = ix as f32 / radial_segments as f32;
        let (sin_t, cos_t) = (u * 2.0 * PI).sin_cos();
        vertices.push(Vertex::new(
            [radius * sin_t, y, radius * cos_t],
            normal,
            [cos_t * 0.5 + 0.5, sin_t * 0.5 * sign + 0.5],
        ));
    }

    for ix in 0..radial_segments {
        let i = ring_start + ix;
        if top {
            indices.extend_from_slice(&[i, i + 1, center]);
        } else {
            indices.extend_from_slice(&[i + 1, i, center]);
        }
    }
}
