use crate::resources::geometry::{Geometry, Vertex};

/// One face: outward normal plus its four corners, counter-clockwise when
/// viewed from outside.
type Face = ([f32; 3], [[f32; 3]; 4]);

#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> Geometry {
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    let faces: [Face; 6] = [
        // Front (+Z)
        ([0.0, 0.0, 1.0], [[-w, -h, d], [w, -h, d], [w, h, d], [-w, h, d]]),
        // Back (-Z)
        ([0.0, 0.0, -1.0], [[-w, -h, -d], [-w, h, -d], [w, h, -d], [w, -h, -d]]),
        // Top (+Y)
        ([0.0, 1.0, 0.0], [[-w, h, -d], [-w, h, d], [w, h, d], [w, h, -d]]),
        // Bottom (-Y)
        ([0.0, -1.0, 0.0], [[-w, -h, -d], [w, -h, -d], [w, -h, d], [-w, -h, d]]),
        // Right (+X)
        ([1.0, 0.0, 0.0], [[w, -h, -d], [w, h, -d], [w, h, d], [w, -h, d]]),
        // Left (-X)
        ([-1.0, 0.0, 0.0], [[-w, -h, -d], [-w, -h, d], [-w, h, d], [-w, h, -d]]),
    ];

    const UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let vertices: Vec<Vertex> = faces
        .iter()
        .flat_map(|(normal, corners)| {
            corners
                .iter()
                .zip(UVS)
                .map(move |(corner, uv)| Vertex::new(*corner, *normal, uv))
        })
        .collect();

    // 2 triangles per face, CCW
    let indices: Vec<u32> = (0..6)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    Geometry::new(vertices, indices)
}
