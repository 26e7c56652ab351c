//! Resource Module
//!
//! CPU-side data the renderer consumes:
//!
//! - [`Geometry`]: indexed triangle lists with interleaved [`Vertex`] data
//! - [`MeshStandardMaterial`]: color / roughness / metalness surface
//! - [`Mesh`]: geometry + material pair attached to a scene node
//! - [`primitives`]: sphere, cylinder, torus and box generators

pub mod color;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod primitives;

pub use geometry::{BoundingSphere, Geometry, Vertex};
pub use material::MeshStandardMaterial;
pub use mesh::Mesh;
