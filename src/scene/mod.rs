//! Scene Graph Module
//!
//! Manages the hierarchy and the components hanging off it:
//! - [`Node`]: a scene node (parent/child links, transform, visibility)
//! - [`Transform`]: position, rotation and scale with cached matrices
//! - [`Scene`]: the container owning nodes and component pools
//! - [`Camera`] and [`Light`] components
//! - [`transform_system`]: world matrix propagation, decoupled from `Scene`

pub mod camera;
pub mod environment;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use camera::Camera;
pub use environment::Environment;
pub use light::{Light, LightKind, SpotLight};
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct GeometryKey;
    pub struct MaterialKey;
    pub struct MeshKey;
    pub struct CameraKey;
    pub struct LightKey;
}
