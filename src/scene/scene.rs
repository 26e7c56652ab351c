use std::borrow::Cow;

use glam::{Affine3A, Vec4};
use slotmap::SlotMap;

use crate::resources::geometry::Geometry;
use crate::resources::material::MeshStandardMaterial;
use crate::resources::mesh::Mesh;
use crate::scene::camera::Camera;
use crate::scene::environment::Environment;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::transform::Transform;
use crate::scene::transform_system;
use crate::scene::{CameraKey, GeometryKey, LightKey, MaterialKey, MeshKey, NodeHandle};

/// A drawable node resolved for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderItem {
    pub node: NodeHandle,
    pub mesh: Mesh,
    pub world_matrix: Affine3A,
}

/// Scene graph container.
///
/// Owns the node arena and the component pools (geometry, materials,
/// meshes, cameras, lights). Geometry and materials are write-once; the
/// per-frame mutable state is node transforms and visibility.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    pub geometries: SlotMap<GeometryKey, Geometry>,
    pub materials: SlotMap<MaterialKey, MeshStandardMaterial>,
    pub meshes: SlotMap<MeshKey, Mesh>,
    pub cameras: SlotMap<CameraKey, Camera>,
    pub lights: SlotMap<LightKey, Light>,

    pub environment: Environment,
    /// Linear RGBA clear color. `None` leaves the surface transparent.
    pub background: Option<Vec4>,

    pub active_camera: Option<NodeHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),

            geometries: SlotMap::with_key(),
            materials: SlotMap::with_key(),
            meshes: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
            lights: SlotMap::with_key(),

            environment: Environment::new(),
            background: Some(Vec4::new(0.0, 0.0, 0.0, 1.0)),

            active_camera: None,
        }
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Adds a node at the root level.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node under `parent`. Falls back to the root level when the
    /// parent does not exist.
    pub fn add_to_parent(&mut self, mut child: Node, parent: NodeHandle) -> NodeHandle {
        if !self.nodes.contains_key(parent) {
            log::warn!("Parent node not found, adding '{}' at root level", child.name);
            return self.add_node(child);
        }

        child.parent = Some(parent);
        let handle = self.nodes.insert(child);
        self.nodes[parent].children.push(handle);
        handle
    }

    /// Creates an empty root node.
    pub fn create_node(&mut self, name: impl Into<Cow<'static, str>>) -> NodeHandle {
        self.add_node(Node::with_name(name))
    }

    /// Creates an empty node under `parent` with the given local transform.
    pub fn add_group(
        &mut self,
        parent: NodeHandle,
        name: impl Into<Cow<'static, str>>,
        transform: Transform,
    ) -> NodeHandle {
        let mut node = Node::with_name(name);
        node.transform = transform;
        self.add_to_parent(node, parent)
    }

    /// Moves `child` under `parent`, detaching it from its previous parent.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            log::error!("Node not found during attach!");
            return;
        }
        if self.is_ancestor(child, parent) {
            log::warn!("Cannot attach node under its own descendant!");
            return;
        }

        self.detach_from_parent(child);

        self.nodes[parent].children.push(child);
        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.transform.mark_dirty();
    }

    /// Returns true if `ancestor` is on the parent chain of `node`.
    fn is_ancestor(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = self.nodes.get(node).and_then(|n| n.parent);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.nodes.get(handle).and_then(|n| n.parent);
        }
        false
    }

    fn detach_from_parent(&mut self, child: NodeHandle) {
        match self.nodes.get(child).and_then(|n| n.parent) {
            Some(p) => {
                if let Some(parent) = self.nodes.get_mut(p) {
                    parent.children.retain(|&c| c != child);
                }
            }
            None => self.root_nodes.retain(|&r| r != child),
        }
    }

    /// Removes a node and its whole subtree, including attached components.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        if !self.nodes.contains_key(handle) {
            return;
        }
        self.detach_from_parent(handle);

        let mut stack = vec![handle];
        while let Some(h) = stack.pop() {
            let Some(node) = self.nodes.remove(h) else {
                continue;
            };
            if let Some(key) = node.mesh {
                self.meshes.remove(key);
            }
            if let Some(key) = node.camera {
                self.cameras.remove(key);
                if self.active_camera == Some(h) {
                    self.active_camera = None;
                }
            }
            if let Some(key) = node.light {
                self.lights.remove(key);
            }
            stack.extend(node.children);
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// First node carrying `name`, in slot order.
    #[must_use]
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find_map(|(handle, node)| (node.name == name).then_some(handle))
    }

    /// Whether the node and every ancestor are visible.
    #[must_use]
    pub fn is_visible_in_hierarchy(&self, handle: NodeHandle) -> bool {
        let mut current = Some(handle);
        while let Some(h) = current {
            match self.nodes.get(h) {
                Some(node) if node.visible => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    // ========================================================================
    // Resources & Components
    // ========================================================================

    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryKey {
        self.geometries.insert(geometry)
    }

    pub fn add_material(&mut self, material: MeshStandardMaterial) -> MaterialKey {
        self.materials.insert(material)
    }

    /// Creates a mesh node under `parent` (or at the root when `None`).
    pub fn add_mesh(
        &mut self,
        parent: Option<NodeHandle>,
        name: impl Into<Cow<'static, str>>,
        mesh: Mesh,
        transform: Transform,
    ) -> NodeHandle {
        let mut node = Node::with_name(name);
        node.transform = transform;
        node.mesh = Some(self.meshes.insert(mesh));
        match parent {
            Some(p) => self.add_to_parent(node, p),
            None => self.add_node(node),
        }
    }

    /// Creates a camera node at the root level. The first camera added
    /// becomes the active one.
    pub fn add_camera(&mut self, camera: Camera, transform: Transform) -> NodeHandle {
        let mut node = Node::with_name("Camera");
        node.transform = transform;
        node.camera = Some(self.cameras.insert(camera));
        let handle = self.add_node(node);
        if self.active_camera.is_none() {
            self.active_camera = Some(handle);
        }
        handle
    }

    /// Creates a light node at the root level.
    pub fn add_light(&mut self, light: Light, transform: Transform) -> NodeHandle {
        let mut node = Node::with_name("Light");
        node.transform = transform;
        node.light = Some(self.lights.insert(light));
        self.add_node(node)
    }

    /// Transform and camera of the active camera node.
    pub fn query_main_camera_bundle(&mut self) -> Option<(&mut Transform, &mut Camera)> {
        let node_id = self.active_camera?;
        let camera_key = self.nodes.get(node_id)?.camera?;
        let camera = self.cameras.get_mut(camera_key)?;
        let transform = &mut self.nodes.get_mut(node_id)?.transform;
        Some((transform, camera))
    }

    #[must_use]
    pub fn main_camera(&self) -> Option<&Camera> {
        let key = self.nodes.get(self.active_camera?)?.camera?;
        self.cameras.get(key)
    }

    /// Lights on visible nodes, with their world matrices.
    pub fn iter_active_lights(&self) -> impl Iterator<Item = (&Light, &Affine3A)> {
        self.nodes.iter().filter_map(move |(handle, node)| {
            let light = self.lights.get(node.light?)?;
            self.is_visible_in_hierarchy(handle)
                .then_some((light, node.world_matrix()))
        })
    }

    // ========================================================================
    // Per-frame
    // ========================================================================

    /// Recomputes world matrices. Call once per frame before rendering.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy_iterative(
            &mut self.nodes,
            &mut self.cameras,
            &self.root_nodes,
        );
    }

    /// Collects every mesh whose node is visible in the hierarchy.
    ///
    /// Hidden nodes prune their whole subtree.
    #[must_use]
    pub fn renderables(&self) -> Vec<RenderItem> {
        let mut items = Vec::with_capacity(self.meshes.len());
        let mut stack: Vec<NodeHandle> = self.root_nodes.iter().rev().copied().collect();

        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            if !node.visible {
                continue;
            }
            if let Some(mesh) = node.mesh.and_then(|key| self.meshes.get(key)) {
                items.push(RenderItem {
                    node: handle,
                    mesh: *mesh,
                    world_matrix: *node.world_matrix(),
                });
            }
            stack.extend(node.children.iter().rev());
        }

        items
    }
}
