//! Transform System
//!
//! Propagates local matrices down the hierarchy into world matrices. Kept
//! apart from [`Scene`](crate::scene::Scene) so it only borrows the node
//! and camera pools.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::camera::Camera;
use crate::scene::node::Node;
use crate::scene::{CameraKey, NodeHandle};

/// Updates world matrices for every node reachable from `roots`.
///
/// Uses an explicit stack instead of recursion. A node's world matrix is
/// recomputed when its local matrix changed or any ancestor's did. Cameras
/// attached to updated nodes get their view matrices refreshed.
pub fn update_hierarchy_iterative(
    nodes: &mut SlotMap<NodeHandle, Node>,
    cameras: &mut SlotMap<CameraKey, Camera>,
    roots: &[NodeHandle],
) {
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = roots
        .iter()
        .rev()
        .map(|&root| (root, Affine3A::IDENTITY, false))
        .collect();

    while let Some((handle, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(handle) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let changed = local_changed || parent_changed;

        if changed {
            let world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(world);

            if let Some(camera) = node.camera.and_then(|key| cameras.get_mut(key)) {
                camera.update_view_projection(&world);
            }
        }

        let world = *node.transform.world_matrix();
        for &child in node.children.iter().rev() {
            stack.push((child, world, changed));
        }
    }
}

/// Updates one subtree, taking the root's parent world matrix as given.
pub fn update_subtree(
    nodes: &mut SlotMap<NodeHandle, Node>,
    cameras: &mut SlotMap<CameraKey, Camera>,
    root: NodeHandle,
) {
    let parent_world = nodes
        .get(root)
        .and_then(|n| n.parent)
        .and_then(|p| nodes.get(p))
        .map_or(Affine3A::IDENTITY, |p| *p.transform.world_matrix());

    if let Some(node) = nodes.get_mut(root) {
        // the parent may have moved since the root was last updated
        node.transform.mark_dirty();
    }

    let mut stack = vec![(root, parent_world, false)];
    while let Some((handle, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(handle) else {
            continue;
        };

        let changed = node.transform.update_local_matrix() || parent_changed;
        if changed {
            let world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(world);

            if let Some(camera) = node.camera.and_then(|key| cameras.get_mut(key)) {
                camera.update_view_projection(&world);
            }
        }

        let world = *node.transform.world_matrix();
        for &child in &node.children {
            stack.push((child, world, changed));
        }
    }
}
