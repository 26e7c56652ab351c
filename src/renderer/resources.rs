//! GPU Resources
//!
//! Lazily uploaded vertex/index buffers per [`GeometryKey`] and one uniform
//! buffer + bind group per mesh node. Geometry is immutable once added to
//! the scene, so buffers are uploaded once; object uniforms are rewritten
//! every frame.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use wgpu::util::DeviceExt;

use crate::renderer::uniforms::ObjectUniforms;
use crate::resources::geometry::Geometry;
use crate::scene::node::Node;
use crate::scene::{GeometryKey, NodeHandle};

pub struct GpuGeometry {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuGeometry {
    fn upload(device: &wgpu::Device, geometry: &Geometry) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(geometry.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(geometry.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices().len() as u32,
        }
    }
}

pub struct GpuObject {
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

#[derive(Default)]
pub struct GpuResources {
    geometries: FxHashMap<GeometryKey, GpuGeometry>,
    objects: FxHashMap<NodeHandle, GpuObject>,
}

impl GpuResources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_geometry(
        &mut self,
        device: &wgpu::Device,
        key: GeometryKey,
        geometry: &Geometry,
    ) {
        self.geometries.entry(key).or_insert_with(|| {
            log::debug!(
                "Uploading geometry: {} vertices, {} triangles",
                geometry.vertex_count(),
                geometry.triangle_count()
            );
            GpuGeometry::upload(device, geometry)
        });
    }

    /// Writes `uniforms` into the node's buffer, creating it on first use.
    pub fn write_object(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        node: NodeHandle,
        uniforms: &ObjectUniforms,
    ) {
        let object = self.objects.entry(node).or_insert_with(|| {
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Object Uniforms"),
                size: std::mem::size_of::<ObjectUniforms>() as wgpu::BufferAddress,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Object BindGroup"),
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            GpuObject { buffer, bind_group }
        });
        queue.write_buffer(&object.buffer, 0, bytemuck::bytes_of(uniforms));
    }

    #[inline]
    #[must_use]
    pub fn geometry(&self, key: GeometryKey) -> Option<&GpuGeometry> {
        self.geometries.get(&key)
    }

    #[inline]
    #[must_use]
    pub fn object(&self, node: NodeHandle) -> Option<&GpuObject> {
        self.objects.get(&node)
    }

    /// Drops object buffers for nodes removed from the scene.
    ///
    /// Hidden nodes keep theirs so toggling visibility does not reallocate.
    pub fn retain_objects(&mut self, nodes: &SlotMap<NodeHandle, Node>) {
        prune_removed_nodes(&mut self.objects, nodes);
    }
}

fn prune_removed_nodes<T>(
    cache: &mut FxHashMap<NodeHandle, T>,
    nodes: &SlotMap<NodeHandle, Node>,
) {
    cache.retain(|node, _| nodes.contains_key(*node));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Scene, Transform};

    #[test]
    fn hidden_nodes_keep_cache_entries_removed_nodes_lose_them() {
        let mut scene = Scene::new();
        let root = scene.create_node("Root");
        let hidden = scene.add_group(root, "Hidden", Transform::new());
        let removed = scene.add_group(root, "Removed", Transform::new());

        let mut cache: FxHashMap<NodeHandle, u32> = FxHashMap::default();
        cache.insert(hidden, 1);
        cache.insert(removed, 2);

        if let Some(node) = scene.get_node_mut(hidden) {
            node.visible = false;
        }
        scene.remove_node(removed);
        prune_removed_nodes(&mut cache, &scene.nodes);

        assert_eq!(cache.get(&hidden), Some(&1));
        assert!(!cache.contains_key(&removed));
    }
}
