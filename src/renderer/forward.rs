//! Forward Render Pass
//!
//! A single `RenderPass`: clear color and depth, draw every visible mesh,
//! resolve MSAA into the swapchain image.

use crate::renderer::context::WgpuContext;
use crate::renderer::pipeline::StandardPipeline;
use crate::renderer::resources::GpuResources;
use crate::scene::scene::RenderItem;

pub struct ForwardPass {
    pub clear_color: wgpu::Color,
}

impl ForwardPass {
    #[must_use]
    pub fn new(clear_color: wgpu::Color) -> Self {
        Self { clear_color }
    }

    /// Returns (`color_view`, `resolve_view`).
    fn render_target<'a>(
        ctx: &'a WgpuContext,
        surface_view: &'a wgpu::TextureView,
    ) -> (&'a wgpu::TextureView, Option<&'a wgpu::TextureView>) {
        match &ctx.msaa_view {
            Some(msaa_view) => (msaa_view, Some(surface_view)),
            None => (surface_view, None),
        }
    }

    pub fn run(
        &self,
        ctx: &WgpuContext,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
        pipeline: &StandardPipeline,
        global_bind_group: &wgpu::BindGroup,
        resources: &GpuResources,
        items: &[RenderItem],
    ) {
        let (color_view, resolve_target) = Self::render_target(ctx, surface_view);

        let store_op = if resolve_target.is_some() {
            wgpu::StoreOp::Discard
        } else {
            wgpu::StoreOp::Store
        };

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Forward Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: store_op,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &ctx.depth_texture_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        pass.set_pipeline(&pipeline.pipeline);
        pass.set_bind_group(0, global_bind_group, &[]);

        for item in items {
            let (Some(geometry), Some(object)) = (
                resources.geometry(item.mesh.geometry),
                resources.object(item.node),
            ) else {
                continue;
            };

            pass.set_bind_group(1, &object.bind_group, &[]);
            pass.set_vertex_buffer(0, geometry.vertex_buffer.slice(..));
            pass.set_index_buffer(geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..geometry.index_count, 0, 0..1);
        }
    }
}

impl Default for ForwardPass {
    fn default() -> Self {
        Self::new(wgpu::Color::BLACK)
    }
}
