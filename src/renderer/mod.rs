//! Renderer Module
//!
//! Draws a [`Scene`] into a window surface with wgpu.
//!
//! - [`context`]: device, queue, surface, depth and MSAA targets
//! - [`pipeline`]: the standard material pipeline and its layouts
//! - [`resources`]: per-geometry and per-object GPU buffers
//! - [`forward`]: the single forward pass
//!
//! Until [`Renderer::init`] has completed, [`Renderer::render`] is a no-op:
//! frames are skipped rather than drawn with a partial backend.

pub mod context;
pub mod forward;
pub mod pipeline;
pub mod resources;
pub mod settings;
pub mod uniforms;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::errors::Result;
use crate::scene::Scene;

pub use context::WgpuContext;
pub use settings::RenderSettings;

use self::forward::ForwardPass;
use self::pipeline::StandardPipeline;
use self::resources::GpuResources;
use self::uniforms::{GlobalUniforms, ObjectUniforms};

/// Everything that exists only after the GPU is ready.
struct RendererState {
    wgpu_ctx: WgpuContext,
    pipeline: StandardPipeline,
    resources: GpuResources,
    global_buffer: wgpu::Buffer,
    global_bind_group: wgpu::BindGroup,
    forward_pass: ForwardPass,
}

pub struct Renderer {
    settings: RenderSettings,
    state: Option<RendererState>,
}

impl Renderer {
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            state: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// True once the GPU backend is ready and frames are being drawn.
    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub async fn init<W>(&mut self, window: W, width: u32, height: u32) -> Result<()>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        if self.state.is_some() {
            return Ok(());
        }

        let wgpu_ctx = WgpuContext::new(window, &self.settings, width, height).await?;
        let device = &wgpu_ctx.device;

        let pipeline = StandardPipeline::new(
            device,
            wgpu_ctx.color_format(),
            wgpu_ctx.depth_format,
            wgpu_ctx.sample_count,
        );

        let global_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Global Uniforms"),
            size: std::mem::size_of::<GlobalUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let global_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Global BindGroup"),
            layout: &pipeline.global_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: global_buffer.as_entire_binding(),
            }],
        });

        log::info!(
            "Renderer ready: {:?}, {}x MSAA",
            wgpu_ctx.color_format(),
            wgpu_ctx.sample_count
        );

        self.state = Some(RendererState {
            wgpu_ctx,
            pipeline,
            resources: GpuResources::new(),
            global_buffer,
            global_bind_group,
            forward_pass: ForwardPass::new(self.settings.clear_color),
        });

        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(state) = &mut self.state {
            state.wgpu_ctx.resize(width, height);
        }
    }

    /// Draws one frame. Skipped while the backend is not initialized or the
    /// scene has no active camera.
    pub fn render(&mut self, scene: &Scene) {
        let Some(state) = &mut self.state else {
            return;
        };
        let Some(camera) = scene.main_camera() else {
            log::trace!("No active camera, skipping frame");
            return;
        };

        let frame = match state.wgpu_ctx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.wgpu_ctx.reconfigure();
                return;
            }
            Err(e) => {
                log::warn!("Failed to acquire surface texture: {e}");
                return;
            }
        };

        let ctx = &state.wgpu_ctx;

        let globals = GlobalUniforms::from_scene(camera, &scene.environment, scene.iter_active_lights());
        ctx.queue
            .write_buffer(&state.global_buffer, 0, bytemuck::bytes_of(&globals));

        let items = scene.renderables();
        for item in &items {
            let (Some(geometry), Some(material)) = (
                scene.geometries.get(item.mesh.geometry),
                scene.materials.get(item.mesh.material),
            ) else {
                log::warn!("Mesh on node {:?} references a missing resource", item.node);
                continue;
            };
            state
                .resources
                .ensure_geometry(&ctx.device, item.mesh.geometry, geometry);
            state.resources.write_object(
                &ctx.device,
                &ctx.queue,
                &state.pipeline.object_layout,
                item.node,
                &ObjectUniforms::new(&item.world_matrix, material),
            );
        }
        state.resources.retain_objects(&scene.nodes);

        if let Some(bg) = scene.background {
            state.forward_pass.clear_color = wgpu::Color {
                r: f64::from(bg.x),
                g: f64::from(bg.y),
                b: f64::from(bg.z),
                a: f64::from(bg.w),
            };
        }

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        state.forward_pass.run(
            ctx,
            &mut encoder,
            &view,
            &state.pipeline,
            &state.global_bind_group,
            &state.resources,
            &items,
        );

        ctx.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}
