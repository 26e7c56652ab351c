//! Renderer settings.
//!
//! ```rust,ignore
//! use chomp::renderer::RenderSettings;
//!
//! let settings = RenderSettings {
//!     msaa_samples: 1,
//!     vsync: false,
//!     ..Default::default()
//! };
//! ```

/// Configuration for the GPU device and the forward pass.
///
/// Fixed at startup; there is no runtime configuration surface.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub power_preference: wgpu::PowerPreference,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
    pub depth_format: wgpu::TextureFormat,
    /// MSAA sample count: 1 (off) or 4.
    pub msaa_samples: u32,
    pub vsync: bool,
    /// Clear color used when the scene has no background.
    pub clear_color: wgpu::Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            depth_format: wgpu::TextureFormat::Depth32Float,
            msaa_samples: 4,
            vsync: true,
            clear_color: wgpu::Color::TRANSPARENT,
        }
    }
}

impl RenderSettings {
    /// Sample count actually used. Anything other than 1 or 4 falls back to 1.
    #[must_use]
    pub fn effective_msaa_samples(&self) -> u32 {
        match self.msaa_samples {
            4 => 4,
            1 => 1,
            other => {
                log::warn!("Unsupported MSAA sample count {other}, falling back to 1");
                1
            }
        }
    }
}
