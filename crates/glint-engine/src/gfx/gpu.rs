use anyhow::{Context, Result};

use super::target::{CompositionTarget, TargetAllocator};

/// Parameters for GPU-backed composition targets.
#[derive(Debug, Clone)]
pub struct GpuTargetsInit {
    /// Color format of every attachment.
    pub format: wgpu::TextureFormat,

    /// Debug label prefix for created textures.
    pub label: String,

    /// Limits requested when creating a standalone device.
    pub required_limits: wgpu::Limits,
}

impl Default for GpuTargetsInit {
    fn default() -> Self {
        Self {
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            label: "glint composition target".to_string(),
            required_limits: wgpu::Limits::default(),
        }
    }
}

/// Allocates composition targets as wgpu textures usable both as render
/// attachments (panel pass) and as sampled textures (composite pass).
pub struct GpuTargets {
    device: wgpu::Device,
    init: GpuTargetsInit,
}

impl GpuTargets {
    /// Wraps an existing device.
    pub fn new(device: wgpu::Device, init: GpuTargetsInit) -> Self {
        Self { device, init }
    }

    /// Creates a surface-less device, for offscreen sessions.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn request_headless(init: GpuTargetsInit) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, _queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("glint offscreen device"),
                required_features: wgpu::Features::empty(),
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device")?;

        log::debug!("offscreen device ready on {:?}", adapter.get_info().backend);
        Ok(Self::new(device, init))
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }
}

impl TargetAllocator for GpuTargets {
    fn allocate(&self, width: u32, height: u32, attachments: u32) -> Box<dyn CompositionTarget> {
        let max = self.device.limits().max_texture_dimension_2d;
        let (tex_width, tex_height) = texture_extent(width, height, max);
        if (tex_width, tex_height) != (width.max(1), height.max(1)) {
            log::warn!("{width}x{height} target exceeds the device limit of {max}, clamped to {tex_width}x{tex_height}");
        }
        let extent = wgpu::Extent3d { width: tex_width, height: tex_height, depth_or_array_layers: 1 };

        let textures: Vec<wgpu::Texture> = (0..attachments.max(1))
            .map(|i| {
                self.device.create_texture(&wgpu::TextureDescriptor {
                    label: Some(&format!("{} #{i}", self.init.label)),
                    size: extent,
                    mip_level_count: 1,
                    sample_count: 1,
                    dimension: wgpu::TextureDimension::D2,
                    format: self.init.format,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                        | wgpu::TextureUsages::TEXTURE_BINDING,
                    view_formats: &[],
                })
            })
            .collect();

        let views = textures
            .iter()
            .map(|t| t.create_view(&wgpu::TextureViewDescriptor::default()))
            .collect();

        log::trace!("gpu target allocated ({width}x{height}, {attachments} attachment(s))");
        Box::new(GpuTarget { textures, views, width: tex_width, height: tex_height, released: false })
    }
}

/// Texture size backing a `width` x `height` target.
///
/// wgpu rejects zero-sized textures, so a 0x0 panel still gets a 1x1 backing,
/// and each side is capped at the device's `max` 2D dimension.
fn texture_extent(width: u32, height: u32, max: u32) -> (u32, u32) {
    let clamp = |side: u32| side.clamp(1, max.max(1));
    (clamp(width), clamp(height))
}

/// A set of same-sized color attachments.
pub struct GpuTarget {
    textures: Vec<wgpu::Texture>,
    views: Vec<wgpu::TextureView>,
    width: u32,
    height: u32,
    released: bool,
}

impl GpuTarget {
    /// Attachment views, in attachment order. Empty once cleaned up.
    pub fn views(&self) -> &[wgpu::TextureView] {
        &self.views
    }
}

impl CompositionTarget for GpuTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn attachments(&self) -> u32 {
        self.textures.len() as u32
    }

    fn clean_up(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.views.clear();
        for texture in self.textures.drain(..) {
            texture.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_is_at_least_one_pixel() {
        assert_eq!(texture_extent(0, 0, 8192), (1, 1));
        assert_eq!(texture_extent(640, 480, 8192), (640, 480));
    }

    #[test]
    fn extent_is_capped_at_the_device_limit() {
        assert_eq!(texture_extent(10_000, 300, 8192), (8192, 300));
        assert_eq!(texture_extent(10_000, 10_000, 2048), (2048, 2048));
    }
}
