use super::helpers;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const BLOOM_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Size-dependent offscreen views. Views keep their textures alive.
///
/// - `hdr_view`: scene color at full resolution, sampled by the post chain.
/// - `depth_view`: scene depth, same size as the HDR target.
/// - `bloom_a_view` / `bloom_b_view`: half-res ping-pong for bright pass and blur.
pub(crate) struct RenderTargets {
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b_view: wgpu::TextureView,
    bloom_size: (u32, u32),
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let full = (width.max(1), height.max(1));
        let half = ((full.0 / 2).max(1), (full.1 / 2).max(1));
        let sampled = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        Self {
            hdr_view: helpers::target_view(device, "hdr", full, HDR_FORMAT, sampled),
            depth_view: helpers::target_view(
                device,
                "depth",
                full,
                DEPTH_FORMAT,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
            ),
            bloom_a_view: helpers::target_view(device, "bloom_a", half, BLOOM_FORMAT, sampled),
            bloom_b_view: helpers::target_view(device, "bloom_b", half, BLOOM_FORMAT, sampled),
            bloom_size: half,
        }
    }

    pub(crate) fn bloom_size(&self) -> [f32; 2] {
        [self.bloom_size.0 as f32, self.bloom_size.1 as f32]
    }
}
