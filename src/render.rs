use crate::core::{OrbitCamera, ParticleField, SolidMesh};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod post;
mod scene;
mod targets;

use post::PostChain;
use scene::ScenePass;
use targets::RenderTargets;

/// What the frame loop hands the renderer each frame.
pub struct SceneView<'c> {
    pub camera: &'c OrbitCamera,
    pub model: Mat4,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    scene: ScenePass,
    post: PostChain,
    elapsed_sec: f32,
}

// Prefer an sRGB swapchain so the composite output is gamma encoded.
fn pick_surface_format(caps: &wgpu::SurfaceCapabilities) -> Option<wgpu::TextureFormat> {
    caps.formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .or_else(|| caps.formats.first().copied())
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        mesh: &SolidMesh,
        particles: &ParticleField,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("heart_device"),
                    required_features: wgpu::Features::empty(),
                    // Default limits; some WebGPU implementations reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;

        let caps = surface.get_capabilities(&adapter);
        let format = pick_surface_format(&caps)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let scene = ScenePass::new(&device, mesh, particles);
        let post = PostChain::new(&device, format, &targets);
        log::info!(
            "[gpu] ready {}x{} format={:?} heart_vertices={} particles={}",
            width,
            height,
            format,
            scene.vertex_count(),
            scene.particle_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene,
            post,
            elapsed_sec: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets = RenderTargets::new(&self.device, width, height);
        self.post.rebind(&self.device, &self.targets);
        log::info!("[gpu] resized to {}x{}", width, height);
    }

    pub fn render(&mut self, dt_sec: f32, view: &SceneView) -> Result<(), wgpu::SurfaceError> {
        self.elapsed_sec += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let output = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.scene.write_uniforms(&self.queue, view);
        self.post.write_uniforms(
            &self.queue,
            [self.config.width as f32, self.config.height as f32],
            self.targets.bloom_size(),
            self.elapsed_sec,
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });
        self.scene.encode(&mut encoder, &self.targets);
        self.post.encode(&mut encoder, &self.targets, &output);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
