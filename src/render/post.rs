use super::helpers;
use super::targets::{RenderTargets, BLOOM_FORMAT};
use crate::constants::{
    BLOOM_INTENSITY, BLOOM_SMOOTHING, BLOOM_THRESHOLD, NOISE_OPACITY, VIGNETTE_DARKNESS,
    VIGNETTE_OFFSET,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PostUniforms {
    resolution: [f32; 2],
    time: f32,
    bloom_intensity: f32,
    blur_dir: [f32; 2],
    bloom_threshold: f32,
    bloom_smoothing: f32,
    noise_opacity: f32,
    vignette_offset: f32,
    vignette_darkness: f32,
    _pad: f32,
}

impl PostUniforms {
    fn new(resolution: [f32; 2], time: f32, blur_dir: [f32; 2]) -> Self {
        Self {
            resolution,
            time,
            bloom_intensity: BLOOM_INTENSITY,
            blur_dir,
            bloom_threshold: BLOOM_THRESHOLD,
            bloom_smoothing: BLOOM_SMOOTHING,
            noise_opacity: NOISE_OPACITY,
            vignette_offset: VIGNETTE_OFFSET,
            vignette_darkness: VIGNETTE_DARKNESS,
            _pad: 0.0,
        }
    }
}

// One uniform buffer per stage: queued writes all land before the frame's
// encoder is submitted, so stages cannot share one.
struct StageUniforms {
    composite: wgpu::Buffer,
    blur_h: wgpu::Buffer,
    blur_v: wgpu::Buffer,
}

// Bind groups over the size-dependent targets; rebuilt on resize.
struct ChainBindings {
    hdr: wgpu::BindGroup,
    blur_h_src: wgpu::BindGroup,
    blur_v_src: wgpu::BindGroup,
    bloom: wgpu::BindGroup,
}

/// Bloom, noise and vignette: HDR → bright pass → blur h → blur v →
/// composite onto the swapchain.
pub(crate) struct PostChain {
    source_layout: wgpu::BindGroupLayout,
    bloom_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    uniforms: StageUniforms,
    bright: wgpu::RenderPipeline,
    blur: wgpu::RenderPipeline,
    composite: wgpu::RenderPipeline,
    bindings: ChainBindings,
}

fn sampled_texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn filtering_sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

fn texture_bind_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniforms: Option<&wgpu::Buffer>,
) -> wgpu::BindGroup {
    let mut entries = vec![
        wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::TextureView(view),
        },
        wgpu::BindGroupEntry {
            binding: 1,
            resource: wgpu::BindingResource::Sampler(sampler),
        },
    ];
    if let Some(buf) = uniforms {
        entries.push(wgpu::BindGroupEntry {
            binding: 2,
            resource: buf.as_entire_binding(),
        });
    }
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &entries,
    })
}

impl PostChain {
    pub(crate) fn new(
        device: &wgpu::Device,
        swap_format: wgpu::TextureFormat,
        targets: &RenderTargets,
    ) -> Self {
        let shader = helpers::shader_module(device, "post_shader", crate::core::POST_WGSL);
        let source_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_source_bgl"),
            entries: &[
                sampled_texture_entry(0),
                filtering_sampler_entry(1),
                helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let bloom_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bloom_bgl"),
            entries: &[sampled_texture_entry(0), filtering_sampler_entry(1)],
        });
        let single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("post_single_pl"),
            bind_group_layouts: &[&source_layout],
            push_constant_ranges: &[],
        });
        let with_bloom = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("post_composite_pl"),
            bind_group_layouts: &[&source_layout, &bloom_layout],
            push_constant_ranges: &[],
        });
        let bloom_target = helpers::color_target(BLOOM_FORMAT, None);
        let bright =
            helpers::fullscreen_pipeline(device, &single, &shader, "fs_bright", bloom_target.clone());
        let blur = helpers::fullscreen_pipeline(device, &single, &shader, "fs_blur", bloom_target);
        let composite = helpers::fullscreen_pipeline(
            device,
            &with_bloom,
            &shader,
            "fs_composite",
            helpers::color_target(swap_format, Some(wgpu::BlendState::REPLACE)),
        );

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("post_linear"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let uniforms = StageUniforms {
            composite: helpers::uniform_buffer::<PostUniforms>(device, "post_composite_u"),
            blur_h: helpers::uniform_buffer::<PostUniforms>(device, "post_blur_h_u"),
            blur_v: helpers::uniform_buffer::<PostUniforms>(device, "post_blur_v_u"),
        };
        let bindings =
            Self::bind_targets(device, &source_layout, &bloom_layout, &sampler, &uniforms, targets);

        Self {
            source_layout,
            bloom_layout,
            sampler,
            uniforms,
            bright,
            blur,
            composite,
            bindings,
        }
    }

    fn bind_targets(
        device: &wgpu::Device,
        source_layout: &wgpu::BindGroupLayout,
        bloom_layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        uniforms: &StageUniforms,
        targets: &RenderTargets,
    ) -> ChainBindings {
        ChainBindings {
            hdr: texture_bind_group(
                device,
                "post_hdr_bg",
                source_layout,
                &targets.hdr_view,
                sampler,
                Some(&uniforms.composite),
            ),
            blur_h_src: texture_bind_group(
                device,
                "post_blur_h_bg",
                source_layout,
                &targets.bloom_a_view,
                sampler,
                Some(&uniforms.blur_h),
            ),
            blur_v_src: texture_bind_group(
                device,
                "post_blur_v_bg",
                source_layout,
                &targets.bloom_b_view,
                sampler,
                Some(&uniforms.blur_v),
            ),
            bloom: texture_bind_group(
                device,
                "post_bloom_bg",
                bloom_layout,
                &targets.bloom_a_view,
                sampler,
                None,
            ),
        }
    }

    /// Point the chain at freshly recreated targets.
    pub(crate) fn rebind(&mut self, device: &wgpu::Device, targets: &RenderTargets) {
        self.bindings = Self::bind_targets(
            device,
            &self.source_layout,
            &self.bloom_layout,
            &self.sampler,
            &self.uniforms,
            targets,
        );
    }

    pub(crate) fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        resolution: [f32; 2],
        bloom_resolution: [f32; 2],
        time: f32,
    ) {
        let stages = [
            (&self.uniforms.composite, PostUniforms::new(resolution, time, [0.0, 0.0])),
            (&self.uniforms.blur_h, PostUniforms::new(bloom_resolution, time, [1.0, 0.0])),
            (&self.uniforms.blur_v, PostUniforms::new(bloom_resolution, time, [0.0, 1.0])),
        ];
        for (buffer, u) in stages {
            queue.write_buffer(buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    pub(crate) fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        output: &wgpu::TextureView,
    ) {
        let b = &self.bindings;
        fullscreen_pass(encoder, "bright_pass", &targets.bloom_a_view, &self.bright, &b.hdr, None);
        fullscreen_pass(encoder, "blur_h", &targets.bloom_b_view, &self.blur, &b.blur_h_src, None);
        fullscreen_pass(encoder, "blur_v", &targets.bloom_a_view, &self.blur, &b.blur_v_src, None);
        fullscreen_pass(
            encoder,
            "composite",
            output,
            &self.composite,
            &b.hdr,
            Some(&b.bloom),
        );
    }
}

fn fullscreen_pass(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    group0: &wgpu::BindGroup,
    group1: Option<&wgpu::BindGroup>,
) {
    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    pass.set_pipeline(pipeline);
    pass.set_bind_group(0, group0, &[]);
    if let Some(g) = group1 {
        pass.set_bind_group(1, g, &[]);
    }
    pass.draw(0..3, 0..1);
}
