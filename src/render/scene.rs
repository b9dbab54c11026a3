use super::helpers;
use super::targets::{RenderTargets, HDR_FORMAT};
use super::SceneView;
use crate::constants::{AMBIENT_INTENSITY, ENVIRONMENT_STRENGTH, LIGHT_INTENSITY, LIGHT_POSITION};
use crate::core::{
    MeshVertex, ParticleField, SolidMesh, HEART_COLOR, HEART_METALNESS, HEART_ROUGHNESS,
    PARTICLE_ALPHA_TEST, PARTICLE_OPACITY, PARTICLE_SIZE,
};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    camera_right: [f32; 4],
    camera_up: [f32; 4],
    light: [f32; 4],      // xyz position, w intensity
    base_color: [f32; 4], // rgb, a unused
    material: [f32; 4],   // roughness, metalness, ambient, environment
    particle: [f32; 4],   // world size, opacity, alpha test, unused
}

impl SceneUniforms {
    fn from_view(view: &SceneView) -> Self {
        let cam = view.camera;
        let (right, up) = cam.basis();
        // Sprite size is given at unit focal length; scale by tan(fov/2) so
        // the world-space quad matches perspective point sprites.
        let sprite = PARTICLE_SIZE * (cam.fovy_radians * 0.5).tan();
        let [lx, ly, lz] = LIGHT_POSITION;
        let [r, g, b] = HEART_COLOR;
        Self {
            view_proj: cam.view_proj().to_cols_array_2d(),
            model: view.model.to_cols_array_2d(),
            normal_matrix: view.model.inverse().transpose().to_cols_array_2d(),
            camera_pos: cam.eye().extend(1.0).to_array(),
            camera_right: right.extend(0.0).to_array(),
            camera_up: up.extend(0.0).to_array(),
            light: [lx, ly, lz, LIGHT_INTENSITY],
            base_color: [r, g, b, 1.0],
            material: [
                HEART_ROUGHNESS,
                HEART_METALNESS,
                AMBIENT_INTENSITY,
                ENVIRONMENT_STRENGTH,
            ],
            particle: [sprite, PARTICLE_OPACITY, PARTICLE_ALPHA_TEST, 0.0],
        }
    }
}

// Two triangles covering a unit quad centred on the particle
const SPRITE_QUAD: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

/// Depth-tested HDR pass drawing the heart and the particle sprites.
pub(crate) struct ScenePass {
    solid_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    solid_vb: wgpu::Buffer,
    solid_vertices: u32,
    quad_vb: wgpu::Buffer,
    particle_vb: wgpu::Buffer,
    particles: u32,
}

impl ScenePass {
    pub(crate) fn new(device: &wgpu::Device, mesh: &SolidMesh, field: &ParticleField) -> Self {
        let shader = helpers::shader_module(device, "scene_shader", crate::core::SCENE_WGSL);
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let solid_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
        };
        let solid_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("solid_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_solid"),
                buffers: &[solid_layout],
                compilation_options: Default::default(),
            },
            // Double-sided; the shader flips normals on back faces
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(helpers::depth_test(true)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_solid"),
                targets: &[helpers::color_target(HDR_FORMAT, Some(wgpu::BlendState::REPLACE))],
                compilation_options: Default::default(),
            }),
            cache: None,
            multiview: None,
        });

        let particle_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x2],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![1 => Float32x3],
            },
        ];
        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_particle"),
                buffers: &particle_layouts,
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(helpers::depth_test(true)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_particle"),
                targets: &[helpers::color_target(
                    HDR_FORMAT,
                    Some(wgpu::BlendState::ALPHA_BLENDING),
                )],
                compilation_options: Default::default(),
            }),
            cache: None,
            multiview: None,
        });

        let uniforms = helpers::uniform_buffer::<SceneUniforms>(device, "scene_uniforms");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            }],
        });

        let vertex_buffer = |label: &str, bytes: &[u8]| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytes,
                usage: wgpu::BufferUsages::VERTEX,
            })
        };
        let centers = field.as_floats();
        Self {
            solid_pipeline,
            particle_pipeline,
            uniforms,
            bind_group,
            solid_vb: vertex_buffer("solid_vb", bytemuck::cast_slice(&mesh.vertices)),
            solid_vertices: mesh.vertices.len() as u32,
            quad_vb: vertex_buffer("sprite_quad_vb", bytemuck::cast_slice(&SPRITE_QUAD)),
            particle_vb: vertex_buffer("particle_vb", bytemuck::cast_slice(&centers)),
            particles: centers.len() as u32,
        }
    }

    pub(crate) fn vertex_count(&self) -> u32 {
        self.solid_vertices
    }

    pub(crate) fn particle_count(&self) -> u32 {
        self.particles
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, view: &SceneView) {
        let u = SceneUniforms::from_view(view);
        queue.write_buffer(&self.uniforms, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn encode(&self, encoder: &mut wgpu::CommandEncoder, targets: &RenderTargets) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &targets.hdr_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &targets.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_bind_group(0, &self.bind_group, &[]);

        if self.solid_vertices > 0 {
            pass.set_pipeline(&self.solid_pipeline);
            pass.set_vertex_buffer(0, self.solid_vb.slice(..));
            pass.draw(0..self.solid_vertices, 0..1);
        }
        if self.particles > 0 {
            pass.set_pipeline(&self.particle_pipeline);
            pass.set_vertex_buffer(0, self.quad_vb.slice(..));
            pass.set_vertex_buffer(1, self.particle_vb.slice(..));
            pass.draw(0..SPRITE_QUAD.len() as u32, 0..self.particles);
        }
    }
}
