//! Sprite render pipeline
//!
//! Draws screen-space textured quads. The quad is generated from the vertex
//! index in the shader; each draw carries its destination rectangle and
//! source UVs in a small uniform buffer that is rewritten in place every
//! frame.

use crate::sprite::SpriteTexture;
use bytemuck::{Pod, Zeroable};
use invaders_core::{Rect, Size};
use wgpu::util::DeviceExt;

/// Per-draw uniform data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteUniforms {
    /// Logical screen size in pixels
    pub screen_size: [f32; 2],
    pub _pad: [f32; 2],
    /// Destination x, y, width, height in logical pixels
    pub dst_rect: [f32; 4],
    /// Source u0, v0, u1, v1 normalised against the texture size
    pub uv_rect: [f32; 4],
}

impl SpriteUniforms {
    /// Build uniforms for blitting `src` (texture pixels) into `dst` (screen pixels)
    pub fn new(screen: Size, texture: Size, src: Rect, dst: Rect) -> Self {
        let tw = texture.width.max(1) as f32;
        let th = texture.height.max(1) as f32;

        Self {
            screen_size: [screen.width as f32, screen.height as f32],
            _pad: [0.0; 2],
            dst_rect: [
                dst.x as f32,
                dst.y as f32,
                dst.width as f32,
                dst.height as f32,
            ],
            uv_rect: [
                src.x as f32 / tw,
                src.y as f32 / th,
                src.right() as f32 / tw,
                src.bottom() as f32 / th,
            ],
        }
    }
}

/// The sprite rendering pipeline
pub struct SpritePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl SpritePipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("sprite_shader.wgsl").into()),
        });

        // Bind group 0: uniforms + texture + sampler
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
            label: Some("Sprite Bind Group Layout"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_sprite"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_sprite"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            // Draw order is the only layering
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group_layout,
        }
    }

    /// Create the uniform buffer and bind group for blitting `texture`
    pub fn create_draw(
        &self,
        device: &wgpu::Device,
        texture: &SpriteTexture,
        uniforms: &SpriteUniforms,
    ) -> SpriteDraw {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Uniform Buffer"),
            contents: bytemuck::cast_slice(&[*uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
            label: Some("Sprite Bind Group"),
        });

        SpriteDraw {
            uniform_buffer,
            bind_group,
        }
    }
}

/// GPU state for one blit: its uniform buffer and the bind group that ties
/// it to a texture
pub struct SpriteDraw {
    uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl SpriteDraw {
    /// Rewrite the uniforms for this frame's blit
    pub fn update(&self, queue: &wgpu::Queue, uniforms: &SpriteUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[*uniforms]));
    }
}
