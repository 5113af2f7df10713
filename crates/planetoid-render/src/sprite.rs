//! Alpha-blended sprite drawing: one textured quad per raster image.

use bytemuck::{Pod, Zeroable};
use planetoid_sprite::RasterImage;
use planetoid_sprite::composite::centered_origin;

/// Vertex of a screen-space sprite quad.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    /// Position in normalized device coordinates.
    pub position: [f32; 2],
    /// Texture coordinate; `v = 0` is the first uploaded (bottom) row.
    pub uv: [f32; 2],
}

impl SpriteVertex {
    /// Vertex buffer layout matching [`SPRITE_SHADER_SOURCE`].
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        use wgpu::{VertexAttribute, VertexFormat};

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x2,
                },
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Two triangles covering a `sprite_size` square centred in the window.
///
/// The placement snaps to whole pixels the same way the CPU compositor does,
/// so exported frames and the window agree.
pub fn sprite_quad(window: (u32, u32), sprite_size: u32) -> [SpriteVertex; 6] {
    let (width, height) = (window.0.max(1) as f32, window.1.max(1) as f32);
    let (left, top) = centered_origin(window, (sprite_size, sprite_size));
    let (left, top) = (left as f32, top as f32);
    let size = sprite_size as f32;

    let x0 = left / width * 2.0 - 1.0;
    let x1 = (left + size) / width * 2.0 - 1.0;
    let y_top = 1.0 - top / height * 2.0;
    let y_bottom = 1.0 - (top + size) / height * 2.0;

    let bottom_left = SpriteVertex {
        position: [x0, y_bottom],
        uv: [0.0, 0.0],
    };
    let bottom_right = SpriteVertex {
        position: [x1, y_bottom],
        uv: [1.0, 0.0],
    };
    let top_right = SpriteVertex {
        position: [x1, y_top],
        uv: [1.0, 1.0],
    };
    let top_left = SpriteVertex {
        position: [x0, y_top],
        uv: [0.0, 1.0],
    };

    [
        bottom_left,
        bottom_right,
        top_right,
        bottom_left,
        top_right,
        top_left,
    ]
}

/// A GPU texture holding one sprite, plus its quad.
pub struct SpriteLayer {
    pub texture: wgpu::Texture,
    pub bind_group: wgpu::BindGroup,
    pub vertex_buffer: wgpu::Buffer,
    pub size: u32,
}

impl SpriteLayer {
    /// Allocate a `size × size` RGBA texture and its quad for `window`.
    pub fn new(
        device: &wgpu::Device,
        pipeline: &SpritePipeline,
        label: &str,
        size: u32,
        window: (u32, u32),
    ) -> Self {
        use wgpu::util::DeviceExt;

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: size.max(1),
                height: size.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label}-bind-group")),
            layout: &pipeline.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&pipeline.sampler),
                },
            ],
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-quad")),
            contents: bytemuck::cast_slice(&sprite_quad(window, size)),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            texture,
            bind_group,
            vertex_buffer,
            size,
        }
    }

    /// Replace the texture contents with `image`, flipped bottom-up.
    ///
    /// Images whose size differs from the layer are skipped with a warning.
    pub fn upload(&self, queue: &wgpu::Queue, image: &RasterImage) {
        if image.dimensions() != (self.size, self.size) {
            log::warn!(
                "Sprite upload skipped: image is {:?}, layer is {}",
                image.dimensions(),
                self.size
            );
            return;
        }

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.to_bottom_up(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.stride()),
                rows_per_image: None,
            },
            wgpu::Extent3d {
                width: self.size,
                height: self.size,
                depth_or_array_layers: 1,
            },
        );
    }

    /// Recentre the quad after a window resize.
    pub fn resize(&self, queue: &wgpu::Queue, window: (u32, u32)) {
        queue.write_buffer(
            &self.vertex_buffer,
            0,
            bytemuck::cast_slice(&sprite_quad(window, self.size)),
        );
    }

    /// Draw the quad with the currently bound pipeline.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..6, 0..1);
    }
}

/// Textured-quad pipeline blending with `SrcAlpha, OneMinusSrcAlpha`.
pub struct SpritePipeline {
    /// The underlying wgpu render pipeline.
    pub pipeline: wgpu::RenderPipeline,
    /// Texture + sampler layout (group 0).
    pub bind_group_layout: wgpu::BindGroupLayout,
    /// Nearest-neighbour sampler so sprite pixels stay crisp.
    pub sampler: wgpu::Sampler,
}

/// Blend state applying `SrcAlpha, OneMinusSrcAlpha` to colour and alpha alike.
pub const SPRITE_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    },
};

impl SpritePipeline {
    /// Create the sprite pipeline targeting `surface_format`.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite-shader"),
            source: wgpu::ShaderSource::Wgsl(SPRITE_SHADER_SOURCE.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sprite-bind-group-layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite-sampler"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite-pipeline-layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SpriteVertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(SPRITE_BLEND),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group_layout,
            sampler,
        }
    }
}

/// WGSL shader source for sprite quads.
pub const SPRITE_SHADER_SOURCE: &str = r#"
@group(0) @binding(0)
var t_sprite: texture_2d<f32>;
@group(0) @binding(1)
var s_sprite: sampler;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(in.position, 0.0, 1.0);
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(t_sprite, s_sprite, in.uv);
}
"#;
