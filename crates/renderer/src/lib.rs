//! Renderer: wgpu init + depth + replay of the scene draw list.
//! wgpu = 0.26.x, winit = 0.30.x

use std::sync::Arc;

use corelib::{Frame, MeshKind, RenderMode};
use wgpu::{
    util::DeviceExt,
    BindGroup, BindGroupLayout, BindGroupLayoutDescriptor, BindGroupLayoutEntry, BindingType,
    BlendState, Buffer, BufferBindingType, BufferSize, BufferUsages, ColorTargetState,
    ColorWrites, CommandEncoderDescriptor, DepthBiasState, DepthStencilState, Device,
    DeviceDescriptor, Extent3d, Features, FragmentState, Instance, InstanceDescriptor, Limits,
    LoadOp, Operations, PipelineLayout, PipelineLayoutDescriptor, PowerPreference, PresentMode,
    PrimitiveTopology, Queue, RenderPassColorAttachment, RenderPassDescriptor, RenderPipeline,
    RenderPipelineDescriptor, ShaderModule, ShaderModuleDescriptor, ShaderSource, ShaderStages,
    StoreOp, Surface, SurfaceConfiguration, SurfaceError, TextureDescriptor, TextureDimension,
    TextureFormat, TextureUsages, TextureView, TextureViewDescriptor, VertexState,
};
use winit::{dpi::PhysicalSize, window::Window};

pub mod error;
pub mod mesh;
pub mod uniforms;

pub use error::{RendererError, RendererResult};

use mesh::GpuMesh;
use uniforms::{DRAW_UNIFORM_SIZE, FrameUniform, Vertex};

const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;
/// Draw slots allocated up front; the buffer doubles when a frame needs more.
const INITIAL_DRAW_CAPACITY: usize = 256;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.55,
    g: 0.72,
    b: 0.9,
    a: 1.0,
};

pub struct GpuState {
    // Surface
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,

    // Device/queue
    device: Device,
    queue: Queue,

    // Pipelines
    fill_pipeline: RenderPipeline,
    line_pipeline: RenderPipeline,

    // Geometry, indexed by `MeshKind::index()`
    meshes: Vec<GpuMesh>,

    // Per-frame uniforms
    frame_buf: Buffer,
    frame_bg: BindGroup,

    // Per-draw uniforms (dynamic offset)
    draw_bgl: BindGroupLayout,
    draw_buf: Buffer,
    draw_bg: BindGroup,
    draw_stride: u64,
    draw_capacity: usize,

    // Depth
    depth_view: TextureView,

    // Size cache
    width: u32,
    height: u32,
}

impl GpuState {
    /// Create GPU state bound to an Arc<Window>.
    pub async fn new(window: Arc<Window>, backends: wgpu::Backends) -> RendererResult<Self> {
        let PhysicalSize { width, height } = window.inner_size();
        let width = width.max(1);
        let height = height.max(1);

        // Instance & surface
        let instance = Instance::new(&InstanceDescriptor {
            backends,
            ..Default::default()
        });
        let surface: Surface<'static> = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        let info = adapter.get_info();
        log::info!("Adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&DeviceDescriptor {
                label: Some("Heliscene Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: Default::default(),
                trace: Default::default(),
            })
            .await?;

        // Surface format (prefer sRGB)
        let caps = surface.get_capabilities(&adapter);
        let surface_format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RendererError::NoSurfaceFormat)?;

        let surface_config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes.first().copied().unwrap_or_default(),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);
        log::info!("Surface configured: {:?} {}x{}", surface_format, width, height);

        let depth_view = create_depth_view(&device, &surface_config);

        // ==== Shaders ====
        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Scene WGSL"),
            source: ShaderSource::Wgsl(include_str!("shaders/scene.wgsl").into()),
        });

        // ==== Frame BGL/BG ====
        let frame_bgl = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Frame BGL"),
            entries: &[uniform_entry(
                ShaderStages::VERTEX_FRAGMENT,
                false,
                std::mem::size_of::<FrameUniform>() as u64,
            )],
        });
        let frame_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame UBO"),
            contents: bytemuck::bytes_of(&FrameUniform {
                projection: glam::Mat4::IDENTITY.to_cols_array_2d(),
                view: glam::Mat4::IDENTITY.to_cols_array_2d(),
                light_dir: [0.0, 1.0, 0.0, 0.0],
            }),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });
        let frame_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame BG"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buf.as_entire_binding(),
            }],
        });

        // ==== Draw BGL/BG ====
        let draw_bgl = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Draw BGL"),
            entries: &[uniform_entry(ShaderStages::VERTEX, true, DRAW_UNIFORM_SIZE)],
        });
        let draw_stride = uniforms::draw_stride(device.limits().min_uniform_buffer_offset_alignment);
        let (draw_buf, draw_bg) =
            create_draw_buffer(&device, &draw_bgl, draw_stride, INITIAL_DRAW_CAPACITY);

        // ==== Pipelines ====
        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Scene PipelineLayout"),
            bind_group_layouts: &[&frame_bgl, &draw_bgl],
            push_constant_ranges: &[],
        });
        let fill_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            surface_format,
            PrimitiveTopology::TriangleList,
            "fs_main",
        );
        let line_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            surface_format,
            PrimitiveTopology::LineList,
            "fs_flat",
        );

        // ==== Geometry ====
        let meshes = MeshKind::ALL
            .iter()
            .map(|&kind| GpuMesh::upload(&device, kind))
            .collect();

        Ok(Self {
            surface,
            surface_config,
            device,
            queue,
            fill_pipeline,
            line_pipeline,
            meshes,
            frame_buf,
            frame_bg,
            draw_bgl,
            draw_buf,
            draw_bg,
            draw_stride,
            draw_capacity: INITIAL_DRAW_CAPACITY,
            depth_view,
            width,
            height,
        })
    }

    /// Resize: reconfigure surface & recreate depth view.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.surface_config.width = self.width;
        self.surface_config.height = self.height;
        self.surface.configure(&self.device, &self.surface_config);
        self.depth_view = create_depth_view(&self.device, &self.surface_config);
    }

    /// Render one frame: upload uniforms, clear, replay the draw list.
    pub fn render(&mut self, frame: &Frame<'_>) -> Result<(), SurfaceError> {
        self.ensure_draw_capacity(frame.draws.len());

        // Uniforms first, so the pass below sees this frame's camera.
        self.queue.write_buffer(
            &self.frame_buf,
            0,
            bytemuck::bytes_of(&FrameUniform::from(frame)),
        );
        if !frame.draws.is_empty() {
            let packed = uniforms::pack_draws(frame.draws, self.draw_stride);
            self.queue.write_buffer(&self.draw_buf, 0, &packed);
        }

        let target = self.surface.get_current_texture()?;
        let view = target.texture.create_view(&Default::default());

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("MainEncoder"),
            });

        {
            let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("ScenePass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None, // required in 0.26
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(CLEAR_COLOR),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(Operations {
                        load: LoadOp::Clear(1.0),
                        store: StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            rpass.set_pipeline(match frame.mode {
                RenderMode::Filled => &self.fill_pipeline,
                RenderMode::Wireframe => &self.line_pipeline,
            });
            rpass.set_bind_group(0, &self.frame_bg, &[]);

            for (slot, cmd) in frame.draws.iter().enumerate() {
                let offset = (slot as u64 * self.draw_stride) as u32;
                rpass.set_bind_group(1, &self.draw_bg, &[offset]);
                let count = self.meshes[cmd.mesh.index()].bind(&mut rpass, frame.mode);
                rpass.draw_indexed(0..count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        target.present();
        Ok(())
    }

    pub fn is_surface_lost(err: &SurfaceError) -> bool {
        matches!(err, SurfaceError::Lost | SurfaceError::Outdated)
    }

    pub fn recreate_surface(&mut self) {
        self.resize(self.width, self.height);
    }

    fn ensure_draw_capacity(&mut self, draws: usize) {
        if draws <= self.draw_capacity {
            return;
        }
        let capacity = draws.next_power_of_two();
        log::debug!("Growing draw uniforms: {} -> {} slots", self.draw_capacity, capacity);
        let (buf, bg) = create_draw_buffer(&self.device, &self.draw_bgl, self.draw_stride, capacity);
        self.draw_buf = buf;
        self.draw_bg = bg;
        self.draw_capacity = capacity;
    }
}

fn uniform_entry(visibility: ShaderStages, dynamic: bool, size: u64) -> BindGroupLayoutEntry {
    BindGroupLayoutEntry {
        binding: 0,
        visibility,
        ty: BindingType::Buffer {
            ty: BufferBindingType::Uniform,
            has_dynamic_offset: dynamic,
            min_binding_size: BufferSize::new(size),
        },
        count: None,
    }
}

fn create_draw_buffer(
    device: &Device,
    layout: &BindGroupLayout,
    stride: u64,
    capacity: usize,
) -> (Buffer, BindGroup) {
    let buf = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Draw UBO"),
        size: stride * capacity as u64,
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Draw BG"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &buf,
                offset: 0,
                size: BufferSize::new(DRAW_UNIFORM_SIZE),
            }),
        }],
    });
    (buf, bg)
}

fn create_pipeline(
    device: &Device,
    layout: &PipelineLayout,
    shader: &ShaderModule,
    format: TextureFormat,
    topology: PrimitiveTopology,
    fs_entry: &str,
) -> RenderPipeline {
    device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some(&format!("Scene {topology:?} Pipeline")),
        layout: Some(layout),
        vertex: VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::LAYOUT],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::REPLACE),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

/// Create a depth texture view matching the surface config.
fn create_depth_view(device: &Device, sc: &SurfaceConfiguration) -> TextureView {
    let tex = device.create_texture(&TextureDescriptor {
        label: Some("DepthTex"),
        size: Extent3d {
            width: sc.width.max(1),
            height: sc.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&TextureViewDescriptor::default())
}
