use crate::config::AppConfig;
use crate::state::{GpuContext, SceneBuffers};
use crate::vertex::{SQUARE_INDICES, SQUARE_VERTICES, Vertex};
use crate::view::Camera;
use anyhow::Context;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

pub struct State {
    pub window: Arc<Window>,
    pub size: PhysicalSize<u32>,

    pub gpu: GpuContext,
    pub scene: SceneBuffers,
    pub camera: Camera,
    pub config: AppConfig,
    pub uniforms_dirty: bool,
}

impl State {
    pub async fn new(window: Arc<Window>, config: AppConfig) -> anyhow::Result<State> {
        let mut size = window.inner_size();

        #[cfg(target_arch = "wasm32")]
        {
            if size.width == 0 || size.height == 0 {
                size = winit::dpi::PhysicalSize::new(1920, 1080);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            size.width = size.width.max(1);
            size.height = size.height.max(1);
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            #[cfg(not(target_arch = "wasm32"))]
            backends: wgpu::Backends::PRIMARY,
            #[cfg(target_arch = "wasm32")]
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create a rendering surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable graphics adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: if cfg!(target_arch = "wasm32") {
                    wgpu::Limits::downlevel_webgl2_defaults()
                } else {
                    wgpu::Limits::default()
                },
                label: None,
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to open the graphics device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no supported formats")?;

        let present_mode = first_supported(&surface_caps.present_modes, "present modes")?;
        let alpha_mode = first_supported(&surface_caps.alpha_modes, "alpha modes")?;

        let config_surface = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config_surface);

        let mut camera = Camera::new(config.projection, config.offset);
        camera.resize(size.width, size.height);
        let uniforms = camera.uniforms();

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("uniform_bind_group_layout"),
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("uniform_bind_group"),
        });

        let shader = compile_shader(
            &device,
            "Square Shader",
            include_str!("../data/shaders/square.wgsl"),
        )
        .await?;

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Render Pipeline Layout"),
                bind_group_layouts: &[&uniform_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config_surface.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
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
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Square Vertex Buffer"),
            contents: bytemuck::cast_slice(SQUARE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Square Index Buffer"),
            contents: bytemuck::cast_slice(SQUARE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::info!(
            "Renderer ready: {}x{}, format {:?}, backend {:?}",
            size.width,
            size.height,
            surface_format,
            adapter.get_info().backend
        );

        let gpu = GpuContext {
            surface,
            device,
            queue,
            config: config_surface,
            render_pipeline,
        };

        let scene = SceneBuffers {
            uniform_buffer,
            uniform_bind_group,
            vertex,
            index,
            count: SQUARE_INDICES.len() as u32,
        };

        Ok(Self {
            window,
            size,
            gpu,
            scene,
            camera,
            config,
            uniforms_dirty: false,
        })
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

fn first_supported<T: Copy>(values: &[T], what: &str) -> anyhow::Result<T> {
    values
        .first()
        .copied()
        .with_context(|| format!("surface reports no {}", what))
}

/// Compiles WGSL source, turning validation failures into an error that carries
/// the compiler's diagnostic text.
async fn compile_shader(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> anyhow::Result<wgpu::ShaderModule> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    if let Some(error) = device.pop_error_scope().await {
        anyhow::bail!("{} failed to compile: {}", label, error);
    }

    log::debug!("Compiled {}", label);
    Ok(module)
}
