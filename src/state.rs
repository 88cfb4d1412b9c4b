use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, Surface, SurfaceConfiguration};

pub struct GpuContext {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub render_pipeline: RenderPipeline,
}

pub struct SceneBuffers {
    pub uniform_buffer: Buffer,
    pub uniform_bind_group: BindGroup,
    pub vertex: Buffer,
    pub index: Buffer,
    pub count: u32,
}
