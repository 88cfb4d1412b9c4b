#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

// Counter-clockwise, centred on the origin of model space.
pub const SQUARE_VERTICES: &[Vertex] = &[
    Vertex { position: [-1.0, -1.0, 0.0], color: [1.0, 0.0, 0.0, 1.0] },
    Vertex { position: [1.0, -1.0, 0.0], color: [0.0, 1.0, 0.0, 1.0] },
    Vertex { position: [1.0, 1.0, 0.0], color: [0.0, 0.0, 1.0, 1.0] },
    Vertex { position: [-1.0, 1.0, 0.0], color: [1.0, 1.0, 0.0, 1.0] },
];

pub const SQUARE_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];
