use crate::math::{Mat4, Projection, multiply};

/// Remaps clip-space depth from `[-w, w]` to `[0, w]`; wgpu clips `z / w` to `[0, 1]`.
#[rustfmt::skip]
const DEPTH_ZERO_TO_ONE: Mat4 = Mat4::new([
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
]);

/// Matrices as the vertex shader sees them: two column-major `mat4x4<f32>`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    projection: [[f32; 4]; 4],
    model_view: [[f32; 4]; 4],
}

impl Uniforms {
    pub fn new() -> Self {
        let identity = Mat4::identity().to_cols_array_2d();
        Self {
            projection: identity,
            model_view: identity,
        }
    }

    pub fn update(&mut self, projection: &Projection, model_view: &Mat4) {
        let projection = multiply(&DEPTH_ZERO_TO_ONE, &projection.matrix());
        self.projection = projection.to_cols_array_2d();
        self.model_view = model_view.to_cols_array_2d();
    }

    pub fn projection(&self) -> [[f32; 4]; 4] {
        self.projection
    }

    pub fn model_view(&self) -> [[f32; 4]; 4] {
        self.model_view
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new()
    }
}
