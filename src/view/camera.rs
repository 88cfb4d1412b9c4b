use crate::math::{Mat4, Projection, Vec3, create, translate};
use crate::view::Uniforms;

/// CPU-side view state: a perspective projection plus the model-view that places
/// the scene in front of it.
#[derive(Debug, Clone)]
pub struct Camera {
    pub projection: Projection,
    origin: Vec3,
    model_view: Mat4,
}

impl Camera {
    pub fn new(projection: Projection, offset: Vec3) -> Self {
        let mut model_view = create();
        translate(&mut model_view, offset);
        Self {
            projection,
            origin: offset,
            model_view,
        }
    }

    pub fn model_view(&self) -> &Mat4 {
        &self.model_view
    }

    /// Moves the scene by `offset` on top of the current translation.
    pub fn nudge(&mut self, offset: Vec3) {
        translate(&mut self.model_view, offset);
        log::debug!("Model-view translation: {:?}", self.model_view.translation());
    }

    /// Restores the translation the camera was created with.
    pub fn reset(&mut self) {
        *self = Self::new(self.projection, self.origin);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.set_viewport(width, height);
    }

    pub fn uniforms(&self) -> Uniforms {
        let mut uniforms = Uniforms::new();
        uniforms.update(&self.projection, &self.model_view);
        uniforms
    }
}
