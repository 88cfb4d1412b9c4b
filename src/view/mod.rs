mod camera;
mod uniform;

pub use camera::Camera;
pub use uniform::Uniforms;
