use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::math::{Mat4, create, perspective};

/// Like [`perspective`], but rejects parameters that would produce a degenerate matrix.
pub fn try_perspective(
    matrix: &Mat4,
    fov_degrees: f64,
    aspect_ratio: f64,
    near: f64,
    far: f64,
) -> Result<Mat4, ProjectionError> {
    check_parameters(fov_degrees, aspect_ratio, near, far)?;
    Ok(perspective(matrix, fov_degrees, aspect_ratio, near, far))
}

fn check_parameters(
    fov_degrees: f64,
    aspect_ratio: f64,
    near: f64,
    far: f64,
) -> Result<(), ProjectionError> {
    let invalid = |reason: String| Err(ProjectionError::InvalidProjectionParameters(reason));

    if ![fov_degrees, aspect_ratio, near, far].iter().all(|v| v.is_finite()) {
        return invalid(format!(
            "parameters must be finite (fov={fov_degrees}, aspect={aspect_ratio}, near={near}, far={far})"
        ));
    }
    if fov_degrees <= 0.0 || fov_degrees >= 180.0 {
        return invalid(format!(
            "field of view must lie strictly between 0 and 180 degrees, got {fov_degrees}"
        ));
    }
    if aspect_ratio <= 0.0 {
        return invalid(format!("aspect ratio must be positive, got {aspect_ratio}"));
    }
    if near <= 0.0 {
        return invalid(format!("near plane must be positive, got {near}"));
    }
    if far <= near {
        return invalid(format!(
            "far plane ({far}) must lie beyond the near plane ({near})"
        ));
    }
    Ok(())
}

/// Perspective parameters, loadable from JSON.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    pub fov_y_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn from_json(json: &str) -> Result<Self, ProjectionError> {
        let projection: Self = serde_json::from_str(json)?;
        projection.validate()?;
        Ok(projection)
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        check_parameters(self.fov_y_degrees, self.aspect, self.near, self.far)
    }

    /// The projection composed with the identity.
    pub fn matrix(&self) -> Mat4 {
        perspective(&create(), self.fov_y_degrees, self.aspect, self.near, self.far)
    }

    pub fn try_matrix(&self) -> Result<Mat4, ProjectionError> {
        try_perspective(&create(), self.fov_y_degrees, self.aspect, self.near, self.far)
    }

    /// Updates the aspect ratio from a viewport size. Zero-sized viewports (a
    /// minimized window) are ignored so the aspect never becomes 0 or infinite.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring zero-sized viewport {}x{}", width, height);
            return;
        }
        self.aspect = f64::from(width) / f64::from(height);
    }
}
