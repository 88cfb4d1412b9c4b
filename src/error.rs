#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("a 4x4 matrix needs exactly 16 elements, got {len}")]
    InvalidLength { len: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("invalid projection parameters: {0}")]
    InvalidProjectionParameters(String),

    #[error("projection config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
