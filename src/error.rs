use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResliceError {
    #[error("Shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid orientation: {0}")]
    InvalidOrientation(String),

    #[error("Invalid frozen axis {0}, expected 0, 1 or 2")]
    InvalidAxis(usize),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, ResliceError>;
