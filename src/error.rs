use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimension { width: usize, height: usize },

    #[error("grid of {width}x{height} cells is too large to address")]
    TooLarge { width: usize, height: usize },

    #[error("fill rate must be within [0, 1], got {0}")]
    InvalidFillRate(f64),
}
