use thiserror::Error;

/// Errors raised by grid construction, direct cell access, and random draws.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions {height}x{width} must both be positive")]
    InvalidDimensions { height: u32, width: u32 },
    #[error("empty random range: max {max} is less than min {min}")]
    InvalidRange { min: i64, max: i64 },
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: u32, col: u32 },
}
