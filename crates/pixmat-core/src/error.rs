//! Error types for pixmat-core
//!
//! Provides a unified error type for all operations on the matrix
//! containers. Each variant captures enough context for diagnostics
//! without exposing internal implementation details.

use thiserror::Error;

/// pixmat-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid matrix dimensions
    #[error("invalid matrix dimensions: {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Incompatible matrix sizes
    #[error("incompatible matrix sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(usize, usize, usize, usize),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pixmat-core operations
pub type Result<T> = std::result::Result<T, Error>;
