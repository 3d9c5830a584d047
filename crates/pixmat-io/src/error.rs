//! I/O error types
//!
//! Provides a unified error type for all PNM I/O operations. The parsing
//! and codec layers map their underlying failures into `IoError` variants
//! so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for PNM I/O operations.
///
/// Wraps standard I/O and core-library errors and adds format-level
/// failure modes (bad magic, malformed header, truncated pixel data,
/// out-of-range sub-region).
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PNM variant is not supported (ASCII formats, PBM pixel decode)
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The file data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// A requested sub-region lies outside the image extent
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// An error from the core library (e.g. mismatched plane dimensions)
    #[error("core error: {0}")]
    Core(#[from] pixmat_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
