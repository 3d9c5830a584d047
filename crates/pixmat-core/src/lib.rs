//! pixmat Core - Matrix containers for image I/O
//!
//! This crate provides the numeric containers used throughout the pixmat
//! library:
//!
//! - [`Mat`] - Dense 2D matrix, generic over the element type
//! - [`IMat`] - Integer matrix (decoded image channels)
//! - [`DMat`] - Double-precision matrix (real-valued intensities)
//!
//! Decoded raster images are plain integer matrices in row-major order,
//! one matrix per channel, so downstream numeric pipelines can treat
//! pixels like any other sample data.

pub mod error;
pub mod mat;

pub use error::{Error, Result};
pub use mat::{DMat, IMat, Mat};
