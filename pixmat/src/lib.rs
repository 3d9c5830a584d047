//! pixmat - PNM image I/O over plain integer matrices
//!
//! Reads and writes raster images in the raw binary PNM formats (PGM
//! grayscale "P5" and PPM color "P6"), treating images as plain integer
//! matrices so numeric and signal-processing pipelines can consume them
//! like any other sample data. A linear intensity scaler converts
//! between real-valued and integer matrices.
//!
//! # Example
//!
//! ```no_run
//! use pixmat::IMat;
//! use pixmat::io::{read_pgm, write_pgm};
//!
//! let mut m = IMat::new(64, 64).unwrap();
//! for r in 0..64 {
//!     for c in 0..64 {
//!         m.set(r, c, ((r + c) * 2) as i32).unwrap();
//!     }
//! }
//! write_pgm("ramp.pgm", &m).unwrap();
//! let back = read_pgm("ramp.pgm").unwrap();
//! assert_eq!(back, m);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixmat_core::*;

// Re-export the I/O crate as a module to avoid name conflicts
pub use pixmat_io as io;
