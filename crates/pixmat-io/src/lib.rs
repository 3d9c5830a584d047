//! pixmat I/O - PNM image file I/O over integer matrices
//!
//! Reads and writes the raw binary PNM formats — PGM grayscale ("P5")
//! and PPM color ("P6") — converting between on-disk pixel bytes and
//! in-memory [`pixmat_core::IMat`] matrices, one matrix per channel.
//! Also provides linear intensity scaling between real-valued and
//! integer matrices.
//!
//! ASCII ("plain") PNM variants, PBM pixel decoding, and sample depths
//! beyond one byte are out of scope.
//!
//! # Example
//!
//! ```no_run
//! use pixmat_core::IMat;
//! use pixmat_io::{read_pgm, write_pgm};
//!
//! let m = IMat::new_with_value(64, 64, 128).unwrap();
//! write_pgm("flat.pgm", &m).unwrap();
//! let back = read_pgm("flat.pgm").unwrap();
//! assert_eq!(back, m);
//! ```

pub mod error;
pub mod format;
pub mod header;
pub mod pnm;
pub mod scale;

pub use error::{IoError, IoResult};
pub use format::{PnmFormat, detect_pnm_format, detect_pnm_format_from_bytes};
pub use header::{PnmHeader, parse_pnm_header, read_pnm_header};
pub use pnm::{
    DEFAULT_COMMENT, Region, RgbPlanes, read_pgm, read_pgm_region, read_pgm_stream,
    read_pgm_with_comments, read_ppm, read_ppm_region, read_ppm_stream, read_ppm_with_comments,
    write_pgm, write_pgm_stream, write_pgm_with_comments, write_ppm, write_ppm_stream,
    write_ppm_with_comments,
};
pub use scale::{scale_to_int, scale_to_real};
