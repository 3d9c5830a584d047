//! PNM format detection
//!
//! Classifies PNM files by examining the two-byte magic number at the
//! start of the file.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for PNM format detection
mod magic {
    /// PBM ASCII: "P1"
    pub const PBM_ASCII: &[u8] = b"P1";

    /// PGM ASCII: "P2"
    pub const PGM_ASCII: &[u8] = b"P2";

    /// PPM ASCII: "P3"
    pub const PPM_ASCII: &[u8] = b"P3";

    /// PBM binary: "P4"
    pub const PBM_BINARY: &[u8] = b"P4";

    /// PGM binary: "P5"
    pub const PGM_BINARY: &[u8] = b"P5";

    /// PPM binary: "P6"
    pub const PPM_BINARY: &[u8] = b"P6";
}

/// PNM format variant, identified by the magic digit
///
/// The raw (binary) variants P4/P5/P6 are the ones this library decodes;
/// the ASCII variants are recognized by the prober but not read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// P1: bilevel, ASCII
    PbmAscii,
    /// P2: grayscale, ASCII
    PgmAscii,
    /// P3: RGB color, ASCII
    PpmAscii,
    /// P4: bilevel, binary
    PbmBinary,
    /// P5: grayscale, binary
    PgmBinary,
    /// P6: RGB color, binary
    PpmBinary,
}

impl PnmFormat {
    /// Classify a two-byte magic sequence
    pub fn from_magic(magic_bytes: &[u8]) -> Option<Self> {
        if magic_bytes.len() < 2 {
            return None;
        }

        match &magic_bytes[..2] {
            m if m == magic::PBM_ASCII => Some(Self::PbmAscii),
            m if m == magic::PGM_ASCII => Some(Self::PgmAscii),
            m if m == magic::PPM_ASCII => Some(Self::PpmAscii),
            m if m == magic::PBM_BINARY => Some(Self::PbmBinary),
            m if m == magic::PGM_BINARY => Some(Self::PgmBinary),
            m if m == magic::PPM_BINARY => Some(Self::PpmBinary),
            _ => None,
        }
    }

    /// Look up the format for a magic digit character ('1'..'6')
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(Self::PbmAscii),
            '2' => Some(Self::PgmAscii),
            '3' => Some(Self::PpmAscii),
            '4' => Some(Self::PbmBinary),
            '5' => Some(Self::PgmBinary),
            '6' => Some(Self::PpmBinary),
            _ => None,
        }
    }

    /// The magic digit character ('1'..'6')
    pub fn code(&self) -> char {
        match self {
            Self::PbmAscii => '1',
            Self::PgmAscii => '2',
            Self::PpmAscii => '3',
            Self::PbmBinary => '4',
            Self::PgmBinary => '5',
            Self::PpmBinary => '6',
        }
    }

    /// Whether this is a raw (binary) variant
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::PbmBinary | Self::PgmBinary | Self::PpmBinary)
    }

    /// Samples per pixel (1 for bilevel/grayscale, 3 for RGB)
    pub fn samples_per_pixel(&self) -> usize {
        match self {
            Self::PpmAscii | Self::PpmBinary => 3,
            _ => 1,
        }
    }
}

/// Detect the PNM format of a file
///
/// Opens the file, reads the two-byte magic, and closes it again. Any
/// failure (missing file, short file, unrecognized magic) is an error;
/// no distinction is made between the causes beyond the error context.
pub fn detect_pnm_format<P: AsRef<Path>>(path: P) -> IoResult<PnmFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 2];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_pnm_format_from_bytes(&header[..bytes_read])
}

/// Detect the PNM format from bytes
pub fn detect_pnm_format_from_bytes(data: &[u8]) -> IoResult<PnmFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    PnmFormat::from_magic(data)
        .ok_or_else(|| IoError::InvalidData("not a PNM file".to_string()))
}
