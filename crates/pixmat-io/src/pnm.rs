//! PNM (Portable Any Map) format support
//!
//! Reads and writes PGM (P5 binary) and PPM (P6 binary) formats over
//! integer matrices. ASCII variants (P1/P2/P3) and PBM pixel decoding
//! (P4) are not supported; the header parser recognizes P4 but the
//! decoders refuse it.
//!
//! Grayscale images are a single [`IMat`]; color images are three planes
//! of identical shape ([`RgbPlanes`]), de-interleaved from the R,G,B byte
//! triples of the file. A [`Region`] restricts a read to a rectangular
//! sub-image; the remaining pixel bytes are still consumed in file order
//! since the format has no random access.

use crate::format::PnmFormat;
use crate::header::{PnmHeader, parse_pnm_header};
use crate::{IoError, IoResult};
use pixmat_core::IMat;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Comment written when the caller does not supply one
pub const DEFAULT_COMMENT: &str = "Generated by pixmat (https://github.com/pixmat/pixmat)";

/// Inclusive rectangular sub-region of an image
///
/// `r1..=r2` are the retained rows and `c1..=c2` the retained columns,
/// both within the image extent. Bounds are unsigned, so the negative
/// out-of-range case of signed APIs cannot be expressed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// First retained row
    pub r1: usize,
    /// Last retained row (inclusive)
    pub r2: usize,
    /// First retained column
    pub c1: usize,
    /// Last retained column (inclusive)
    pub c2: usize,
}

impl Region {
    /// Create a region from inclusive row and column bounds
    pub fn new(r1: usize, r2: usize, c1: usize, c2: usize) -> Self {
        Region { r1, r2, c1, c2 }
    }

    /// Number of retained rows (valid regions only)
    pub fn rows(&self) -> usize {
        self.r2 - self.r1 + 1
    }

    /// Number of retained columns (valid regions only)
    pub fn cols(&self) -> usize {
        self.c2 - self.c1 + 1
    }

    /// Check the region against an image extent
    fn validate(&self, height: usize, width: usize) -> IoResult<()> {
        if self.r1 > self.r2 || self.c1 > self.c2 || self.r2 >= height || self.c2 >= width {
            return Err(IoError::InvalidRegion(format!(
                "rows {}..={} cols {}..={} outside {}x{} image",
                self.r1, self.r2, self.c1, self.c2, height, width
            )));
        }
        Ok(())
    }
}

/// A color image as three same-shaped channel planes
#[derive(Debug, Clone, PartialEq)]
pub struct RgbPlanes {
    /// Red channel
    pub r: IMat,
    /// Green channel
    pub g: IMat,
    /// Blue channel
    pub b: IMat,
}

impl RgbPlanes {
    /// Assemble planes, checking that all three have the same shape
    pub fn new(r: IMat, g: IMat, b: IMat) -> IoResult<Self> {
        r.check_same_size(&g)?;
        r.check_same_size(&b)?;
        Ok(RgbPlanes { r, g, b })
    }

    /// Plane dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.r.dimensions()
    }
}

// ============================================================================
// Reading
// ============================================================================

/// Read an entire raw PGM (P5) file as an integer matrix
pub fn read_pgm<P: AsRef<Path>>(path: P) -> IoResult<IMat> {
    let (m, _) = read_pgm_stream(open_reader(path)?, None)?;
    Ok(m)
}

/// Read an entire raw PGM (P5) file, returning the header comments too
pub fn read_pgm_with_comments<P: AsRef<Path>>(path: P) -> IoResult<(IMat, String)> {
    read_pgm_stream(open_reader(path)?, None)
}

/// Read a rectangular sub-region of a raw PGM (P5) file
///
/// All pixel bytes of the file are still consumed in order; only the
/// `region.rows() x region.cols()` submatrix is returned.
pub fn read_pgm_region<P: AsRef<Path>>(path: P, region: Region) -> IoResult<IMat> {
    let (m, _) = read_pgm_stream(open_reader(path)?, Some(&region))?;
    Ok(m)
}

/// Read a raw PGM (P5) image from a reader
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P5` magic
/// * `region` - Optional sub-region; `None` reads the whole image
///
/// # Returns
/// The decoded matrix and the header comment text.
pub fn read_pgm_stream<R: BufRead>(
    mut reader: R,
    region: Option<&Region>,
) -> IoResult<(IMat, String)> {
    let header = parse_pnm_header(&mut reader)?;
    if header.format != PnmFormat::PgmBinary {
        return Err(IoError::UnsupportedFormat(format!(
            "expected raw PGM (P5), found P{}",
            header.format.code()
        )));
    }

    let m = decode_gray(&mut reader, &header, region)?;
    Ok((m, header.comments))
}

/// Read an entire raw PPM (P6) file as three channel planes
pub fn read_ppm<P: AsRef<Path>>(path: P) -> IoResult<RgbPlanes> {
    let (planes, _) = read_ppm_stream(open_reader(path)?, None)?;
    Ok(planes)
}

/// Read an entire raw PPM (P6) file, returning the header comments too
pub fn read_ppm_with_comments<P: AsRef<Path>>(path: P) -> IoResult<(RgbPlanes, String)> {
    read_ppm_stream(open_reader(path)?, None)
}

/// Read a rectangular sub-region of a raw PPM (P6) file
///
/// Region semantics match [`read_pgm_region`], applied to all three
/// channels in lockstep (three bytes per skipped pixel).
pub fn read_ppm_region<P: AsRef<Path>>(path: P, region: Region) -> IoResult<RgbPlanes> {
    let (planes, _) = read_ppm_stream(open_reader(path)?, Some(&region))?;
    Ok(planes)
}

/// Read a raw PPM (P6) image from a reader
pub fn read_ppm_stream<R: BufRead>(
    mut reader: R,
    region: Option<&Region>,
) -> IoResult<(RgbPlanes, String)> {
    let header = parse_pnm_header(&mut reader)?;
    if header.format != PnmFormat::PpmBinary {
        return Err(IoError::UnsupportedFormat(format!(
            "expected raw PPM (P6), found P{}",
            header.format.code()
        )));
    }

    let planes = decode_rgb(&mut reader, &header, region)?;
    Ok((planes, header.comments))
}

fn open_reader<P: AsRef<Path>>(path: P) -> IoResult<BufReader<File>> {
    Ok(BufReader::new(File::open(path).map_err(IoError::Io)?))
}

/// Fill `buf` with the next pixel bytes, mapping a short read to a
/// format error
fn read_pixel_row<R: Read>(reader: &mut R, buf: &mut [u8]) -> IoResult<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            IoError::InvalidData("truncated PNM pixel data".to_string())
        } else {
            IoError::Io(e)
        }
    })
}

fn decode_gray<R: BufRead>(
    reader: &mut R,
    header: &PnmHeader,
    region: Option<&Region>,
) -> IoResult<IMat> {
    let height = header.height as usize;
    let width = header.width as usize;
    if let Some(region) = region {
        region.validate(height, width)?;
    }

    let (out_rows, out_cols) = match region {
        Some(region) => (region.rows(), region.cols()),
        None => (height, width),
    };
    let mut m = IMat::new(out_rows, out_cols)?;
    let mut row_buffer = vec![0u8; width];

    for row in 0..height {
        read_pixel_row(reader, &mut row_buffer)?;

        let retained = match region {
            Some(region) => {
                if row < region.r1 || row > region.r2 {
                    continue;
                }
                (row - region.r1, &row_buffer[region.c1..=region.c2])
            }
            None => (row, &row_buffer[..]),
        };

        let (out_row, src) = retained;
        for (dst, &byte) in m.row_mut(out_row).iter_mut().zip(src) {
            *dst = byte as i32;
        }
    }

    Ok(m)
}

fn decode_rgb<R: BufRead>(
    reader: &mut R,
    header: &PnmHeader,
    region: Option<&Region>,
) -> IoResult<RgbPlanes> {
    let height = header.height as usize;
    let width = header.width as usize;
    if let Some(region) = region {
        region.validate(height, width)?;
    }

    let (out_rows, out_cols) = match region {
        Some(region) => (region.rows(), region.cols()),
        None => (height, width),
    };
    let mut r = IMat::new(out_rows, out_cols)?;
    let mut g = IMat::new(out_rows, out_cols)?;
    let mut b = IMat::new(out_rows, out_cols)?;
    let mut row_buffer = vec![0u8; width * 3];

    for row in 0..height {
        read_pixel_row(reader, &mut row_buffer)?;

        let (out_row, c1) = match region {
            Some(region) => {
                if row < region.r1 || row > region.r2 {
                    continue;
                }
                (row - region.r1, region.c1)
            }
            None => (row, 0),
        };

        for col in 0..out_cols {
            let base = (c1 + col) * 3;
            r.set_unchecked(out_row, col, row_buffer[base] as i32);
            g.set_unchecked(out_row, col, row_buffer[base + 1] as i32);
            b.set_unchecked(out_row, col, row_buffer[base + 2] as i32);
        }
    }

    Ok(RgbPlanes { r, g, b })
}

// ============================================================================
// Writing
// ============================================================================

/// Write an integer matrix as a raw PGM (P5) file with the default
/// attribution comment
pub fn write_pgm<P: AsRef<Path>>(path: P, m: &IMat) -> IoResult<()> {
    write_pgm_with_comments(path, m, DEFAULT_COMMENT)
}

/// Write an integer matrix as a raw PGM (P5) file
///
/// Samples are clamped to `[0, 255]` and written as one byte each.
pub fn write_pgm_with_comments<P: AsRef<Path>>(path: P, m: &IMat, comments: &str) -> IoResult<()> {
    let mut writer = create_writer(path)?;
    write_pgm_stream(&mut writer, m, comments)?;
    writer.flush().map_err(IoError::Io)
}

/// Write a raw PGM (P5) image to a writer
pub fn write_pgm_stream<W: Write>(mut writer: W, m: &IMat, comments: &str) -> IoResult<()> {
    write_header(&mut writer, PnmFormat::PgmBinary, m, 255, comments)?;

    let mut row_buffer = vec![0u8; m.cols()];
    for row in 0..m.rows() {
        for (dst, &val) in row_buffer.iter_mut().zip(m.row(row)) {
            *dst = clamp_sample(val);
        }
        writer.write_all(&row_buffer).map_err(IoError::Io)?;
    }

    Ok(())
}

/// Write three channel planes as a raw PPM (P6) file with the default
/// attribution comment and `max_val` 255
pub fn write_ppm<P: AsRef<Path>>(path: P, planes: &RgbPlanes) -> IoResult<()> {
    write_ppm_with_comments(path, planes, DEFAULT_COMMENT, 255)
}

/// Write three channel planes as a raw PPM (P6) file
///
/// `max_val` is only declared in the header; samples are always clamped
/// to `[0, 255]` and written as one byte each. All three planes must
/// have identical dimensions.
pub fn write_ppm_with_comments<P: AsRef<Path>>(
    path: P,
    planes: &RgbPlanes,
    comments: &str,
    max_val: u32,
) -> IoResult<()> {
    let mut writer = create_writer(path)?;
    write_ppm_stream(&mut writer, planes, comments, max_val)?;
    writer.flush().map_err(IoError::Io)
}

/// Write a raw PPM (P6) image to a writer
pub fn write_ppm_stream<W: Write>(
    mut writer: W,
    planes: &RgbPlanes,
    comments: &str,
    max_val: u32,
) -> IoResult<()> {
    planes.r.check_same_size(&planes.g)?;
    planes.r.check_same_size(&planes.b)?;

    write_header(&mut writer, PnmFormat::PpmBinary, &planes.r, max_val, comments)?;

    let cols = planes.r.cols();
    let mut row_buffer = vec![0u8; cols * 3];
    for row in 0..planes.r.rows() {
        let (rr, gr, br) = (planes.r.row(row), planes.g.row(row), planes.b.row(row));
        for col in 0..cols {
            let base = col * 3;
            row_buffer[base] = clamp_sample(rr[col]);
            row_buffer[base + 1] = clamp_sample(gr[col]);
            row_buffer[base + 2] = clamp_sample(br[col]);
        }
        writer.write_all(&row_buffer).map_err(IoError::Io)?;
    }

    Ok(())
}

fn create_writer<P: AsRef<Path>>(path: P) -> IoResult<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path).map_err(IoError::Io)?))
}

/// Clamp a sample to the one-byte range of the raw formats
fn clamp_sample(val: i32) -> u8 {
    val.clamp(0, 255) as u8
}

/// Write the header: magic line, comment lines, dimension line, max_val
/// line. The newline after max_val is the single whitespace byte the
/// parser expects before pixel data.
fn write_header<W: Write>(
    writer: &mut W,
    format: PnmFormat,
    m: &IMat,
    max_val: u32,
    comments: &str,
) -> IoResult<()> {
    writeln!(writer, "P{}", format.code()).map_err(IoError::Io)?;
    for line in comments.lines() {
        if line.starts_with('#') {
            writeln!(writer, "{line}").map_err(IoError::Io)?;
        } else {
            writeln!(writer, "#{line}").map_err(IoError::Io)?;
        }
    }
    writeln!(writer, "{} {}", m.cols(), m.rows()).map_err(IoError::Io)?;
    writeln!(writer, "{max_val}").map_err(IoError::Io)?;
    Ok(())
}
