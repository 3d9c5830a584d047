//! PNM header reading
//!
//! Provides metadata extraction from PNM files without decoding pixel
//! data, and the token scanner shared with the pixel decoders.
//!
//! The header grammar is the two-byte magic followed by three
//! whitespace-separated ASCII-decimal integers (width, height, max_val),
//! with `#` line comments allowed in any of the whitespace runs. Exactly
//! one whitespace byte separates the max_val token from the first pixel
//! byte; the parser consumes that terminator and nothing after it.

use crate::format::PnmFormat;
use crate::{IoError, IoResult};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// PNM metadata read without decoding pixel data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PnmHeader {
    /// Format variant (raw P4/P5/P6 only; ASCII variants fail to parse)
    pub format: PnmFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Declared maximum sample value (typically 255). The raw decoder
    /// always reads one byte per sample regardless of this field.
    pub max_val: u32,
    /// `#` comment lines found in the header, verbatim including the
    /// leading `#`, newline-joined
    pub comments: String,
}

/// Read PNM metadata from a file path without decoding pixel data
///
/// This is the only entry point that exposes header fields without also
/// reading pixels. The file is closed again before returning.
pub fn read_pnm_header<P: AsRef<Path>>(path: P) -> IoResult<PnmHeader> {
    let file = File::open(path).map_err(IoError::Io)?;
    let mut reader = BufReader::new(file);
    parse_pnm_header(&mut reader)
}

/// Parse a PNM header from a reader
///
/// On success the reader is left positioned at the first pixel byte.
///
/// # Errors
///
/// Fails if the magic is not P4/P5/P6 (the ASCII variants P1..P3 are
/// `UnsupportedFormat`), if any of the three header integers is missing
/// or non-numeric, or if the stream ends prematurely.
pub fn parse_pnm_header<R: BufRead>(reader: &mut R) -> IoResult<PnmHeader> {
    let mut magic_bytes = [0u8; 2];
    reader.read_exact(&mut magic_bytes).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            IoError::InvalidData("missing PNM magic number".to_string())
        } else {
            IoError::Io(e)
        }
    })?;

    let format = PnmFormat::from_magic(&magic_bytes)
        .ok_or_else(|| IoError::InvalidData("not a PNM file".to_string()))?;
    if !format.is_raw() {
        return Err(IoError::UnsupportedFormat(format!(
            "ASCII (plain) PNM is not supported: P{}",
            format.code()
        )));
    }

    let mut comments = String::new();
    let width = read_header_int(reader, &mut comments)?;
    let height = read_header_int(reader, &mut comments)?;
    let max_val = read_header_int(reader, &mut comments)?;

    Ok(PnmHeader {
        format,
        width,
        height,
        max_val,
        comments,
    })
}

/// Read a single byte, `None` at end of stream
fn read_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let mut buf = [0u8; 1];
    match reader.read(&mut buf) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(buf[0])),
        Err(e) => Err(IoError::Io(e)),
    }
}

/// Skip whitespace and `#` comment lines, returning the first other byte
///
/// Comment lines are appended to `comments` verbatim (leading `#` kept,
/// trailing newline dropped), separated by newlines.
fn skip_whitespace_and_comments<R: BufRead>(
    reader: &mut R,
    comments: &mut String,
) -> IoResult<u8> {
    loop {
        let byte = read_byte(reader)?.ok_or_else(|| {
            IoError::InvalidData("unexpected end of stream in PNM header".to_string())
        })?;

        if byte.is_ascii_whitespace() {
            continue;
        }

        if byte == b'#' {
            let mut line = String::from("#");
            loop {
                match read_byte(reader)? {
                    None | Some(b'\n') => break,
                    Some(b) => line.push(b as char),
                }
            }
            if !comments.is_empty() {
                comments.push('\n');
            }
            comments.push_str(&line);
            continue;
        }

        return Ok(byte);
    }
}

/// Read one ASCII-decimal header integer
///
/// Consumes exactly the whitespace byte that terminates the token (or
/// stops at end of stream), so after the last header field the reader
/// sits on the first pixel byte.
fn read_header_int<R: BufRead>(reader: &mut R, comments: &mut String) -> IoResult<u32> {
    let first = skip_whitespace_and_comments(reader, comments)?;
    if !first.is_ascii_digit() {
        return Err(IoError::InvalidData(format!(
            "expected decimal digit in PNM header, found '{}'",
            first as char
        )));
    }

    let mut value = (first - b'0') as u32;
    loop {
        match read_byte(reader)? {
            None => break,
            Some(b) if b.is_ascii_whitespace() => break,
            Some(b) if b.is_ascii_digit() => {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add((b - b'0') as u32))
                    .ok_or_else(|| {
                        IoError::InvalidData("PNM header value out of range".to_string())
                    })?;
            }
            Some(b) => {
                return Err(IoError::InvalidData(format!(
                    "invalid character '{}' in PNM header integer",
                    b as char
                )));
            }
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_basic_pgm_header() {
        let mut cursor = Cursor::new(b"P5\n10 20\n255\n".to_vec());
        let header = parse_pnm_header(&mut cursor).unwrap();

        assert_eq!(header.format, PnmFormat::PgmBinary);
        assert_eq!(header.width, 10);
        assert_eq!(header.height, 20);
        assert_eq!(header.max_val, 255);
        assert_eq!(header.comments, "");
    }

    #[test]
    fn test_parse_leaves_reader_at_first_pixel() {
        let mut cursor = Cursor::new(b"P5\n2 1\n255\n\x07\x09".to_vec());
        parse_pnm_header(&mut cursor).unwrap();

        // Exactly one whitespace byte after "255" was consumed
        let mut pixels = [0u8; 2];
        cursor.read_exact(&mut pixels).unwrap();
        assert_eq!(pixels, [0x07, 0x09]);
    }

    #[test]
    fn test_parse_comments_kept_verbatim() {
        let mut cursor = Cursor::new(b"P5\n# first\n10 10\n# second\n255\n".to_vec());
        let header = parse_pnm_header(&mut cursor).unwrap();

        assert_eq!(header.comments, "# first\n# second");
    }

    #[test]
    fn test_parse_comment_between_dimensions() {
        let mut cursor = Cursor::new(b"P6\n10\n#wedge\n20 255\n".to_vec());
        let header = parse_pnm_header(&mut cursor).unwrap();

        assert_eq!(header.format, PnmFormat::PpmBinary);
        assert_eq!(header.width, 10);
        assert_eq!(header.height, 20);
        assert_eq!(header.comments, "#wedge");
    }

    #[test]
    fn test_parse_pbm_magic_accepted() {
        // P4 is a valid magic even though pixel decode refuses it
        let mut cursor = Cursor::new(b"P4\n8 8\n1\n".to_vec());
        let header = parse_pnm_header(&mut cursor).unwrap();
        assert_eq!(header.format, PnmFormat::PbmBinary);
    }

    #[test]
    fn test_parse_ascii_magic_rejected() {
        let mut cursor = Cursor::new(b"P2\n10 10\n255\n".to_vec());
        assert!(matches!(
            parse_pnm_header(&mut cursor),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_bad_magic() {
        let mut cursor = Cursor::new(b"XY\n10 10\n255\n".to_vec());
        assert!(parse_pnm_header(&mut cursor).is_err());
    }

    #[test]
    fn test_parse_missing_max_val() {
        let mut cursor = Cursor::new(b"P5\n10 10\n".to_vec());
        assert!(matches!(
            parse_pnm_header(&mut cursor),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_parse_non_numeric_field() {
        let mut cursor = Cursor::new(b"P5\nten 10\n255\n".to_vec());
        assert!(matches!(
            parse_pnm_header(&mut cursor),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_parse_digits_glued_to_junk() {
        let mut cursor = Cursor::new(b"P5\n10x 10\n255\n".to_vec());
        assert!(parse_pnm_header(&mut cursor).is_err());
    }

    #[test]
    fn test_parse_empty_stream() {
        let mut cursor = Cursor::new(Vec::new());
        assert!(matches!(
            parse_pnm_header(&mut cursor),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_pnm_header_missing_file() {
        assert!(matches!(
            read_pnm_header("/nonexistent/image.pgm"),
            Err(IoError::Io(_))
        ));
    }
}
