//! Binary PPM (`P6`) encoding and decoding.
//!
//! Layout: the ASCII header `"P6\n{width} {height} 255\n"` followed by
//! `width * height` R,G,B byte triples in row-major order. Alpha is dropped
//! on write and comes back as zero on read.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::error::{RasterError, Result};
use super::pixel_buffer::PixelBuffer;
use crate::math::Color;

pub const MAGIC: &[u8; 2] = b"P6";
pub const MAX_VALUE: u32 = 255;

/// Path reported by [`read_ppm`] read errors
pub const STREAM_PATH: &str = "<stream>";

/// Header line written in front of the pixel data
pub fn header(width: u32, height: u32) -> String {
    format!("P6\n{} {} {}\n", width, height, MAX_VALUE)
}

/// Encode `buffer` into `writer`. The writer is not flushed.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> io::Result<()> {
    writer.write_all(header(buffer.width(), buffer.height()).as_bytes())?;

    let mut row_bytes = Vec::with_capacity(buffer.width() as usize * 3);
    for row in buffer.rows() {
        row_bytes.clear();
        row_bytes.extend(row.iter().flat_map(|color| color.to_rgb()));
        writer.write_all(&row_bytes)?;
    }

    Ok(())
}

/// Write `buffer` to `path` as a binary PPM.
///
/// A failure after the file was created leaves the truncated file on disk.
pub fn save(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|source| RasterError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let write_err = |source| RasterError::Write {
        path: path.to_path_buf(),
        source,
    };

    write_ppm(buffer, &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!(
        "saved {}x{} image to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}

/// Decoded PPM contents
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PpmImage {
    pub width: u32,
    pub height: u32,
    /// Row-major R,G,B triples
    pub rgb: Vec<u8>,
}

impl PpmImage {
    pub fn rgb_at(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (x as usize + y as usize * self.width as usize) * 3;
        self.rgb.get(idx..idx + 3).map(|c| [c[0], c[1], c[2]])
    }

    /// Iterate pixel triples in row-major order
    pub fn triples(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.rgb.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Rebuild a pixel buffer, alpha set to zero
    pub fn into_buffer(self) -> Result<PixelBuffer> {
        let pixels = self
            .rgb
            .chunks_exact(3)
            .map(|c| Color::from_rgb(c[0], c[1], c[2]))
            .collect();
        PixelBuffer::from_pixels(self.width, self.height, pixels)
    }
}

/// Decode a binary PPM stream.
///
/// Header tokens may be separated by any whitespace and `#` comments may
/// appear between them. Exactly one whitespace byte separates the maxval
/// from the pixel data.
///
/// I/O failures come back as [`RasterError::Read`] against the path
/// `<stream>`; [`load`] substitutes the real file path.
pub fn read_ppm<R: BufRead>(reader: &mut R) -> Result<PpmImage> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic).map_err(read_error)?;
    if &magic != MAGIC {
        return Err(RasterError::Decode(format!(
            "expected magic P6, found {:?}",
            String::from_utf8_lossy(&magic)
        )));
    }

    let width = read_header_number(reader, "width")?;
    let height = read_header_number(reader, "height")?;
    let max_value = read_header_number(reader, "maxval")?;

    if width == 0 || height == 0 {
        return Err(RasterError::Decode(format!(
            "image dimensions {}x{} must be positive",
            width, height
        )));
    }
    if max_value != MAX_VALUE {
        return Err(RasterError::Decode(format!(
            "unsupported maxval {}, only {} is supported",
            max_value, MAX_VALUE
        )));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| RasterError::Decode(format!("image {}x{} too large", width, height)))?;

    let mut rgb = Vec::new();
    reader
        .take(len as u64)
        .read_to_end(&mut rgb)
        .map_err(read_error)?;
    if rgb.len() != len {
        return Err(RasterError::Decode(format!(
            "truncated pixel data: expected {} bytes, found {}",
            len,
            rgb.len()
        )));
    }

    debug!("decoded {}x{} PPM", width, height);
    Ok(PpmImage { width, height, rgb })
}

/// Read a PPM file from disk
pub fn load(path: impl AsRef<Path>) -> Result<PpmImage> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RasterError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(file);
    read_ppm(&mut reader).map_err(|err| attach_path(err, path.to_path_buf()))
}

fn attach_path(err: RasterError, path: PathBuf) -> RasterError {
    match err {
        RasterError::Decode(msg) => RasterError::Decode(format!("{}: {}", path.display(), msg)),
        RasterError::Read { source, .. } => RasterError::Read { path, source },
        other => other,
    }
}

/// Short input is malformed data, anything else is a failed read
fn read_error(source: io::Error) -> RasterError {
    if source.kind() == io::ErrorKind::UnexpectedEof {
        return RasterError::Decode("unexpected end of data".to_string());
    }
    RasterError::Read {
        path: PathBuf::from(STREAM_PATH),
        source,
    }
}

/// Parse one unsigned decimal header field, consuming the single whitespace
/// byte that terminates it.
fn read_header_number<R: BufRead>(reader: &mut R, field: &str) -> Result<u32> {
    let mut digits = String::new();

    loop {
        let byte = next_byte(reader)?
            .ok_or_else(|| RasterError::Decode(format!("unexpected end of header reading {}", field)))?;

        match byte {
            b'#' if digits.is_empty() => skip_comment(reader)?,
            b if b.is_ascii_whitespace() => {
                if !digits.is_empty() {
                    break;
                }
            }
            b if b.is_ascii_digit() => digits.push(b as char),
            other => {
                return Err(RasterError::Decode(format!(
                    "unexpected byte 0x{:02X} in {}",
                    other, field
                )))
            }
        }
    }

    digits
        .parse()
        .map_err(|_| RasterError::Decode(format!("{} {:?} out of range", field, digits)))
}

fn skip_comment<R: BufRead>(reader: &mut R) -> Result<()> {
    let mut discard = Vec::new();
    reader
        .read_until(b'\n', &mut discard)
        .map_err(read_error)?;
    Ok(())
}

fn next_byte<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    match reader.read(&mut byte) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(byte[0])),
        Err(e) => Err(read_error(e)),
    }
}
