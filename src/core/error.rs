use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything the rasterizer core can fail with.
///
/// Geometry never produces an error: out-of-range shapes are clamped or
/// dropped by the rasterizer. Only buffer creation and file I/O fail.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid buffer dimensions {width}x{height}: both sides must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("cannot allocate a {width}x{height} pixel buffer")]
    Allocation { width: u32, height: u32 },

    #[error("could not open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed PPM data: {0}")]
    Decode(String),
}

impl RasterError {
    /// OS error code of the underlying I/O failure, if any
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Open { source, .. } | Self::Write { source, .. } | Self::Read { source, .. } => {
                source.raw_os_error()
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RasterError>;
