//! Error types for trueno-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while writing an encoded image.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Unrecognized color mode name.
    #[error("Invalid color mode: {0:?}")]
    InvalidMode(String),

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel address outside the canvas.
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        /// X coordinate.
        x: i64,
        /// Y coordinate.
        y: i64,
        /// Canvas width.
        width: u32,
        /// Canvas height.
        height: u32,
    },

    /// Image format identifier the encoder does not handle.
    #[error("Unsupported image format: {0:?}")]
    UnsupportedFormat(String),
}

impl Error {
    /// Whether this error came from the encoder boundary.
    ///
    /// Encoding failures are recoverable: the canvas is untouched and the
    /// caller may retry with another path or format.
    #[must_use]
    pub fn is_encoding_failure(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::PngEncoding(_) | Self::UnsupportedFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = Error::OutOfBounds {
            x: -1,
            y: 20,
            width: 10,
            height: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("-1"));
        assert!(msg.contains("10x10"));
    }

    #[test]
    fn test_encoding_failure_classification() {
        let io = Error::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(io.is_encoding_failure());
        assert!(Error::UnsupportedFormat("gif".into()).is_encoding_failure());
        assert!(!Error::InvalidMode("cmyk".into()).is_encoding_failure());
    }
}
