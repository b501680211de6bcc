//! Image format identifiers accepted by [`Canvas::save`](crate::canvas::Canvas::save).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An output format the crate can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics.
    Png,
}

impl ImageFormat {
    /// Conventional file extension.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    /// Parse an identifier such as `"png"`, `"PNG"` or `".png"`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('.').to_ascii_lowercase();
        match name.as_str() {
            "png" => Ok(Self::Png),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_png() {
        assert_eq!("png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!("PNG".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!(".png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_parse_unsupported() {
        let err = "jpg".parse::<ImageFormat>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref f) if f == "jpg"));
        assert!(err.is_encoding_failure());
    }
}
