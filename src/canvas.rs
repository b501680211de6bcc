//! In-memory raster canvas.
//!
//! A [`Canvas`] exclusively owns its pixel buffer. The [`ColorMode`] chosen at
//! creation only decides how that buffer is laid out:
//!
//! - [`ColorMode::FullColor`]: 4 bytes per pixel `[R, G, B, A]`, rows padded
//!   to a 64-byte aligned stride.
//! - [`ColorMode::Monochrome`]: 1 bit per pixel, most significant bit first,
//!   rows padded to a whole byte. This is the 1-bit grayscale PNG layout, so
//!   the encoder can hand the rows over unchanged.
//!
//! Drawing semantics are identical in both modes. Monochrome writes quantize
//! the color by luma.
//!
//! # Addressing
//!
//! [`Canvas::get_pixel`] returns `None` and [`Canvas::set_pixel`] does nothing
//! outside `[0, width) × [0, height)`. [`Canvas::try_set_pixel`] reports the
//! same condition as [`Error::OutOfBounds`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::output::{ImageFormat, PngEncoder};
use crate::render::RasterContext;

/// Row alignment for full-color storage (64 bytes, one cache line).
const ROW_ALIGNMENT: usize = 64;

/// Luma at or above which a monochrome write stores white.
const MONO_THRESHOLD: f32 = 128.0;

/// Storage layout of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Two colors, black and white, packed 8 pixels per byte.
    Monochrome,
    /// Full RGBA color, 4 bytes per pixel.
    FullColor,
}

impl ColorMode {
    /// Bytes needed for one row of `width` pixels, before alignment padding.
    #[must_use]
    pub const fn row_bytes(self, width: u32) -> usize {
        match self {
            Self::Monochrome => (width as usize).div_ceil(8),
            Self::FullColor => (width as usize) * 4,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::FullColor => "fullcolor",
        }
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monochrome" | "mono" | "binary" => Ok(Self::Monochrome),
            "fullcolor" | "full-color" | "full_color" | "rgb" | "rgba" => Ok(Self::FullColor),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed-size pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Storage layout.
    mode: ColorMode,
    /// Row-major pixel storage, `stride` bytes per row.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Canvas {
    /// Create a new canvas with every pixel opaque black.
    ///
    /// Both modes start out reading [`Color::BLACK`], so anti-aliased drawing
    /// on a fresh full-color canvas stays opaque.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::canvas::{Canvas, ColorMode};
    ///
    /// let canvas = Canvas::new(ColorMode::FullColor, 800, 600).unwrap();
    /// assert_eq!(canvas.width(), 800);
    /// assert_eq!(canvas.height(), 600);
    /// ```
    pub fn new(mode: ColorMode, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = mode.row_bytes(width);
        let stride = match mode {
            ColorMode::FullColor => (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1),
            ColorMode::Monochrome => row_bytes,
        };
        let pixels = vec![0; stride * (height as usize)];

        debug!("allocated {mode} canvas {width}x{height} ({} bytes)", pixels.len());

        let mut canvas = Self {
            width,
            height,
            mode,
            pixels,
            stride,
        };
        // All-zero bits are already black in monochrome
        if mode == ColorMode::FullColor {
            canvas.clear(Color::BLACK);
        }
        Ok(canvas)
    }

    /// Create a new canvas and set every pixel to `fill`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::canvas::{Canvas, ColorMode};
    /// use trueno_raster::color::Color;
    ///
    /// let canvas = Canvas::with_fill(ColorMode::FullColor, 4, 4, Color::RED).unwrap();
    /// assert_eq!(canvas.get_pixel(3, 3), Some(Color::RED));
    /// ```
    pub fn with_fill(mode: ColorMode, width: u32, height: u32, fill: Color) -> Result<Self> {
        let mut canvas = Self::new(mode, width, height)?;
        canvas.clear(fill);
        Ok(canvas)
    }

    /// Create a canvas from a textual mode name such as `"rgb"` or `"binary"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] for an unrecognized name, or an error if
    /// width or height is zero.
    pub fn from_mode_name(mode: &str, width: u32, height: u32) -> Result<Self> {
        Self::new(mode.parse()?, width, height)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the storage layout.
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw storage, including stride padding.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get one row of raw storage without padding.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        Some(&self.pixels[start..start + self.mode.row_bytes(self.width)])
    }

    /// Whether a signed pixel address lies on the canvas.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Set every pixel to `color`.
    pub fn clear(&mut self, color: Color) {
        let row_bytes = self.mode.row_bytes(self.width);

        match self.mode {
            ColorMode::FullColor => {
                let [r, g, b, a] = color.to_array();
                for y in 0..self.height as usize {
                    let start = y * self.stride;
                    for chunk in self.pixels[start..start + row_bytes].chunks_exact_mut(4) {
                        chunk.copy_from_slice(&[r, g, b, a]);
                    }
                }
            }
            ColorMode::Monochrome => {
                let fill = if is_white(color) { 0xFF } else { 0x00 };
                // Padding bits past the last column stay zero.
                let tail_bits = self.width % 8;
                let tail_mask = if tail_bits == 0 { 0xFF } else { 0xFFu8 << (8 - tail_bits) };
                for y in 0..self.height as usize {
                    let row = &mut self.pixels[y * self.stride..y * self.stride + row_bytes];
                    row.fill(fill);
                    if let Some(last) = row.last_mut() {
                        *last &= tail_mask;
                    }
                }
            }
        }
    }

    /// Get the color at a pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let row = (y as usize) * self.stride;
        Some(match self.mode {
            ColorMode::FullColor => {
                let idx = row + (x as usize) * 4;
                Color::from_array([
                    self.pixels[idx],
                    self.pixels[idx + 1],
                    self.pixels[idx + 2],
                    self.pixels[idx + 3],
                ])
            }
            ColorMode::Monochrome => {
                let byte = self.pixels[row + (x as usize) / 8];
                if byte & bit_mask(x) == 0 {
                    Color::BLACK
                } else {
                    Color::WHITE
                }
            }
        })
    }

    /// Set the color at a pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }

        let row = (y as usize) * self.stride;
        match self.mode {
            ColorMode::FullColor => {
                let idx = row + (x as usize) * 4;
                self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
            }
            ColorMode::Monochrome => {
                let byte = &mut self.pixels[row + (x as usize) / 8];
                if is_white(color) {
                    *byte |= bit_mask(x);
                } else {
                    *byte &= !bit_mask(x);
                }
            }
        }
    }

    /// Set a pixel, failing instead of ignoring an address off the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` is outside the canvas.
    pub fn try_set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds {
                x: i64::from(x),
                y: i64::from(y),
                width: self.width,
                height: self.height,
            });
        }
        self.set_pixel(x as u32, y as u32, color);
        Ok(())
    }

    /// Bind a drawing context to this canvas.
    ///
    /// The context borrows the canvas mutably for its lifetime; it never
    /// owns or copies the buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::canvas::{Canvas, ColorMode};
    /// use trueno_raster::color::Color;
    ///
    /// let mut canvas = Canvas::new(ColorMode::FullColor, 10, 10).unwrap();
    /// canvas.draw().line(0, 0, 9, 9, Color::WHITE);
    /// assert_eq!(canvas.get_pixel(5, 5), Some(Color::WHITE));
    /// ```
    pub fn draw(&mut self) -> RasterContext<'_> {
        RasterContext::new(self)
    }

    /// Get pixel data without stride padding.
    ///
    /// Full color yields tightly packed RGBA rows; monochrome yields 1-bit
    /// rows padded to a byte, as PNG expects.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = self.mode.row_bytes(self.width);

        if self.stride == row_bytes {
            return self.pixels.clone();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height as usize {
            let start = y * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }

    /// Encode the canvas and write it to `path`.
    ///
    /// `format` is an identifier such as `"png"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for an unknown format, or the
    /// I/O or encoding error from the encoder. The canvas is left untouched
    /// either way, so the call can be retried.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: &str) -> Result<()> {
        match format.parse::<ImageFormat>()? {
            ImageFormat::Png => PngEncoder::write_to_file(self, path),
        }
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("mode", &self.mode)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}

#[inline]
fn bit_mask(x: u32) -> u8 {
    0x80 >> (x % 8)
}

#[inline]
fn is_white(color: Color) -> bool {
    color.luma() >= MONO_THRESHOLD
}
