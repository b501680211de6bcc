//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Full-color canvases encode
//! as 8-bit RGBA, monochrome canvases as 1-bit grayscale.

use crate::canvas::{Canvas, ColorMode};
use crate::error::Result;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for canvas output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!(
            "writing {}x{} {} canvas to {}",
            canvas.width(),
            canvas.height(),
            canvas.mode(),
            path.display()
        );

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::encode(canvas, &mut writer)?;
        writer.flush()?;

        Ok(())
    }

    /// Encode a canvas to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(canvas: &Canvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(canvas, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(canvas: &Canvas, out: W) -> Result<()> {
        let mut encoder = png::Encoder::new(out, canvas.width(), canvas.height());
        match canvas.mode() {
            ColorMode::FullColor => {
                encoder.set_color(png::ColorType::Rgba);
                encoder.set_depth(png::BitDepth::Eight);
            }
            ColorMode::Monochrome => {
                encoder.set_color(png::ColorType::Grayscale);
                encoder.set_depth(png::BitDepth::One);
            }
        }

        let mut writer = encoder.write_header()?;
        // Use compact pixels to handle stride padding
        writer.write_image_data(&canvas.to_compact_pixels())?;
        writer.finish()?;

        Ok(())
    }
}
