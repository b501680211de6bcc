//! Output encoders.

mod format;
mod png_encoder;

pub use format::ImageFormat;
pub use png_encoder::PngEncoder;
