//! # Trueno-Raster
//!
//! In-memory raster canvas with deterministic scan-conversion primitives.
//!
//! A [`Canvas`](canvas::Canvas) owns a pixel buffer in one of two storage
//! layouts (monochrome bits or full RGBA). A [`RasterContext`](render::RasterContext)
//! borrowed from it draws pixels, Bresenham lines, anti-aliased lines,
//! midpoint circles and filled discs. Finished canvases are encoded to PNG.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut canvas = Canvas::with_fill(ColorMode::Monochrome, 100, 100, Color::BLACK)?;
//! {
//!     let mut draw = canvas.draw();
//!     draw.line(0, 0, 99, 99, Color::WHITE);
//!     draw.circle(50, 50, 30, Color::WHITE);
//!     draw.disc(20, 80, 5, Color::WHITE);
//! }
//! assert_eq!(canvas.get_pixel(50, 50), Some(Color::WHITE));
//!
//! let png = PngEncoder::to_bytes(&canvas)?;
//! assert!(!png.is_empty());
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Out-of-range addresses
//!
//! Drawing clips silently: pixels outside the canvas are skipped.
//! [`Canvas::try_set_pixel`](canvas::Canvas::try_set_pixel) is the strict
//! alternative and reports [`Error::OutOfBounds`].
//!
//! ## Feature Flags
//!
//! - `cli`: build the `rasterize` demo binary
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Packed integer colors and blending.
pub mod color;

/// Canvas pixel buffer and color modes.
pub mod canvas;

/// Geometric inputs (points, segments, circles).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Scan conversion and the drawing context.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, ColorMode};
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{CircleSpec, LineSegment, Point};
    pub use crate::output::{ImageFormat, PngEncoder};
    pub use crate::render::{Drawable, RasterContext};
}
