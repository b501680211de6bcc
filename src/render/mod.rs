//! Rasterization of geometric primitives.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer nearest-pixel line drawing
//! - **Parametric Anti-aliased Line**: per-sample coverage blending
//! - **Midpoint Circle**: 8-way symmetric outline
//! - **Disc**: bounding-box membership test
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a digital plotter."

mod context;
mod primitives;

pub use context::RasterContext;
pub use primitives::{
    draw_circle, draw_disc, draw_line, draw_line_aa, draw_lines, draw_lines_aa, draw_pixel,
    draw_pixels, Drawable,
};
