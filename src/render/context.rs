//! Drawing context bound to a canvas.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::{CircleSpec, LineSegment, Point};

use super::primitives::{
    draw_circle, draw_disc, draw_line, draw_line_aa, draw_lines, draw_lines_aa, draw_pixel,
    draw_pixels, Drawable,
};

/// A drawing view over one [`Canvas`], obtained from [`Canvas::draw`].
///
/// The context holds a mutable borrow, not a copy: every call mutates the
/// canvas immediately, and the canvas cannot be touched elsewhere while the
/// context is alive. Batch calls are applied in order with no atomicity.
#[derive(Debug)]
pub struct RasterContext<'a> {
    canvas: &'a mut Canvas,
}

impl<'a> RasterContext<'a> {
    pub(crate) fn new(canvas: &'a mut Canvas) -> Self {
        Self { canvas }
    }

    /// The canvas being drawn on.
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        self.canvas
    }

    /// Draw a single pixel.
    pub fn pixel(&mut self, x: i32, y: i32, color: Color) {
        draw_pixel(self.canvas, x, y, color);
    }

    /// Draw each point in order.
    pub fn pixels(&mut self, points: &[Point], color: Color) {
        draw_pixels(self.canvas, points, color);
    }

    /// Draw a Bresenham line.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        draw_line(self.canvas, x1, y1, x2, y2, color);
    }

    /// Draw each segment in order as a Bresenham line.
    pub fn lines(&mut self, segments: &[LineSegment], color: Color) {
        draw_lines(self.canvas, segments, color);
    }

    /// Draw an anti-aliased line.
    pub fn line_aa(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        draw_line_aa(self.canvas, x1, y1, x2, y2, color);
    }

    /// Draw each segment in order as an anti-aliased line.
    pub fn lines_aa(&mut self, segments: &[LineSegment], color: Color) {
        draw_lines_aa(self.canvas, segments, color);
    }

    /// Draw a circle outline.
    pub fn circle(&mut self, x: i32, y: i32, radius: i32, color: Color) {
        draw_circle(self.canvas, x, y, radius, color);
    }

    /// Draw a filled disc.
    pub fn disc(&mut self, x: i32, y: i32, radius: i32, color: Color) {
        draw_disc(self.canvas, x, y, radius, color);
    }

    /// Draw a filled disc from a [`CircleSpec`].
    pub fn fill(&mut self, circle: CircleSpec, color: Color) {
        draw_disc(self.canvas, circle.cx, circle.cy, circle.radius, color);
    }

    /// Draw any [`Drawable`].
    pub fn shape<D: Drawable + ?Sized>(&mut self, shape: &D, color: Color) {
        shape.draw(self.canvas, color);
    }

    /// Draw any [`Drawable`] with anti-aliasing where it has it.
    pub fn shape_aa<D: Drawable + ?Sized>(&mut self, shape: &D, color: Color) {
        shape.draw_aa(self.canvas, color);
    }

    /// Draw a sequence of shapes in order.
    pub fn shapes<D: Drawable>(&mut self, shapes: &[D], color: Color) {
        for shape in shapes {
            shape.draw(self.canvas, color);
        }
    }
}
