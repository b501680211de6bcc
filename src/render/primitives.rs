//! Primitive rendering functions.
//!
//! Implements scan conversion for pixels, lines, circles and discs. Every
//! function works in signed coordinates and clips silently: pixels that fall
//! outside the canvas are skipped, the rest of the shape is still drawn.
//! Arithmetic is widened to `i64` so extreme `i32` inputs cannot overflow.

use std::ops::RangeInclusive;

use log::trace;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::{CircleSpec, LineSegment, Point};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a canvas.
    fn draw(&self, canvas: &mut Canvas, color: Color);

    /// Draw this primitive with anti-aliasing if supported.
    fn draw_aa(&self, canvas: &mut Canvas, color: Color) {
        // Default to non-AA drawing
        self.draw(canvas, color);
    }
}

// ============================================================================
// Pixels
// ============================================================================

/// Draw a single pixel.
pub fn draw_pixel(canvas: &mut Canvas, x: i32, y: i32, color: Color) {
    plot(canvas, i64::from(x), i64::from(y), color);
}

/// Draw each point in order.
pub fn draw_pixels(canvas: &mut Canvas, points: &[Point], color: Color) {
    for p in points {
        draw_pixel(canvas, p.x, p.y, color);
    }
}

impl Drawable for Point {
    fn draw(&self, canvas: &mut Canvas, color: Color) {
        draw_pixel(canvas, self.x, self.y, color);
    }
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// Both endpoints are always drawn. The endpoints are put in `(x, y)` order
/// before stepping, so swapping them yields the same pixels.
///
/// The error term of the classic stepping loop is solved in closed form, so
/// each major-axis step is computed directly and only the steps over the
/// canvas are visited. Cost is bounded by the canvas size, not the length.
///
/// # Arguments
///
/// * `canvas` - Target canvas
/// * `x1`, `y1` - Origin coordinates
/// * `x2`, `y2` - Destination coordinates
/// * `color` - Line color
pub fn draw_line(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    let (x1, y1, x2, y2) = if (x2, y2) < (x1, y1) {
        (x2, y2, x1, y1)
    } else {
        (x1, y1, x2, y2)
    };
    let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };

    if dx == 0 && dy == 0 {
        plot(canvas, x1, y1, color);
        return;
    }

    if dx >= dy {
        for k in visible_steps(x1, sx, dx, canvas.width()) {
            plot(canvas, x1 + sx * k, y1 + sy * bresenham_offset(k, dx, dy), color);
        }
    } else {
        for k in visible_steps(y1, sy, dy, canvas.height()) {
            plot(canvas, x1 + sx * bresenham_offset(k, dy, dx), y1 + sy * k, color);
        }
    }
}

/// Draw each segment in order with [`draw_line`].
pub fn draw_lines(canvas: &mut Canvas, segments: &[LineSegment], color: Color) {
    for s in segments {
        draw_line(canvas, s.x1, s.y1, s.x2, s.y2, color);
    }
}

/// Draw an anti-aliased line by parametric stepping.
///
/// The segment is sampled `max(|dx|, |dy|) + 1` times. Each sample rounds to
/// the nearest pixel and blends the existing color toward `color` with
/// coverage `1 - max(|x - xi|, |y - yi|)`, the distance from the sample to
/// that pixel. This is a heuristic, not true area coverage.
///
/// Endpoints always land exactly on their pixels and receive `color`
/// unblended. A zero-length segment draws one pixel.
pub fn draw_line_aa(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    let dx = i64::from(x2) - i64::from(x1);
    let dy = i64::from(y2) - i64::from(y1);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        trace!("zero-length anti-aliased line at ({x1}, {y1}), drawing one pixel");
        draw_pixel(canvas, x1, y1, color);
        return;
    }

    let (ox, oy) = (f64::from(x1), f64::from(y1));
    let (fdx, fdy) = (dx as f64, dy as f64);

    // Sample i always lands on major coordinate start + i * sign
    let visible = if dx.abs() >= dy.abs() {
        visible_steps(i64::from(x1), dx.signum(), steps, canvas.width())
    } else {
        visible_steps(i64::from(y1), dy.signum(), steps, canvas.height())
    };

    for i in visible {
        // t is exactly 0.0 and 1.0 at the ends
        let t = i as f64 / steps as f64;
        let x = ox + fdx * t;
        let y = oy + fdy * t;

        let xi = round_half_up(x);
        let yi = round_half_up(y);
        let alpha = 1.0 - (x - xi).abs().max((y - yi).abs());

        plot_blended(canvas, xi as i64, yi as i64, color, alpha as f32);
    }
}

/// Draw each segment in order with [`draw_line_aa`].
pub fn draw_lines_aa(canvas: &mut Canvas, segments: &[LineSegment], color: Color) {
    for s in segments {
        draw_line_aa(canvas, s.x1, s.y1, s.x2, s.y2, color);
    }
}

impl Drawable for LineSegment {
    fn draw(&self, canvas: &mut Canvas, color: Color) {
        draw_line(canvas, self.x1, self.y1, self.x2, self.y2, color);
    }

    fn draw_aa(&self, canvas: &mut Canvas, color: Color) {
        draw_line_aa(canvas, self.x1, self.y1, self.x2, self.y2, color);
    }
}

// ============================================================================
// Circle/Disc Drawing
// ============================================================================

/// Draw a circle outline using the midpoint algorithm.
///
/// The four cardinal points are drawn first, then one octant is walked and
/// mirrored 8 ways. Radius 0 draws the center; a negative radius draws
/// nothing.
///
/// # Arguments
///
/// * `canvas` - Target canvas
/// * `x0`, `y0` - Center coordinates
/// * `radius` - Circle radius in pixels
/// * `color` - Outline color
pub fn draw_circle(canvas: &mut Canvas, x0: i32, y0: i32, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }

    let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(radius));

    plot(canvas, x0, y0 + r, color);
    plot(canvas, x0, y0 - r, color);
    plot(canvas, x0 + r, y0, color);
    plot(canvas, x0 - r, y0, color);

    let mut f = 1 - r;
    let mut ddf_x = 0;
    let mut ddf_y = -2 * r;
    let mut x = 0;
    let mut y = r;

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x + 1;

        // Plot 8 octant points
        plot(canvas, x0 + x, y0 + y, color);
        plot(canvas, x0 - x, y0 + y, color);
        plot(canvas, x0 + x, y0 - y, color);
        plot(canvas, x0 - x, y0 - y, color);
        plot(canvas, x0 + y, y0 + x, color);
        plot(canvas, x0 - y, y0 + x, color);
        plot(canvas, x0 + y, y0 - x, color);
        plot(canvas, x0 - y, y0 - x, color);
    }
}

/// Draw a filled disc.
///
/// Every offset `(i, j)` in the `[-radius, radius]` box with
/// `i² + j² <= radius²` is drawn, boundary included. A negative radius draws
/// nothing. Only the part of the box over the canvas is scanned.
pub fn draw_disc(canvas: &mut Canvas, x0: i32, y0: i32, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }

    let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(radius));
    let r2 = r * r;
    let (max_x, max_y) = (i64::from(canvas.width()) - 1, i64::from(canvas.height()) - 1);

    for i in (-r).max(-x0)..=r.min(max_x - x0) {
        for j in (-r).max(-y0)..=r.min(max_y - y0) {
            if i * i + j * j <= r2 {
                plot(canvas, x0 + i, y0 + j, color);
            }
        }
    }
}

impl Drawable for CircleSpec {
    fn draw(&self, canvas: &mut Canvas, color: Color) {
        draw_circle(canvas, self.cx, self.cy, self.radius, color);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Plot a pixel, skipping addresses off the canvas.
#[inline]
fn plot(canvas: &mut Canvas, x: i64, y: i64, color: Color) {
    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
        canvas.set_pixel(x, y, color);
    }
}

/// Plot a pixel blended toward `color` by `alpha` (for anti-aliased drawing).
#[inline]
fn plot_blended(canvas: &mut Canvas, x: i64, y: i64, color: Color, alpha: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if let Some(existing) = canvas.get_pixel(x, y) {
        canvas.set_pixel(x, y, Color::blend(existing, color, alpha));
    }
}

/// Step indices `k` in `0..=len` where `start + step * k` lies in `[0, extent)`.
///
/// `step` must be `1` or `-1`. The range is empty when the axis misses the
/// canvas.
#[inline]
fn visible_steps(start: i64, step: i64, len: i64, extent: u32) -> RangeInclusive<i64> {
    let last = i64::from(extent) - 1;
    let (lo, hi) = if step > 0 {
        (-start, last - start)
    } else {
        (start - last, start)
    };
    lo.max(0)..=hi.min(len)
}

/// Minor-axis offset of Bresenham's walk after `k` major steps.
///
/// Equals the number of minor steps the `err = major - minor` loop has taken,
/// ties included. Widened to `i128` since `2 * k * minor` can exceed `i64`.
#[inline]
fn bresenham_offset(k: i64, major: i64, minor: i64) -> i64 {
    let num = 2 * i128::from(k) * i128::from(minor) + i128::from(major) - 1;
    (num / (2 * i128::from(major))) as i64
}

/// Round to nearest, ties toward positive infinity.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

// ============================================================================
// Tests
// ============================================================================
