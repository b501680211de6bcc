//! Property tests for the scan-conversion primitives.
//!
//! Each property is checked over randomly generated geometry on a canvas
//! large enough that nothing clips.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use trueno_raster::prelude::*;

const SIZE: u32 = 64;
const BACKGROUND: Color = Color::BLACK;

fn blank(mode: ColorMode) -> Canvas {
    Canvas::with_fill(mode, SIZE, SIZE, BACKGROUND).unwrap()
}

fn lit(canvas: &Canvas) -> BTreeSet<(u32, u32)> {
    let mut set = BTreeSet::new();
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.get_pixel(x, y) != Some(BACKGROUND) {
                set.insert((x, y));
            }
        }
    }
    set
}

/// Classic error-term Bresenham walk, clipped to the test canvas.
fn stepped_line(x1: i32, y1: i32, x2: i32, y2: i32) -> BTreeSet<(u32, u32)> {
    let ((x1, y1), (x2, y2)) = if (x2, y2) < (x1, y1) {
        ((x2, y2), (x1, y1))
    } else {
        ((x1, y1), (x2, y2))
    };
    let (dx, dy) = ((x2 - x1).abs(), (y2 - y1).abs());
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let (mut x, mut y, mut err) = (x1, y1, dx - dy);

    let mut set = BTreeSet::new();
    loop {
        if (0..SIZE as i32).contains(&x) && (0..SIZE as i32).contains(&y) {
            set.insert((x as u32, y as u32));
        }
        if x == x2 && y == y2 {
            return set;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

fn coord() -> impl Strategy<Value = i32> {
    0..SIZE as i32
}

fn any_color() -> impl Strategy<Value = Color> {
    any::<u32>().prop_map(Color::from_argb)
}

fn mode() -> impl Strategy<Value = ColorMode> {
    prop_oneof![Just(ColorMode::Monochrome), Just(ColorMode::FullColor)]
}

// ============================================================================
// Canvas
// ============================================================================

proptest! {
    #[test]
    fn prop_fill_sets_every_pixel(w in 1u32..80, h in 1u32..80, color in any_color()) {
        let canvas = Canvas::with_fill(ColorMode::FullColor, w, h, color).unwrap();
        for y in 0..h {
            for x in 0..w {
                prop_assert_eq!(canvas.get_pixel(x, y), Some(color));
            }
        }
    }

    #[test]
    fn prop_fill_monochrome(w in 1u32..80, h in 1u32..80, white in any::<bool>()) {
        let color = if white { Color::WHITE } else { Color::BLACK };
        let canvas = Canvas::with_fill(ColorMode::Monochrome, w, h, color).unwrap();
        for y in 0..h {
            for x in 0..w {
                prop_assert_eq!(canvas.get_pixel(x, y), Some(color));
            }
        }
    }

    #[test]
    fn prop_pixel_idempotent(m in mode(), x in coord(), y in coord(), color in any_color()) {
        let mut once = blank(m);
        once.draw().pixel(x, y, color);

        let mut twice = blank(m);
        {
            let mut draw = twice.draw();
            draw.pixel(x, y, color);
            draw.pixel(x, y, color);
        }

        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// Lines
// ============================================================================

proptest! {
    #[test]
    fn prop_line_direction_symmetric(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let mut forward = blank(ColorMode::Monochrome);
        forward.draw().line(x1, y1, x2, y2, Color::WHITE);

        let mut backward = blank(ColorMode::Monochrome);
        backward.draw().line(x2, y2, x1, y1, Color::WHITE);

        prop_assert_eq!(lit(&forward), lit(&backward));
    }

    #[test]
    fn prop_line_includes_endpoints_and_is_connected(
        x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()
    ) {
        let mut canvas = blank(ColorMode::FullColor);
        canvas.draw().line(x1, y1, x2, y2, Color::WHITE);
        let set = lit(&canvas);

        prop_assert!(set.contains(&(x1 as u32, y1 as u32)));
        prop_assert!(set.contains(&(x2 as u32, y2 as u32)));

        // One pixel per step along the major axis
        let major = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
        prop_assert_eq!(set.len(), major + 1);
    }

    #[test]
    fn prop_line_matches_stepping_when_clipped(
        x1 in -40i32..100, y1 in -40i32..100, x2 in -40i32..100, y2 in -40i32..100
    ) {
        let mut canvas = blank(ColorMode::Monochrome);
        canvas.draw().line(x1, y1, x2, y2, Color::WHITE);
        prop_assert_eq!(lit(&canvas), stepped_line(x1, y1, x2, y2));
    }

    #[test]
    fn prop_line_aa_endpoints_exact(
        x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
        background in any_color(), color in any_color()
    ) {
        let mut canvas = Canvas::with_fill(ColorMode::FullColor, SIZE, SIZE, background).unwrap();
        canvas.draw().line_aa(x1, y1, x2, y2, color);

        prop_assert_eq!(canvas.get_pixel(x1 as u32, y1 as u32), Some(color));
        prop_assert_eq!(canvas.get_pixel(x2 as u32, y2 as u32), Some(color));
    }

    #[test]
    fn prop_lines_batch_equals_sequence(
        segs in prop::collection::vec((coord(), coord(), coord(), coord()), 0..6)
    ) {
        let segments: Vec<LineSegment> = segs
            .iter()
            .map(|&(a, b, c, d)| LineSegment::new(a, b, c, d))
            .collect();

        let mut batch = blank(ColorMode::FullColor);
        batch.draw().lines_aa(&segments, Color::RED);

        let mut sequence = blank(ColorMode::FullColor);
        for s in &segments {
            sequence.draw().line_aa(s.x1, s.y1, s.x2, s.y2, Color::RED);
        }

        prop_assert_eq!(batch, sequence);
    }
}

// ============================================================================
// Circles and discs
// ============================================================================

proptest! {
    #[test]
    fn prop_circle_reflection_symmetric(r in 0i32..30) {
        let c = (SIZE / 2) as i32;
        let mut canvas = blank(ColorMode::Monochrome);
        canvas.draw().circle(c, c, r, Color::WHITE);

        let set = lit(&canvas);
        let c = c as u32;
        for &(x, y) in &set {
            prop_assert!(set.contains(&(2 * c - x, y)));
            prop_assert!(set.contains(&(x, 2 * c - y)));
        }
    }

    #[test]
    fn prop_circle_octant_is_gapless(r in 0i32..30) {
        let c = (SIZE / 2) as i32;
        let mut canvas = blank(ColorMode::Monochrome);
        canvas.draw().circle(c, c, r, Color::WHITE);

        // Offsets in the octant 0 <= i <= j, ordered along the arc
        let octant: BTreeSet<(i32, i32)> = lit(&canvas)
            .into_iter()
            .map(|(x, y)| (x as i32 - c, y as i32 - c))
            .filter(|&(i, j)| 0 <= i && i <= j)
            .collect();
        let octant: Vec<_> = octant.into_iter().collect();

        prop_assert!(!octant.is_empty());
        for pair in octant.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(
                (a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1,
                "gap between {:?} and {:?}", a, b
            );
        }
    }

    #[test]
    fn prop_circle_pixels_have_two_neighbours(r in 1i32..30) {
        let c = (SIZE / 2) as i32;
        let mut canvas = blank(ColorMode::FullColor);
        canvas.draw().circle(c, c, r, Color::WHITE);

        let set = lit(&canvas);
        for &(x, y) in &set {
            let neighbours = (-1i32..=1)
                .flat_map(|i| (-1i32..=1).map(move |j| (i, j)))
                .filter(|&d| d != (0, 0))
                .filter(|&(i, j)| set.contains(&((x as i32 + i) as u32, (y as i32 + j) as u32)))
                .count();
            prop_assert!(neighbours >= 2, "({}, {}) has {} neighbours", x, y, neighbours);
        }
    }

    #[test]
    fn prop_disc_matches_membership(r in 0i32..30) {
        let c = (SIZE / 2) as i32;
        let mut canvas = blank(ColorMode::FullColor);
        canvas.draw().disc(c, c, r, Color::WHITE);

        let mut expected = BTreeSet::new();
        for i in -r..=r {
            for j in -r..=r {
                if i * i + j * j <= r * r {
                    expected.insert(((c + i) as u32, (c + j) as u32));
                }
            }
        }

        prop_assert_eq!(lit(&canvas), expected);
    }
}

// ============================================================================
// Fixed cases
// ============================================================================

#[test]
fn line_diagonal_exact() {
    let mut canvas = blank(ColorMode::Monochrome);
    canvas.draw().line(0, 0, 3, 3, Color::WHITE);
    let expected: BTreeSet<_> = [(0, 0), (1, 1), (2, 2), (3, 3)].into_iter().collect();
    assert_eq!(lit(&canvas), expected);
}

#[test]
fn line_shallow_exact() {
    let mut canvas = blank(ColorMode::Monochrome);
    canvas.draw().line(0, 0, 4, 1, Color::WHITE);
    let expected: BTreeSet<_> = [(0, 0), (1, 0), (2, 0), (3, 1), (4, 1)].into_iter().collect();
    assert_eq!(lit(&canvas), expected);
}

#[test]
fn disc_radius_two_has_thirteen_pixels() {
    let mut canvas = blank(ColorMode::Monochrome);
    canvas.draw().disc(10, 10, 2, Color::WHITE);
    assert_eq!(lit(&canvas).len(), 13);
}

#[test]
fn empty_batches_are_noops() {
    let mut canvas = blank(ColorMode::FullColor);
    canvas.set_pixel(3, 3, Color::RED);
    let before = canvas.clone();

    {
        let mut draw = canvas.draw();
        draw.pixels(&[], Color::WHITE);
        draw.lines(&[], Color::WHITE);
        draw.lines_aa(&[], Color::WHITE);
    }

    assert_eq!(canvas, before);
}
