//! Geometric inputs for the rasterizer.
//!
//! All coordinates are integer pixel addresses. These values are transient
//! call parameters and never stored by the canvas.

/// A pixel address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two pixel addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSegment {
    /// Origin x.
    pub x1: i32,
    /// Origin y.
    pub y1: i32,
    /// Destination x.
    pub x2: i32,
    /// Destination y.
    pub y2: i32,
}

impl LineSegment {
    /// Create a segment from coordinates.
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a segment from its endpoints.
    #[must_use]
    pub const fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Origin point.
    #[must_use]
    pub const fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Destination point.
    #[must_use]
    pub const fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// The same segment traversed in the other direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.x2, self.y2, self.x1, self.y1)
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }
}

impl From<[i32; 4]> for LineSegment {
    fn from([x1, y1, x2, y2]: [i32; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CircleSpec {
    /// Center x.
    pub cx: i32,
    /// Center y.
    pub cy: i32,
    /// Radius in pixels.
    pub radius: i32,
}

impl CircleSpec {
    /// Create a new circle.
    #[must_use]
    pub const fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self { cx, cy, radius }
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}
