#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

/// A point in screen space. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite (not NaN or infinite).
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A straight segment between two points.
///
/// Lines are plain values. Transforms in [`crate::transform`] return a new
/// line rather than editing one in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new((self.start.x + self.end.x) * 0.5, (self.start.y + self.end.y) * 0.5)
    }
}
