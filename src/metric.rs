//! Distances, viewport bounds, and evenly spaced sample positions.

#[cfg(test)]
#[path = "metric_test.rs"]
mod metric_test;

use crate::point::Point;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Values `a + gap, a + 2*gap, …` strictly below `b`.
///
/// Returns an empty vector when `gap` is not a positive finite number, when
/// either bound is not finite, or when the first step already reaches `b`.
#[must_use]
pub fn interval_sequence(a: f64, b: f64, gap: f64) -> Vec<f64> {
    if !gap.is_finite() || gap <= 0.0 || !a.is_finite() || !b.is_finite() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut step = 1.0_f64;
    loop {
        // Multiply rather than accumulate so long runs do not drift.
        let value = step.mul_add(gap, a);
        if value >= b {
            break;
        }
        out.push(value);
        step += 1.0;
    }
    out
}

/// Whether `p` lies inside the `width` × `height` viewport anchored at the
/// origin. Edges count as inside.
#[must_use]
pub fn within_viewport(p: Point, width: f64, height: f64) -> bool {
    (0.0..=width).contains(&p.x) && (0.0..=height).contains(&p.y)
}

/// Visible area of the host canvas, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        within_viewport(p, self.width, self.height)
    }
}
