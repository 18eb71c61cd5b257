//! Point and line transforms.
//!
//! Angles are degrees and are converted to radians only inside these
//! functions. Screen coordinates: `y` grows downward, so the sign choices
//! below are part of the contract, not an accident of derivation.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::point::{Line, Point};

/// Move `p` by `delta` along the direction `angle_deg`.
///
/// At 0° the offset is along `+y`; positive angles sweep toward `-x`. A
/// negative `delta` moves the opposite way.
#[must_use]
pub fn move_from_angle(p: Point, angle_deg: f64, delta: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point { x: p.x - delta * sin, y: p.y + delta * cos }
}

/// Move `from` by `delta` along the line through `from` and `toward`,
/// stepping away from `toward`.
///
/// Points that share an x-coordinate have no finite slope; they are moved
/// along `y` instead, still away from `toward`. If the two points coincide
/// there is no direction at all and `from` is returned unchanged.
#[must_use]
pub fn move_toward_point(from: Point, toward: Point, delta: f64) -> Point {
    let dx = toward.x - from.x;
    let dy = toward.y - from.y;

    if dx == 0.0 {
        log::trace!("vertical alignment at x={}, offsetting along y", from.x);
        return if dy > 0.0 {
            Point { x: from.x, y: from.y - delta }
        } else if dy < 0.0 {
            Point { x: from.x, y: from.y + delta }
        } else {
            from
        };
    }

    let angle = (dy / dx).atan();
    let (sin, cos) = angle.sin_cos();
    if dx > 0.0 {
        Point { x: from.x - delta * cos, y: from.y - delta * sin }
    } else {
        Point { x: from.x + delta * cos, y: from.y + delta * sin }
    }
}

/// Push both endpoints of `line` by `delta` relative to `pivot`.
///
/// Returns a new line; the caller decides whether to replace its own.
#[must_use]
pub fn move_line(line: Line, pivot: Point, delta: f64) -> Line {
    Line {
        start: move_toward_point(line.start, pivot, delta),
        end: move_toward_point(line.end, pivot, delta),
    }
}

/// Rotate `p` about `pivot` by `angle_deg`.
#[must_use]
pub fn rotate(p: Point, pivot: Point, angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point {
        x: pivot.x + dx * cos - dy * sin,
        y: pivot.y + dx * sin + dy * cos,
    }
}
