#![allow(clippy::float_cmp)]

use super::*;
use crate::metric::distance;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// =============================================================
// move_from_angle
// =============================================================

#[test]
fn move_from_angle_zero_moves_down() {
    let p = move_from_angle(Point::new(10.0, 10.0), 0.0, 5.0);
    assert!(point_approx_eq(p, Point::new(10.0, 15.0)));
}

#[test]
fn move_from_angle_ninety_moves_left() {
    let p = move_from_angle(Point::new(10.0, 10.0), 90.0, 5.0);
    assert!(point_approx_eq(p, Point::new(5.0, 10.0)));
}

#[test]
fn move_from_angle_one_eighty_moves_up() {
    let p = move_from_angle(Point::new(0.0, 0.0), 180.0, 3.0);
    assert!(point_approx_eq(p, Point::new(0.0, -3.0)));
}

#[test]
fn move_from_angle_negative_delta_reverses() {
    let origin = Point::new(2.0, 3.0);
    let fwd = move_from_angle(origin, 37.0, 8.0);
    let back = move_from_angle(origin, 37.0, -8.0);
    assert!(approx_eq(fwd.x - origin.x, origin.x - back.x));
    assert!(approx_eq(fwd.y - origin.y, origin.y - back.y));
}

#[test]
fn move_from_angle_distance_matches_delta() {
    let origin = Point::new(-4.0, 12.5);
    for angle in [0.0, 15.0, 45.0, 90.0, 133.0, 180.0, 270.0, -60.0, 725.0] {
        for delta in [0.0, 1.0, 7.5, -3.25, 200.0] {
            let moved = move_from_angle(origin, angle, delta);
            assert!(approx_eq(distance(origin, moved), f64::abs(delta)), "angle {angle} delta {delta}");
        }
    }
}

#[test]
fn move_from_angle_zero_delta_is_identity() {
    let p = Point::new(1.5, -2.5);
    assert!(point_approx_eq(move_from_angle(p, 123.0, 0.0), p));
}

// =============================================================
// move_toward_point
// =============================================================

#[test]
fn move_toward_point_target_right_moves_left() {
    let p = move_toward_point(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 5.0);
    assert!(point_approx_eq(p, Point::new(-5.0, 0.0)));
}

#[test]
fn move_toward_point_target_left_moves_right() {
    let p = move_toward_point(Point::new(0.0, 0.0), Point::new(-10.0, 0.0), 5.0);
    assert!(point_approx_eq(p, Point::new(5.0, 0.0)));
}

#[test]
fn move_toward_point_diagonal_moves_away() {
    let from = Point::new(0.0, 0.0);
    let toward = Point::new(3.0, 4.0);
    let p = move_toward_point(from, toward, 5.0);
    assert!(point_approx_eq(p, Point::new(-3.0, -4.0)));
    assert!(distance(p, toward) > distance(from, toward));
}

#[test]
fn move_toward_point_diagonal_left_moves_away() {
    let from = Point::new(0.0, 0.0);
    let toward = Point::new(-3.0, 4.0);
    let p = move_toward_point(from, toward, 5.0);
    assert!(point_approx_eq(p, Point::new(3.0, -4.0)));
}

#[test]
fn move_toward_point_keeps_distance() {
    let from = Point::new(7.0, -2.0);
    for toward in [Point::new(1.0, 9.0), Point::new(20.0, 3.0), Point::new(-5.0, -5.0)] {
        let p = move_toward_point(from, toward, 6.0);
        assert!(approx_eq(distance(from, p), 6.0));
    }
}

#[test]
fn move_toward_point_vertical_below_moves_up() {
    let p = move_toward_point(Point::new(5.0, 5.0), Point::new(5.0, 20.0), 3.0);
    assert!(p.is_finite());
    assert!(point_approx_eq(p, Point::new(5.0, 2.0)));
}

#[test]
fn move_toward_point_vertical_above_moves_down() {
    let p = move_toward_point(Point::new(5.0, 5.0), Point::new(5.0, -20.0), 3.0);
    assert!(point_approx_eq(p, Point::new(5.0, 8.0)));
}

#[test]
fn move_toward_point_coincident_is_unchanged() {
    let p = Point::new(4.0, 4.0);
    let moved = move_toward_point(p, p, 10.0);
    assert!(moved.is_finite());
    assert_eq!(moved, p);
}

// =============================================================
// move_line
// =============================================================

#[test]
fn move_line_pushes_both_endpoints_away() {
    let line = Line::new(Point::new(10.0, 0.0), Point::new(20.0, 0.0));
    let pivot = Point::new(0.0, 0.0);
    let moved = move_line(line, pivot, 5.0);
    assert!(point_approx_eq(moved.start, Point::new(15.0, 0.0)));
    assert!(point_approx_eq(moved.end, Point::new(25.0, 0.0)));
}

#[test]
fn move_line_leaves_input_untouched() {
    let line = Line::new(Point::new(1.0, 1.0), Point::new(2.0, 3.0));
    let before = line;
    let moved = move_line(line, Point::new(-4.0, 0.0), 2.0);
    assert_eq!(line, before);
    assert_ne!(moved, before);
}

#[test]
fn move_line_matches_point_transform() {
    let line = Line::new(Point::new(3.0, 8.0), Point::new(-6.0, 1.0));
    let pivot = Point::new(0.5, 0.5);
    let moved = move_line(line, pivot, 4.0);
    assert_eq!(moved.start, move_toward_point(line.start, pivot, 4.0));
    assert_eq!(moved.end, move_toward_point(line.end, pivot, 4.0));
}

// =============================================================
// rotate
// =============================================================

#[test]
fn rotate_ninety_about_origin() {
    let p = rotate(Point::new(1.0, 0.0), Point::new(0.0, 0.0), 90.0);
    assert!(point_approx_eq(p, Point::new(0.0, 1.0)));
}

#[test]
fn rotate_about_offset_pivot() {
    let p = rotate(Point::new(12.0, 5.0), Point::new(10.0, 5.0), 180.0);
    assert!(point_approx_eq(p, Point::new(8.0, 5.0)));
}

#[test]
fn rotate_pivot_is_fixed_point() {
    let pivot = Point::new(3.0, -7.0);
    assert!(point_approx_eq(rotate(pivot, pivot, 77.0), pivot));
}

#[test]
fn rotate_inverse_round_trips() {
    let pivot = Point::new(-2.0, 4.5);
    for p in [Point::new(0.0, 0.0), Point::new(10.0, -3.0), Point::new(-8.25, 100.0)] {
        for angle in [0.0, 30.0, 90.0, 181.0, -45.0, 359.9] {
            let back = rotate(rotate(p, pivot, angle), pivot, -angle);
            assert!(point_approx_eq(back, p), "p {p:?} angle {angle}");
        }
    }
}

#[test]
fn rotate_preserves_distance_to_pivot() {
    let pivot = Point::new(1.0, 1.0);
    let p = Point::new(4.0, 5.0);
    let r = rotate(p, pivot, 63.0);
    assert!(approx_eq(distance(pivot, r), distance(pivot, p)));
}
