//! Polygon containment, overlap, and integer-grid rasterization.
//!
//! A polygon is a borrowed slice of at least three vertices. The closing
//! edge from the last vertex back to the first is implicit; a repeated
//! first vertex at the end (as the beam generator produces for drawing) is
//! harmless because it only adds a zero-length edge.
//!
//! Rasterization walks every integer point of the bounding box and tests
//! each one against every edge, so cost grows with box area times vertex
//! count. It is meant for interactively sized shapes, tens to a few hundred
//! pixels across.

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;

use crate::consts::{BOUNDARY_EPSILON, MAX_GRID_COORD};
use crate::error::GeometryError;
use crate::point::Point;

/// Ray-casting containment test.
///
/// Casts a ray from `p` toward `+x` and toggles on every edge it crosses.
/// Points exactly on an edge get a deterministic answer, but which side
/// they land on depends on the edge's orientation. Returns `false` for
/// fewer than three vertices.
#[must_use]
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);

        if ((yi > p.y) != (yj > p.y)) && (p.x < (xj - xi) * (p.y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether `p` lies on one of the polygon's edges, within [`BOUNDARY_EPSILON`].
#[must_use]
pub fn point_on_boundary(p: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 2 {
        return false;
    }
    (0..n).any(|i| on_segment(p, polygon[(i + n - 1) % n], polygon[i]))
}

fn on_segment(p: Point, a: Point, b: Point) -> bool {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let apx = p.x - a.x;
    let apy = p.y - a.y;

    let len = abx.hypot(aby);
    if len <= BOUNDARY_EPSILON {
        return apx.hypot(apy) <= BOUNDARY_EPSILON;
    }

    // Perpendicular distance from the infinite line, then clamp to the segment.
    let cross = abx * apy - aby * apx;
    if (cross / len).abs() > BOUNDARY_EPSILON {
        return false;
    }
    let dot = apx * abx + apy * aby;
    dot >= -BOUNDARY_EPSILON * len && dot <= len * len + BOUNDARY_EPSILON * len
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty slice.
    #[must_use]
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
        Some(points[1..].iter().fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Inclusive containment.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}

/// Check that `polygon` has at least three finite vertices.
///
/// # Errors
///
/// Returns [`GeometryError::DegeneratePolygon`] for fewer than three
/// vertices and [`GeometryError::NonFinite`] for the first NaN or infinite
/// vertex.
pub fn validate(polygon: &[Point]) -> Result<(), GeometryError> {
    if polygon.len() < 3 {
        log::debug!("rejecting polygon with {} vertices", polygon.len());
        return Err(GeometryError::DegeneratePolygon { len: polygon.len() });
    }
    if let Some(index) = polygon.iter().position(|p| !p.is_finite()) {
        log::debug!("rejecting polygon with non-finite vertex {index}");
        return Err(GeometryError::NonFinite { index });
    }
    Ok(())
}

/// Every integer point inside or on the boundary of `polygon`.
///
/// Points are returned row by row (`y` outer, `x` inner), both ascending.
/// The caller's vertex order is used as-is for containment and is never
/// rearranged.
///
/// # Errors
///
/// Returns the errors of [`validate`], and
/// [`GeometryError::OutOfRange`] for a vertex beyond [`MAX_GRID_COORD`].
pub fn rasterize(polygon: &[Point]) -> Result<Vec<Point>, GeometryError> {
    validate(polygon)?;
    let out_of_range = |p: &Point| p.x.abs() > MAX_GRID_COORD || p.y.abs() > MAX_GRID_COORD;
    if let Some(index) = polygon.iter().position(out_of_range) {
        log::debug!("rejecting polygon with out-of-range vertex {index}");
        return Err(GeometryError::OutOfRange { index });
    }
    let Some(bounds) = Bounds::of(polygon) else {
        return Err(GeometryError::DegeneratePolygon { len: 0 });
    };

    // Within MAX_GRID_COORD, `+= 1.0` always advances.
    let mut out = Vec::new();
    let mut y = bounds.min_y.ceil();
    while y <= bounds.max_y {
        let mut x = bounds.min_x.ceil();
        while x <= bounds.max_x {
            let p = Point { x, y };
            if point_in_polygon(p, polygon) || point_on_boundary(p, polygon) {
                out.push(p);
            }
            x += 1.0;
        }
        y += 1.0;
    }

    log::trace!("rasterized {} points in {}x{} box", out.len(), bounds.width(), bounds.height());
    Ok(out)
}

/// Whether two polygons share any point, edges and touching corners included.
///
/// Exact for convex and concave shapes alike: either some pair of edges
/// crosses or touches, or one polygon lies wholly inside the other. Returns
/// `false` when either side has fewer than three vertices.
#[must_use]
pub fn polygons_overlap(a: &[Point], b: &[Point]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    if edges(a).any(|(p, q)| edges(b).any(|(r, s)| segments_intersect(p, q, r, s))) {
        return true;
    }
    point_in_polygon(a[0], b) || point_in_polygon(b[0], a)
}

fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[(i + n - 1) % n], polygon[i]))
}

/// Twice the signed area of `(o, a, b)`; positive when counter-clockwise.
fn orient(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn segments_intersect(p: Point, q: Point, r: Point, s: Point) -> bool {
    let d1 = orient(r, s, p);
    let d2 = orient(r, s, q);
    let d3 = orient(p, q, r);
    let d4 = orient(p, q, s);
    let straddles = |u: f64, v: f64| (u > 0.0 && v < 0.0) || (u < 0.0 && v > 0.0);
    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }
    on_segment(p, r, s) || on_segment(q, r, s) || on_segment(r, p, q) || on_segment(s, p, q)
}
