//! The laser beam: an oriented rectangle swept out from an emitter.
//!
//! A beam is built once from an emitter point, an angle in degrees, and a
//! half-width. Its two near corners sit `half_width` either side of the
//! emitter, perpendicular to the beam; the far corners are `length` further
//! along the beam direction. The geometry never changes after
//! construction. Only the `lasing` flag is mutable.

#[cfg(test)]
#[path = "beam_test.rs"]
mod beam_test;

use crate::config::BeamConfig;
use crate::error::GeometryError;
use crate::point::Point;
use crate::polygon::{point_in_polygon, point_on_boundary, rasterize};
use crate::render::{Surface, fill_polygon};

/// A directed beam region.
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    start: Point,
    angle: f64,
    half_width: f64,
    length: f64,
    color: String,
    lasing: bool,
    /// `[p1, p2, p3, p4, p1]`, closed for drawing.
    vertices: [Point; 5],
}

impl Beam {
    /// Beam with the default length and color.
    #[must_use]
    pub fn new(start: Point, angle_deg: f64, half_width: f64) -> Self {
        Self::with_config(start, angle_deg, half_width, &BeamConfig::default())
    }

    #[must_use]
    pub fn with_config(start: Point, angle_deg: f64, half_width: f64, config: &BeamConfig) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let r = half_width;
        let len = config.length;

        let p1 = Point::new(start.x - r * cos, start.y + r * sin);
        let p2 = Point::new(start.x + r * cos, start.y - r * sin);
        let p3 = Point::new(p2.x + len * sin, p2.y + len * cos);
        let p4 = Point::new(p1.x + len * sin, p1.y + len * cos);

        Self {
            start,
            angle: angle_deg,
            half_width,
            length: len,
            color: config.color.clone(),
            lasing: false,
            vertices: [p1, p2, p3, p4, p1],
        }
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Emission angle in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The closed outline `[p1, p2, p3, p4, p1]`.
    #[must_use]
    pub fn vertices(&self) -> &[Point; 5] {
        &self.vertices
    }

    /// The four distinct corners.
    #[must_use]
    pub fn corners(&self) -> &[Point] {
        &self.vertices[..4]
    }

    /// Center of the far edge.
    #[must_use]
    pub fn tip(&self) -> Point {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        Point::new(self.start.x + self.length * sin, self.start.y + self.length * cos)
    }

    #[must_use]
    pub fn is_lasing(&self) -> bool {
        self.lasing
    }

    pub fn set_lasing(&mut self, lasing: bool) {
        self.lasing = lasing;
    }

    /// Whether `p` is inside the beam or on its edge.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p, self.corners()) || point_on_boundary(p, self.corners())
    }

    /// Every integer point the beam covers.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] when the beam was built from
    /// non-finite inputs and [`GeometryError::OutOfRange`] when a corner is
    /// too far out to walk in unit steps.
    pub fn covered_points(&self) -> Result<Vec<Point>, GeometryError> {
        rasterize(self.corners())
    }

    /// Fill the beam outline with its color.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &S) {
        fill_polygon(surface, &self.vertices, &self.color);
    }
}
