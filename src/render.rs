//! Drawing: hands vertex lists to a 2D canvas context.
//!
//! [`Surface`] is the slice of `CanvasRenderingContext2d` this crate needs.
//! Shapes draw through it, never through `web_sys` directly, which keeps
//! them testable with a recording surface.

#[cfg(test)]
#[path = "render_test.rs"]
pub(crate) mod render_test;

use web_sys::CanvasRenderingContext2d;

use crate::point::Point;

/// A 2D path-drawing target.
pub trait Surface {
    fn save(&self);
    fn restore(&self);
    fn begin_path(&self);
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    fn close_path(&self);
    fn fill(&self);
    fn stroke(&self);
    fn set_fill_style(&self, color: &str);
    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64);
}

impl Surface for CanvasRenderingContext2d {
    fn save(&self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn close_path(&self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn fill(&self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn set_fill_style(&self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }
}

/// Add a closed path through `points` to the current path.
///
/// Does nothing for an empty slice.
pub fn trace_path<S: Surface + ?Sized>(surface: &S, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    surface.move_to(first.x, first.y);
    for p in rest {
        surface.line_to(p.x, p.y);
    }
    surface.close_path();
}

/// Fill the polygon through `points` with `color`.
pub fn fill_polygon<S: Surface + ?Sized>(surface: &S, points: &[Point], color: &str) {
    surface.save();
    surface.set_fill_style(color);
    surface.begin_path();
    trace_path(surface, points);
    surface.fill();
    surface.restore();
}

/// Stroke the outline through `points` with the current stroke style.
pub fn stroke_polygon<S: Surface + ?Sized>(surface: &S, points: &[Point]) {
    surface.save();
    surface.begin_path();
    trace_path(surface, points);
    surface.stroke();
    surface.restore();
}
