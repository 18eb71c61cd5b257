//! Battle objects: axis-aligned rectangles that beams can strike.

#[cfg(test)]
#[path = "battle_test.rs"]
mod battle_test;

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::polygon::Bounds;
use crate::render::{Surface, stroke_polygon};

/// A rectangle in screen space, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleObject {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BattleObject {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Corners clockwise from the top-left (in screen space, `y` down).
    #[must_use]
    pub fn outline(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.w, self.y),
            Point::new(self.x + self.w, self.y + self.h),
            Point::new(self.x, self.y + self.h),
        ]
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Normalized bounds; negative sizes extend up or left.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.x.min(self.x + self.w),
            min_y: self.y.min(self.y + self.h),
            max_x: self.x.max(self.x + self.w),
            max_y: self.y.max(self.y + self.h),
        }
    }

    /// Inclusive containment.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Stroke the outline with the current stroke style.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &S) {
        stroke_polygon(surface, &self.outline());
    }
}
