use std::cell::RefCell;

use super::*;

/// Records every call as a short string.
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub ops: RefCell<Vec<String>>,
}

impl RecordingSurface {
    pub(crate) fn ops(&self) -> Vec<String> {
        self.ops.borrow().clone()
    }

    fn push(&self, op: String) {
        self.ops.borrow_mut().push(op);
    }
}

impl Surface for RecordingSurface {
    fn save(&self) {
        self.push("save".into());
    }

    fn restore(&self) {
        self.push("restore".into());
    }

    fn begin_path(&self) {
        self.push("begin".into());
    }

    fn move_to(&self, x: f64, y: f64) {
        self.push(format!("move {x} {y}"));
    }

    fn line_to(&self, x: f64, y: f64) {
        self.push(format!("line {x} {y}"));
    }

    fn close_path(&self) {
        self.push("close".into());
    }

    fn fill(&self) {
        self.push("fill".into());
    }

    fn stroke(&self) {
        self.push("stroke".into());
    }

    fn set_fill_style(&self, color: &str) {
        self.push(format!("fill_style {color}"));
    }

    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        self.push(format!("clear {x} {y} {w} {h}"));
    }
}

fn tri() -> Vec<Point> {
    vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)]
}

#[test]
fn trace_path_moves_then_lines_then_closes() {
    let s = RecordingSurface::default();
    trace_path(&s, &tri());
    assert_eq!(s.ops(), vec!["move 0 0", "line 4 0", "line 0 3", "close"]);
}

#[test]
fn trace_path_empty_draws_nothing() {
    let s = RecordingSurface::default();
    trace_path(&s, &[]);
    assert!(s.ops().is_empty());
}

#[test]
fn trace_path_single_point_only_moves() {
    let s = RecordingSurface::default();
    trace_path(&s, &[Point::new(1.0, 2.0)]);
    assert_eq!(s.ops(), vec!["move 1 2", "close"]);
}

#[test]
fn fill_polygon_wraps_in_save_restore() {
    let s = RecordingSurface::default();
    fill_polygon(&s, &tri(), "red");
    let ops = s.ops();
    assert_eq!(ops.first().map(String::as_str), Some("save"));
    assert_eq!(ops.last().map(String::as_str), Some("restore"));
    assert!(ops.contains(&"fill_style red".to_string()));
    assert!(ops.contains(&"fill".to_string()));
    assert!(!ops.contains(&"stroke".to_string()));
}

#[test]
fn fill_polygon_sets_style_before_filling() {
    let s = RecordingSurface::default();
    fill_polygon(&s, &tri(), "#abc");
    let ops = s.ops();
    let style = ops.iter().position(|o| o == "fill_style #abc").unwrap();
    let fill = ops.iter().position(|o| o == "fill").unwrap();
    assert!(style < fill);
}

#[test]
fn stroke_polygon_strokes_without_fill() {
    let s = RecordingSurface::default();
    stroke_polygon(&s, &tri());
    assert_eq!(
        s.ops(),
        vec!["save", "begin", "move 0 0", "line 4 0", "line 0 3", "close", "stroke", "restore"]
    );
}
