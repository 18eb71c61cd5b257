//! Resolving which DOM element sits under a point.
//!
//! The browser's element-at-point lookup happily returns layout wrappers:
//! containers whose children have all collapsed to nothing. Those are not
//! meaningful targets, so [`element_at_point`] filters them out and leaves
//! the caller to try another point.
//!
//! Access to the DOM goes through [`ElementLookup`] and [`DomNode`] so the
//! rules here can be tested against an in-memory tree. The `web_sys`
//! implementation lives in [`crate::browser`].

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::point::Point;

/// The kind of a DOM node, reduced to what hit-testing cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    /// Comments, documents, fragments, and anything else.
    Other,
}

/// A node in a rendered document tree.
pub trait DomNode: Clone {
    fn kind(&self) -> NodeKind;

    /// Child elements, in document order.
    fn children(&self) -> Vec<Self>;

    /// Rendered `(width, height)` in CSS pixels.
    fn client_size(&self) -> (f64, f64);

    fn parent_element(&self) -> Option<Self>;

    /// Whether the node occupies no visible area.
    fn is_collapsed(&self) -> bool {
        let (w, h) = self.client_size();
        w == 0.0 || h == 0.0
    }
}

/// The platform's "topmost node at this screen coordinate" query.
pub trait ElementLookup {
    type Node: DomNode;

    fn node_at(&self, x: f64, y: f64) -> Option<Self::Node>;
}

/// Whether every descendant of `el` has zero width or zero height.
///
/// A node without children is vacuously empty.
#[must_use]
pub fn all_descendants_empty<N: DomNode>(el: &N) -> bool {
    el.children()
        .iter()
        .all(|child| child.is_collapsed() && all_descendants_empty(child))
}

/// The meaningful element under `p`, if any.
///
/// Returns `None` when nothing is there, when the hit is a wrapper whose
/// whole subtree has collapsed, or when the hit is not an element (a text
/// node resolves to its parent element first). `None` is an ordinary
/// answer: the caller should look elsewhere.
pub fn element_at_point<L: ElementLookup>(lookup: &L, p: Point) -> Option<L::Node> {
    let mut node = lookup.node_at(p.x, p.y)?;

    if !node.children().is_empty() && all_descendants_empty(&node) {
        log::trace!("skipping empty wrapper at ({}, {})", p.x, p.y);
        return None;
    }

    if node.kind() == NodeKind::Text {
        node = node.parent_element()?;
    }

    if node.kind() != NodeKind::Element {
        return None;
    }
    Some(node)
}
