//! `web_sys` implementations of the [`crate::dom`] traits.
//!
//! Calling into these types off the `wasm32` target panics inside
//! `wasm-bindgen`, so native tests go through the fakes in `dom_test.rs`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use crate::dom::{DomNode, ElementLookup, NodeKind};

/// A live DOM node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebNode(Node);

impl WebNode {
    #[must_use]
    pub fn into_node(self) -> Node {
        self.0
    }

    /// The node as an element, when it is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        self.0.dyn_ref::<Element>()
    }
}

impl From<Element> for WebNode {
    fn from(el: Element) -> Self {
        Self(el.into())
    }
}

impl DomNode for WebNode {
    fn kind(&self) -> NodeKind {
        match self.0.node_type() {
            Node::ELEMENT_NODE => NodeKind::Element,
            Node::TEXT_NODE => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn children(&self) -> Vec<Self> {
        let Some(el) = self.as_element() else {
            return Vec::new();
        };
        let list = el.children();
        (0..list.length()).filter_map(|i| list.item(i)).map(Self::from).collect()
    }

    fn client_size(&self) -> (f64, f64) {
        self.as_element()
            .map_or((0.0, 0.0), |el| (f64::from(el.client_width()), f64::from(el.client_height())))
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.parent_element().map(Self::from)
    }
}

/// `document.elementFromPoint` as an [`ElementLookup`].
#[derive(Debug, Clone)]
pub struct DocumentLookup {
    document: Document,
}

impl DocumentLookup {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ElementLookup for DocumentLookup {
    type Node = WebNode;

    #[allow(clippy::cast_possible_truncation)]
    fn node_at(&self, x: f64, y: f64) -> Option<WebNode> {
        self.document.element_from_point(x as f32, y as f32).map(WebNode::from)
    }
}
