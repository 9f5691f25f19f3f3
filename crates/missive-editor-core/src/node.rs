//! Generic node abstraction and the nearest-block walk.
//!
//! The block finder only needs parent links and computed `display`, so it is
//! written against [`DomNode`] and works the same over the browser DOM and
//! the in-memory tree used by the tests.

use crate::error::EditorError;

/// Displays that stack vertically and can carry block padding.
pub const BLOCK_DISPLAYS: [&str; 4] = ["block", "list-item", "flex", "grid"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Other,
}

/// A node in the editable tree.
///
/// Equality is node identity, not structural equality.
pub trait DomNode: Clone + PartialEq {
    fn kind(&self) -> NodeKind;

    fn parent_node(&self) -> Option<Self>;

    /// Computed value of a CSS property. `None` for non-elements or on failure.
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Set an inline style property (kebab-case name).
    fn set_style(&self, property: &str, value: &str) -> Result<(), EditorError>;

    fn remove_attribute(&self, name: &str) -> Result<(), EditorError>;

    fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }
}

/// Whether a node is an element laid out as a block.
pub fn is_block<N: DomNode>(node: &N) -> bool {
    if !node.is_element() {
        return false;
    }
    node.computed_style("display")
        .is_some_and(|display| BLOCK_DISPLAYS.contains(&display.trim()))
}

/// The element a selection anchor sits in: text nodes resolve to their parent.
pub fn anchor_element<N: DomNode>(anchor: &N) -> Option<N> {
    match anchor.kind() {
        NodeKind::Element => Some(anchor.clone()),
        NodeKind::Text => anchor.parent_node().filter(|parent| parent.is_element()),
        NodeKind::Other => None,
    }
}

/// Find the nearest block-level ancestor of `anchor`, stopping at `root`.
///
/// Walks outward from the anchor (from its parent when the anchor is a text
/// node). Returns the first block element strictly inside `root`, or `root`
/// itself when nothing closer qualifies. Returns `None` when the anchor is
/// not inside `root` at all.
pub fn find_nearest_block<N: DomNode>(anchor: &N, root: &N) -> Option<N> {
    let mut current = match anchor.kind() {
        NodeKind::Text => anchor.parent_node(),
        _ => Some(anchor.clone()),
    };
    let mut candidate = None;

    while let Some(node) = current {
        if &node == root {
            return Some(candidate.unwrap_or(node));
        }
        if candidate.is_none() && is_block(&node) {
            candidate = Some(node.clone());
        }
        current = node.parent_node();
    }

    tracing::trace!(target: "missive::block", "selection anchor is outside the editable root");
    None
}
