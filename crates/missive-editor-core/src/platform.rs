//! Platform abstraction traits for editor operations.
//!
//! These traits define the interface between the editor logic and the
//! platform's rich-text machinery (the browser's `execCommand` family and a
//! `contenteditable` element, or any other engine with the same shape). All
//! state is reached through explicit handles rather than ambient globals.

use crate::actions::Command;
use crate::error::EditorError;
use crate::node::DomNode;

/// A rich-text engine that applies and reports formatting on the current selection.
pub trait RichTextEngine {
    type Node: DomNode;

    /// Apply a formatting command to the current selection.
    ///
    /// Returns whether the engine reported the command as applied.
    fn execute(&self, command: Command, value: Option<&str>) -> Result<bool, EditorError>;

    /// Whether a toggle-style command is active at the selection.
    fn query_active(&self, command: Command) -> bool;

    /// The current value of a value-style command (font name, color) at the selection.
    fn query_value(&self, command: Command) -> Option<String>;

    /// The node the selection is anchored in, if there is a selection.
    fn selection_anchor(&self) -> Option<Self::Node>;
}

/// The editable surface: the element that owns the document HTML.
///
/// Every accessor returns `None`/empty when the surface is not mounted.
pub trait EditableSurface {
    type Node: DomNode;

    /// The surface root element.
    fn root(&self) -> Option<Self::Node>;

    /// Serialized HTML of the surface contents.
    fn inner_html(&self) -> Option<String>;

    /// Replace the surface contents with raw HTML.
    fn set_inner_html(&self, html: &str) -> Result<(), EditorError>;

    /// Rendered text of the surface contents.
    fn inner_text(&self) -> Option<String>;

    /// Give the surface input focus.
    fn focus(&self);

    /// All descendants of the surface matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
}

/// Blocking user prompts (link and image URLs).
pub trait PromptPlatform {
    /// Ask the user for a line of text. `None` when cancelled.
    fn prompt(&self, message: &str) -> Option<String>;
}

/// Prompt implementation that always cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl PromptPlatform for NoPrompt {
    fn prompt(&self, _message: &str) -> Option<String> {
        None
    }
}

impl<F> PromptPlatform for F
where
    F: Fn(&str) -> Option<String>,
{
    fn prompt(&self, message: &str) -> Option<String> {
        self(message)
    }
}
