//! Rich-text engine backed by the browser's `execCommand` family.
//!
//! The browser engine acts on the document's current selection, so the
//! surface must hold focus for commands to land where the user expects.

use missive_editor_core::{Command, EditorError, RichTextEngine};
use wasm_bindgen::JsCast;

use crate::node::BrowserNode;

/// `document.execCommand` / `queryCommandState` / `queryCommandValue`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEngine;

impl BrowserEngine {
    pub fn new() -> Self {
        Self
    }

    fn html_document(&self) -> Result<web_sys::HtmlDocument, EditorError> {
        let document = web_sys::window()
            .ok_or(EditorError::NoWindow)?
            .document()
            .ok_or(EditorError::NoDocument)?;
        document
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| EditorError::Dom("document is not an HTML document".into()))
    }
}

impl RichTextEngine for BrowserEngine {
    type Node = BrowserNode;

    fn execute(&self, command: Command, value: Option<&str>) -> Result<bool, EditorError> {
        let document = self.html_document()?;
        let name = command.as_str();
        let result = match value {
            Some(value) => document.exec_command_with_show_ui_and_value(name, false, value),
            None => document.exec_command_with_show_ui(name, false),
        };
        tracing::trace!(target: "missive::engine", command = name, ?value, "execCommand");
        result.map_err(|e| EditorError::Dom(format!("execCommand({name}) failed: {:?}", e)))
    }

    fn query_active(&self, command: Command) -> bool {
        self.html_document()
            .and_then(|doc| {
                doc.query_command_state(command.as_str())
                    .map_err(|e| EditorError::Dom(format!("{:?}", e)))
            })
            .unwrap_or(false)
    }

    fn query_value(&self, command: Command) -> Option<String> {
        let document = self.html_document().ok()?;
        document.query_command_value(command.as_str()).ok()
    }

    fn selection_anchor(&self) -> Option<BrowserNode> {
        let selection = web_sys::window()?.get_selection().ok()??;
        selection.anchor_node().map(BrowserNode)
    }
}
