//! The contenteditable element as an `EditableSurface`.

use missive_editor_core::{EditableSurface, EditorError};
use wasm_bindgen::JsCast;

use crate::node::BrowserNode;

/// Editable surface located by element ID.
///
/// The element is looked up on every access, so a surface that is not (or
/// no longer) in the document simply reads as unmounted.
#[derive(Debug, Clone)]
pub struct BrowserSurface {
    editor_id: String,
}

impl BrowserSurface {
    pub fn new(editor_id: impl Into<String>) -> Self {
        Self {
            editor_id: editor_id.into(),
        }
    }

    pub fn editor_id(&self) -> &str {
        &self.editor_id
    }

    /// The surface element, if it is in the document.
    pub fn element(&self) -> Option<web_sys::HtmlElement> {
        gloo_utils::document()
            .get_element_by_id(&self.editor_id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }
}

impl EditableSurface for BrowserSurface {
    type Node = BrowserNode;

    fn root(&self) -> Option<BrowserNode> {
        self.element().map(BrowserNode::new)
    }

    fn inner_html(&self) -> Option<String> {
        self.element().map(|el| el.inner_html())
    }

    fn set_inner_html(&self, html: &str) -> Result<(), EditorError> {
        let element = self.element().ok_or(EditorError::NotMounted)?;
        element.set_inner_html(html);
        Ok(())
    }

    fn inner_text(&self) -> Option<String> {
        self.element().map(|el| el.inner_text())
    }

    fn focus(&self) {
        if let Some(element) = self.element() {
            if let Err(e) = element.focus() {
                tracing::warn!("focus failed: {:?}", e);
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<BrowserNode> {
        let Some(element) = self.element() else {
            return vec![];
        };
        let Ok(list) = element.query_selector_all(selector) else {
            return vec![];
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(BrowserNode)
            .collect()
    }
}
