//! Document-level subscriptions: pointer-down for dropdown dismissal and
//! selection changes for toolbar resynchronization.
//!
//! Panels close when the pointer goes down outside the element that anchors
//! them (the toolbar button plus its dropdown). Each subscription is an owned
//! value: dropping it removes the listener from the document.

use gloo_events::EventListener;
use missive_editor_core::{EditorError, Panel};
use wasm_bindgen::JsCast;

/// Element IDs of the wrappers anchoring each dropdown panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAnchors {
    pub color: String,
    pub padding: String,
    pub variables: String,
}

impl PanelAnchors {
    /// Anchor IDs derived from an editor element ID.
    pub fn for_editor(editor_id: &str) -> Self {
        Self {
            color: format!("{editor_id}-color-anchor"),
            padding: format!("{editor_id}-padding-anchor"),
            variables: format!("{editor_id}-variables-anchor"),
        }
    }

    pub fn id(&self, panel: Panel) -> &str {
        match panel {
            Panel::Color => &self.color,
            Panel::Padding => &self.padding,
            Panel::Variables => &self.variables,
        }
    }

    /// Whether `target` lies inside the anchor of `panel`.
    ///
    /// An anchor missing from the document contains nothing.
    pub fn contains(&self, panel: Panel, target: &web_sys::Node) -> bool {
        gloo_utils::document()
            .get_element_by_id(self.id(panel))
            .is_some_and(|anchor| anchor.contains(Some(target)))
    }
}

/// Active pointer-down listener on the document.
pub struct OutsidePointerListener {
    _listener: EventListener,
}

impl OutsidePointerListener {
    /// Call `on_pointer_down` with the target node of every `mousedown` in the document.
    pub fn subscribe(
        mut on_pointer_down: impl FnMut(&web_sys::Node) + 'static,
    ) -> Result<Self, EditorError> {
        let document = web_sys::window()
            .ok_or(EditorError::NoWindow)?
            .document()
            .ok_or(EditorError::NoDocument)?;
        let listener = EventListener::new(&document, "mousedown", move |event| {
            let Some(target) = event.target() else {
                return;
            };
            match target.dyn_into::<web_sys::Node>() {
                Ok(node) => on_pointer_down(&node),
                Err(_) => tracing::trace!(target: "missive::panels", "pointer-down target is not a node"),
            }
        });
        tracing::debug!(target: "missive::panels", "subscribed to outside pointer-down");
        Ok(Self {
            _listener: listener,
        })
    }
}

/// Active `selectionchange` listener on the document.
///
/// Catches selection moves the surface's own key and mouse events miss, such
/// as a drag released outside the editor.
pub struct SelectionChangeListener {
    _listener: EventListener,
}

impl SelectionChangeListener {
    pub fn subscribe(mut on_change: impl FnMut() + 'static) -> Result<Self, EditorError> {
        let document = web_sys::window()
            .ok_or(EditorError::NoWindow)?
            .document()
            .ok_or(EditorError::NoDocument)?;
        let listener = EventListener::new(&document, "selectionchange", move |_| on_change());
        tracing::debug!(target: "missive::sync", "subscribed to selectionchange");
        Ok(Self {
            _listener: listener,
        })
    }
}

impl std::fmt::Debug for SelectionChangeListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionChangeListener").finish_non_exhaustive()
    }
}

impl std::fmt::Debug for OutsidePointerListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutsidePointerListener").finish_non_exhaustive()
    }
}
