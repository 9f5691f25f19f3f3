//! Browser layer for the missive email editor.
//!
//! Binds the framework-free logic in `missive-editor-core` to the live DOM.
//! It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `engine`: `execCommand`-backed [`RichTextEngine`]
//! - `surface`: the `contenteditable` element, found by ID
//! - `node`: [`DomNode`] over `web_sys::Node`
//! - `listener`: outside pointer-down and `selectionchange` subscriptions
//! - `files`: `window.prompt` and file-to-data-URL reading
//!
//! # Re-exports
//!
//! This crate re-exports `missive-editor-core` for convenience, so consumers
//! only need to depend on `missive-editor-browser`.

pub use missive_editor_core;
pub use missive_editor_core::*;

pub mod engine;
pub mod files;
pub mod listener;
pub mod node;
pub mod surface;

pub use engine::BrowserEngine;
pub use files::{BrowserPrompt, clear_file_input, open_file_picker, read_file_as_data_url, selected_file};
pub use listener::{OutsidePointerListener, PanelAnchors, SelectionChangeListener};
pub use node::BrowserNode;
pub use surface::BrowserSurface;

/// Controller wired to the live browser DOM.
pub type BrowserController = EditorController<BrowserEngine, BrowserSurface>;

/// Controller for the surface element with the given ID.
pub fn browser_controller(editor_id: impl Into<String>) -> BrowserController {
    EditorController::new(BrowserEngine::new(), BrowserSurface::new(editor_id))
}
