//! missive-editor: a Dioxus email editor component.
//!
//! [`EmailEditor`] renders a formatting toolbar over a `contenteditable`
//! surface and reports the surface HTML through `on_change`. The editing
//! logic lives in `missive-editor-core`; this crate is only the view.

pub mod components;

pub use components::editor::EmailEditor;
pub use missive_editor_browser;
