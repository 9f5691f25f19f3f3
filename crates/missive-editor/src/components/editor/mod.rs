//! Email editor component and its toolbar pieces.

mod component;
mod handle;
mod image_upload;
mod panels;
mod styles;
mod toolbar;

pub use component::EmailEditor;
pub use panels::{ColorPanel, PaddingPanel, VariablesPanel};
pub use toolbar::EditorToolbar;
