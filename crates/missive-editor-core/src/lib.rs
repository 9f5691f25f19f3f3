//! missive-editor-core: email editor logic without framework dependencies.
//!
//! This crate provides:
//! - `RichTextEngine` / `EditableSurface` traits over the platform's rich-text machinery
//! - `DomNode` plus the nearest-block walk used by the padding editor
//! - `EditorState` synchronization from the live selection
//! - `EditorController`, dispatching toolbar actions and notifying the host
//! - Dropdown panel state, template variables, colors and configuration

pub mod actions;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod image;
pub mod node;
pub mod padding;
pub mod panels;
pub mod platform;
pub mod state;
pub mod surface;
pub mod sync;
pub mod variables;

#[cfg(test)]
pub(crate) mod testing;

pub use actions::{BlockFormat, Command, EditorAction};
pub use color::{DEFAULT_COLOR, PRESET_COLORS, css_to_hex, indicator_color, is_default_color};
pub use config::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_PADDING, DEFAULT_PLACEHOLDER, EditorConfig,
    FONT_FAMILIES, FONT_SIZES, FontOption, PLACEHOLDER_FALLBACK_OFFSET,
};
pub use controller::{ChangeCallback, EditorController, IMAGE_PROMPT, LINK_PROMPT};
pub use error::EditorError;
pub use image::{image_mime_type, to_data_url};
pub use node::{BLOCK_DISPLAYS, DomNode, NodeKind, anchor_element, find_nearest_block, is_block};
pub use padding::{PaddingBox, PaddingStep, Side, parse_css_int, px};
pub use panels::{Panel, PanelSet};
pub use platform::{EditableSurface, NoPrompt, PromptPlatform, RichTextEngine};
pub use smol_str::SmolStr;
pub use state::{EditorState, FormattingState};
pub use surface::{
    SENTINEL_FONT_SIZE, SENTINEL_SELECTOR, apply_default_padding, is_blank,
    rewrite_sentinel_font_size, seed_initial_content,
};
pub use sync::synchronize;
pub use variables::{Variable, default_variables};
