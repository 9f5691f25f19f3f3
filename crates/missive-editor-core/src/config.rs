//! Editor configuration.
//!
//! Every field is optional; missing fields take the defaults below. The
//! serialized form uses camelCase keys so hosts can pass JSON straight in.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::variables::{Variable, default_variables};

pub const DEFAULT_PLACEHOLDER: &str = "Start writing your email...";
pub const DEFAULT_PADDING: &str = "24px";
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: &str = "16px";

/// Placeholder offset used when the block has no padding on that side.
pub const PLACEHOLDER_FALLBACK_OFFSET: u32 = 24;

/// A select option: display label and the value dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOption {
    pub label: &'static str,
    pub value: &'static str,
}

const fn option(label: &'static str, value: &'static str) -> FontOption {
    FontOption { label, value }
}

pub const FONT_FAMILIES: [FontOption; 8] = [
    option("Arial", "Arial"),
    option("Helvetica", "Helvetica"),
    option("Times New Roman", "Times New Roman"),
    option("Courier New", "Courier New"),
    option("Georgia", "Georgia"),
    option("Verdana", "Verdana"),
    option("Tahoma", "Tahoma"),
    option("Trebuchet MS", "Trebuchet MS"),
];

pub const FONT_SIZES: [FontOption; 7] = [
    option("10px", "10px"),
    option("12px", "12px"),
    option("14px", "14px"),
    option("16px", "16px"),
    option("18px", "18px"),
    option("24px", "24px"),
    option("36px", "36px"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// HTML seeded into the surface once, only if it is empty.
    pub initial_value: String,
    /// Shown while the surface has no text and no markup.
    pub placeholder: SmolStr,
    /// Entries of the variable panel.
    pub variables: Vec<Variable>,
    /// CSS length applied to the surface padding at mount.
    pub default_padding: SmolStr,
    /// Extra class for the root container.
    pub class: Option<String>,
    /// Inline style for the root container.
    pub style: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_value: String::new(),
            placeholder: SmolStr::new_static(DEFAULT_PLACEHOLDER),
            variables: default_variables(),
            default_padding: SmolStr::new_static(DEFAULT_PADDING),
            class: None,
            style: None,
        }
    }
}

impl EditorConfig {
    pub fn with_initial_value(mut self, html: impl Into<String>) -> Self {
        self.initial_value = html.into();
        self
    }

    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_default_padding(mut self, padding: impl Into<SmolStr>) -> Self {
        self.default_padding = padding.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<SmolStr>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}
