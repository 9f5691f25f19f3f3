//! Editable surface helpers: seeding, default padding, serialization and
//! the sentinel font-size rewrite.

use crate::error::EditorError;
use crate::node::DomNode;
use crate::platform::EditableSurface;

/// Ordinal the engine's `fontSize` command is given before the rewrite.
pub const SENTINEL_FONT_SIZE: &str = "7";

/// Elements the engine produces for the sentinel ordinal.
pub const SENTINEL_SELECTOR: &str = r#"font[size="7"]"#;

/// Seed the surface with `html` if it is currently empty.
///
/// Returns whether the surface was written. The HTML goes in verbatim.
pub fn seed_initial_content<S: EditableSurface>(surface: &S, html: &str) -> Result<bool, EditorError> {
    if html.is_empty() {
        return Ok(false);
    }
    let current = surface.inner_html().ok_or(EditorError::NotMounted)?;
    if !current.is_empty() {
        return Ok(false);
    }
    surface.set_inner_html(html)?;
    Ok(true)
}

/// Apply the configured padding shorthand to the surface root.
pub fn apply_default_padding<S: EditableSurface>(surface: &S, padding: &str) -> Result<(), EditorError> {
    let root = surface.root().ok_or(EditorError::NotMounted)?;
    root.set_style("padding", padding)
}

/// Whether the surface has neither rendered text nor markup.
pub fn is_blank<S: EditableSurface>(surface: &S) -> bool {
    let text_empty = surface.inner_text().is_none_or(|t| t.is_empty());
    let html_empty = surface.inner_html().is_none_or(|h| h.is_empty());
    text_empty && html_empty
}

/// Replace the sentinel markers left by `fontSize 7` with an explicit pixel size.
///
/// Returns the number of elements rewritten.
pub fn rewrite_sentinel_font_size<S: EditableSurface>(surface: &S, size: &str) -> usize {
    let mut rewritten = 0;
    for element in surface.query_all(SENTINEL_SELECTOR) {
        let result = element
            .remove_attribute("size")
            .and_then(|()| element.set_style("font-size", size));
        match result {
            Ok(()) => rewritten += 1,
            Err(e) => tracing::warn!("font size rewrite failed: {}", e),
        }
    }
    rewritten
}
