//! Selection/format state synchronization.
//!
//! Reads the live selection through the engine and republishes it as an
//! [`EditorState`]. Runs after every keystroke, mouse-up and mutation.

use smol_str::SmolStr;

use crate::actions::Command;
use crate::node::{DomNode, anchor_element, find_nearest_block};
use crate::padding::PaddingBox;
use crate::platform::{EditableSurface, RichTextEngine};
use crate::state::{EditorState, FormattingState};
use crate::surface::is_blank;

/// Recompute the toolbar state from the engine and surface.
///
/// With no selection the previous state is kept; only the blank flag, which
/// depends on the surface alone, is refreshed.
pub fn synchronize<E, S>(engine: &E, surface: &S, previous: &EditorState) -> EditorState
where
    E: RichTextEngine,
    S: EditableSurface<Node = E::Node>,
{
    let mut state = previous.clone();
    state.is_empty = is_blank(surface);

    let Some(anchor) = engine.selection_anchor() else {
        tracing::trace!(target: "missive::sync", "no selection, keeping previous state");
        return state;
    };

    state.formats = Command::TRACKED
        .into_iter()
        .filter(|command| engine.query_active(*command))
        .collect::<FormattingState>();

    if let Some(family) = engine.query_value(Command::FontName).filter(|v| !v.is_empty()) {
        state.font_family = strip_quotes(&family);
    }

    if let Some(size) = anchor_element(&anchor).and_then(|el| el.computed_style("font-size")) {
        state.font_size = SmolStr::new(size);
    }

    if let Some(color) = engine.query_value(Command::ForeColor).filter(|v| !v.is_empty()) {
        state.color = SmolStr::new(color);
    }

    if let Some(block) = surface
        .root()
        .and_then(|root| find_nearest_block(&anchor, &root))
    {
        state.padding = PaddingBox::read(&block);
    }

    tracing::trace!(
        target: "missive::sync",
        formats = ?state.formats.iter().collect::<Vec<_>>(),
        font = %state.font_family,
        size = %state.font_size,
        padding = ?state.padding,
        "synchronized formatting state"
    );
    state
}

/// Font family names come back quoted when they contain spaces.
fn strip_quotes(family: &str) -> SmolStr {
    family.chars().filter(|c| *c != '"' && *c != '\'').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::Side;
    use crate::testing::MemDom;

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"Times New Roman\""), "Times New Roman");
        assert_eq!(strip_quotes("'Courier New', monospace"), "Courier New, monospace");
    }

    #[test]
    fn test_reads_formats_font_color_and_padding() {
        let dom = MemDom::new();
        let root = dom.root();
        let ul = dom.element(&root, "ul");
        let li = dom.element(&ul, "li");
        li.set_style("padding-left", "12px").unwrap();
        li.set_style("padding-bottom", "3.5px").unwrap();
        let b = dom.element(&li, "b");
        let text = dom.text(&b, "item");
        dom.select(&text);
        dom.set_active(Command::Bold);
        dom.set_active(Command::InsertUnorderedList);
        dom.set_value(Command::FontName, "\"Trebuchet MS\"");
        dom.set_value(Command::ForeColor, "rgb(239, 68, 68)");

        let state = synchronize(&dom.engine(), &dom.surface(), &EditorState::default());

        assert!(state.is_active(Command::Bold));
        assert!(state.is_active(Command::InsertUnorderedList));
        assert!(!state.is_active(Command::Italic));
        assert_eq!(state.font_family, "Trebuchet MS");
        assert_eq!(state.font_size, "16px");
        assert_eq!(state.color, "rgb(239, 68, 68)");
        assert_eq!(state.padding.get(Side::Left), 12);
        assert_eq!(state.padding.get(Side::Bottom), 3);
        assert_eq!(state.padding.get(Side::Top), 0);
    }

    #[test]
    fn test_no_selection_keeps_previous() {
        let dom = MemDom::new();
        dom.set_active(Command::Italic);
        let mut previous = EditorState::default();
        previous.font_family = SmolStr::new("Georgia");
        previous.padding.set(Side::Top, 9);

        let state = synchronize(&dom.engine(), &dom.surface(), &previous);
        assert_eq!(state.font_family, "Georgia");
        assert_eq!(state.padding.get(Side::Top), 9);
        assert!(!state.is_active(Command::Italic));
        assert!(state.is_empty);
    }

    #[test]
    fn test_empty_font_value_is_ignored() {
        let dom = MemDom::new();
        let root = dom.root();
        let text = dom.text(&root, "x");
        dom.select(&text);
        dom.set_value(Command::FontName, "");

        let state = synchronize(&dom.engine(), &dom.surface(), &EditorState::default());
        assert_eq!(state.font_family, "Arial");
    }
}
