//! Formatting state snapshot published to the toolbar.

use smol_str::SmolStr;

use crate::actions::Command;
use crate::color::DEFAULT_COLOR;
use crate::config::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, PLACEHOLDER_FALLBACK_OFFSET};
use crate::padding::PaddingBox;

/// Set of tracked commands the engine reports as active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingState {
    bits: u16,
}

impl FormattingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a command active. Untracked commands are ignored.
    pub fn insert(&mut self, command: Command) {
        if let Some(i) = command.tracked_index() {
            self.bits |= 1 << i;
        }
    }

    pub fn contains(&self, command: Command) -> bool {
        command
            .tracked_index()
            .is_some_and(|i| self.bits & (1 << i) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Active commands, in toolbar order.
    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        Command::TRACKED
            .into_iter()
            .filter(move |command| self.contains(*command))
    }
}

impl FromIterator<Command> for FormattingState {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        let mut state = Self::new();
        for command in iter {
            state.insert(command);
        }
        state
    }
}

/// Everything the toolbar shows about the current selection.
///
/// Always a projection of the live surface at the last synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub formats: FormattingState,
    /// Font family at the selection, quotes stripped.
    pub font_family: SmolStr,
    /// Computed font size of the selection's element, e.g. `"16px"`.
    pub font_size: SmolStr,
    /// Foreground color as reported by the engine.
    pub color: SmolStr,
    /// Padding of the block nearest the cursor.
    pub padding: PaddingBox,
    /// The surface has neither text nor markup.
    pub is_empty: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            formats: FormattingState::default(),
            font_family: SmolStr::new_static(DEFAULT_FONT_FAMILY),
            font_size: SmolStr::new_static(DEFAULT_FONT_SIZE),
            color: SmolStr::new_static(DEFAULT_COLOR),
            padding: PaddingBox::default(),
            is_empty: true,
        }
    }
}

impl EditorState {
    pub fn is_active(&self, command: Command) -> bool {
        self.formats.contains(command)
    }

    /// Placeholder position as `(top, left)` pixels: the block padding, or
    /// the fallback offset where that padding is zero.
    pub fn placeholder_offset(&self) -> (u32, u32) {
        let or_fallback = |v: u32| if v == 0 { PLACEHOLDER_FALLBACK_OFFSET } else { v };
        (or_fallback(self.padding.top), or_fallback(self.padding.left))
    }
}
