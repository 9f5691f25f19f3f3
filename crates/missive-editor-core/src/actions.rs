//! Editor actions and native command names.
//!
//! `Command` is the vocabulary of the rich-text engine (the browser's
//! `execCommand` names). `EditorAction` is what the toolbar asks for; most
//! actions map straight onto a command, a few need bespoke handling in the
//! controller.

use smol_str::SmolStr;

use crate::padding::{PaddingStep, Side};

/// Native formatting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // === Inline toggles ===
    Bold,
    Italic,
    Underline,
    StrikeThrough,

    // === Alignment ===
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    JustifyFull,

    // === Lists ===
    InsertUnorderedList,
    InsertOrderedList,

    // === History ===
    Undo,
    Redo,

    // === Valued ===
    FontName,
    FontSize,
    ForeColor,
    FormatBlock,
    CreateLink,
    InsertImage,
    InsertText,

    RemoveFormat,
}

impl Command {
    /// Commands whose active state is reflected in the toolbar.
    pub const TRACKED: [Command; 10] = [
        Command::Bold,
        Command::Italic,
        Command::Underline,
        Command::StrikeThrough,
        Command::JustifyLeft,
        Command::JustifyCenter,
        Command::JustifyRight,
        Command::JustifyFull,
        Command::InsertUnorderedList,
        Command::InsertOrderedList,
    ];

    /// The engine's name for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Bold => "bold",
            Command::Italic => "italic",
            Command::Underline => "underline",
            Command::StrikeThrough => "strikeThrough",
            Command::JustifyLeft => "justifyLeft",
            Command::JustifyCenter => "justifyCenter",
            Command::JustifyRight => "justifyRight",
            Command::JustifyFull => "justifyFull",
            Command::InsertUnorderedList => "insertUnorderedList",
            Command::InsertOrderedList => "insertOrderedList",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::FontName => "fontName",
            Command::FontSize => "fontSize",
            Command::ForeColor => "foreColor",
            Command::FormatBlock => "formatBlock",
            Command::CreateLink => "createLink",
            Command::InsertImage => "insertImage",
            Command::InsertText => "insertText",
            Command::RemoveFormat => "removeFormat",
        }
    }

    /// Bit position in [`FormattingState`](crate::state::FormattingState), for tracked commands.
    pub(crate) fn tracked_index(&self) -> Option<usize> {
        Self::TRACKED.iter().position(|c| c == self)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block formats offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    Heading1,
    Heading2,
    Paragraph,
    Quote,
}

impl BlockFormat {
    /// Value passed to `formatBlock`.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockFormat::Heading1 => "H1",
            BlockFormat::Heading2 => "H2",
            BlockFormat::Paragraph => "P",
            BlockFormat::Quote => "BLOCKQUOTE",
        }
    }
}

/// Everything the toolbar can ask the editor to do.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Dispatch a native command unmodified.
    Exec {
        command: Command,
        value: Option<SmolStr>,
    },
    FormatBlock(BlockFormat),
    SetFontFamily(SmolStr),
    /// Pixel font size, e.g. `"24px"`. Applied through the sentinel rewrite.
    SetFontSize(SmolStr),
    SetColor(SmolStr),
    AdjustPadding {
        side: Side,
        step: PaddingStep,
    },
    InsertVariable(SmolStr),
    /// Prompt for a URL and link the selection to it.
    InsertLink,
    /// Prompt for an image URL and insert it.
    InsertImageUrl,
    /// Insert an image whose source is already known (e.g. a data URL).
    InsertImage { src: String },
}

impl EditorAction {
    /// A bare native command with no value.
    pub fn command(command: Command) -> Self {
        EditorAction::Exec {
            command,
            value: None,
        }
    }
}
