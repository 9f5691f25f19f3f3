//! Editor toolbar: history, font selects, dropdown panels and formatting buttons.

use dioxus::prelude::*;
use missive_editor_browser::{
    BlockFormat, Command, EditorAction, EditorState, FONT_FAMILIES, FONT_SIZES, Panel,
    PanelAnchors, PanelSet, Variable, indicator_color,
};

use super::panels::{ColorPanel, PaddingPanel, VariablesPanel};

const VARIABLES_GLYPH: &str = "{…}";

const INLINE_FORMATS: [(Command, &str, &str); 4] = [
    (Command::Bold, "Bold", "B"),
    (Command::Italic, "Italic", "I"),
    (Command::Underline, "Underline", "U"),
    (Command::StrikeThrough, "Strikethrough", "S"),
];

const ALIGNMENTS: [(Command, &str, &str); 4] = [
    (Command::JustifyLeft, "Align Left", "⇤"),
    (Command::JustifyCenter, "Align Center", "≡"),
    (Command::JustifyRight, "Align Right", "⇥"),
    (Command::JustifyFull, "Justify", "☰"),
];

const LISTS: [(Command, &str, &str); 2] = [
    (Command::InsertUnorderedList, "Bullet List", "•"),
    (Command::InsertOrderedList, "Ordered List", "1."),
];

const HEADINGS: [(BlockFormat, &str, &str); 3] = [
    (BlockFormat::Heading1, "Heading 1", "H1"),
    (BlockFormat::Heading2, "Heading 2", "H2"),
    (BlockFormat::Paragraph, "Paragraph", "¶"),
];

/// Editor toolbar.
///
/// Buttons report [`EditorAction`]s; the panel toggles and the image picker
/// have their own callbacks since they do not touch the document.
#[component]
pub fn EditorToolbar(
    state: EditorState,
    panels: PanelSet,
    variables: Vec<Variable>,
    anchors: PanelAnchors,
    on_action: EventHandler<EditorAction>,
    on_toggle_panel: EventHandler<Panel>,
    on_pick_image: EventHandler<()>,
) -> Element {
    let exec = move |command: Command| move |_: ()| on_action.call(EditorAction::command(command));
    let tint = indicator_color(&state.color).unwrap_or("inherit").to_string();

    rsx! {
        div { class: "missive-toolbar",
            div { class: "missive-group",
                ToolbarButton { title: "Undo", glyph: "↶", on_press: exec(Command::Undo) }
                ToolbarButton { title: "Redo", glyph: "↷", on_press: exec(Command::Redo) }
            }

            div { class: "missive-group",
                div { class: "missive-select-wrapper",
                    select {
                        class: "missive-select",
                        title: "Font Family",
                        style: "width: 130px; font-family: {state.font_family};",
                        value: "{state.font_family}",
                        onchange: move |evt: FormEvent| {
                            on_action.call(EditorAction::SetFontFamily(evt.value().into()));
                        },
                        for font in FONT_FAMILIES {
                            option {
                                key: "{font.value}",
                                value: font.value,
                                style: "font-family: {font.value};",
                                selected: state.font_family == font.value,
                                "{font.label}"
                            }
                        }
                    }
                    span { class: "missive-chevron", "▾" }
                }
            }

            div { class: "missive-group",
                div { class: "missive-select-wrapper",
                    select {
                        class: "missive-select",
                        title: "Font Size",
                        style: "width: 80px;",
                        value: "{state.font_size}",
                        onchange: move |evt: FormEvent| {
                            on_action.call(EditorAction::SetFontSize(evt.value().into()));
                        },
                        for size in FONT_SIZES {
                            option {
                                key: "{size.value}",
                                value: size.value,
                                selected: state.font_size == size.value,
                                "{size.label}"
                            }
                        }
                    }
                    span { class: "missive-chevron", "▾" }
                }
            }

            div { id: anchors.id(Panel::Padding), class: "missive-group missive-dropdown",
                PanelToggle {
                    title: "Padding & Spacing",
                    glyph: "⤢",
                    open: panels.is_open(Panel::Padding),
                    on_toggle: move |_| on_toggle_panel.call(Panel::Padding),
                }
                if panels.is_open(Panel::Padding) {
                    PaddingPanel { padding: state.padding, on_action }
                }
            }

            div { id: anchors.id(Panel::Color), class: "missive-group missive-dropdown",
                PanelToggle {
                    title: "Text Color",
                    glyph: "A",
                    tint,
                    open: panels.is_open(Panel::Color),
                    on_toggle: move |_| on_toggle_panel.call(Panel::Color),
                }
                if panels.is_open(Panel::Color) {
                    ColorPanel { color: state.color.clone(), on_action }
                }
            }

            div { id: anchors.id(Panel::Variables), class: "missive-group missive-dropdown",
                PanelToggle {
                    title: "Insert Variable",
                    glyph: VARIABLES_GLYPH,
                    open: panels.is_open(Panel::Variables),
                    on_toggle: move |_| on_toggle_panel.call(Panel::Variables),
                }
                if panels.is_open(Panel::Variables) {
                    VariablesPanel { variables: variables.clone(), on_action }
                }
            }

            div { class: "missive-group",
                for (format, title, glyph) in HEADINGS {
                    ToolbarButton {
                        key: "{title}",
                        title,
                        glyph,
                        on_press: move |_| on_action.call(EditorAction::FormatBlock(format)),
                    }
                }
            }

            div { class: "missive-group",
                for (command, title, glyph) in INLINE_FORMATS {
                    ToolbarButton {
                        key: "{title}",
                        title,
                        glyph,
                        active: state.is_active(command),
                        on_press: exec(command),
                    }
                }
            }

            div { class: "missive-group",
                for (command, title, glyph) in ALIGNMENTS {
                    ToolbarButton {
                        key: "{title}",
                        title,
                        glyph,
                        active: state.is_active(command),
                        on_press: exec(command),
                    }
                }
            }

            div { class: "missive-group",
                for (command, title, glyph) in LISTS {
                    ToolbarButton {
                        key: "{title}",
                        title,
                        glyph,
                        active: state.is_active(command),
                        on_press: exec(command),
                    }
                }
            }

            div { class: "missive-group",
                ToolbarButton {
                    title: "Link",
                    glyph: "🔗",
                    on_press: move |_| on_action.call(EditorAction::InsertLink),
                }
                ToolbarButton {
                    title: "Image",
                    glyph: "🖼",
                    on_press: move |_| on_pick_image.call(()),
                }
                ToolbarButton {
                    title: "Image from URL",
                    glyph: "🌐",
                    on_press: move |_| on_action.call(EditorAction::InsertImageUrl),
                }
                ToolbarButton {
                    title: "Quote",
                    glyph: "❝",
                    on_press: move |_| on_action.call(EditorAction::FormatBlock(BlockFormat::Quote)),
                }
                ToolbarButton {
                    title: "Clear Formatting",
                    glyph: "⌫",
                    on_press: exec(Command::RemoveFormat),
                }
            }
        }
    }
}

/// A toolbar button that fires on pointer-down so the editor keeps its selection.
#[component]
fn ToolbarButton(
    title: &'static str,
    glyph: &'static str,
    #[props(default)] active: bool,
    on_press: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if active { "missive-btn active" } else { "missive-btn" },
            title,
            onmousedown: move |evt: MouseEvent| {
                evt.prevent_default();
                on_press.call(());
            },
            "{glyph}"
        }
    }
}

/// Opens and closes a dropdown panel.
#[component]
fn PanelToggle(
    title: &'static str,
    glyph: &'static str,
    open: bool,
    #[props(default = "inherit".to_string())] tint: String,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if open { "missive-btn active" } else { "missive-btn" },
            title,
            style: "color: {tint};",
            onclick: move |_| on_toggle.call(()),
            "{glyph}"
        }
    }
}
