//! Dropdown panels: text color, block padding and template variables.
//!
//! Every control acts on pointer-down with the default prevented, so the
//! selection inside the editor survives the click.

use dioxus::prelude::*;
use missive_editor_browser::{
    DEFAULT_COLOR, EditorAction, PRESET_COLORS, PaddingBox, PaddingStep, Side, SmolStr, Variable,
    css_to_hex,
};

/// Preset swatches plus a free color input pre-filled with the active color.
#[component]
pub fn ColorPanel(color: SmolStr, on_action: EventHandler<EditorAction>) -> Element {
    let custom = css_to_hex(&color).unwrap_or_else(|| DEFAULT_COLOR.to_string());

    rsx! {
        div { class: "missive-popup", style: "width: 220px;",
            div { class: "missive-label", "Presets" }
            div { class: "missive-grid",
                for preset in PRESET_COLORS {
                    button {
                        key: "{preset}",
                        r#type: "button",
                        class: "missive-color-swatch",
                        style: "background-color: {preset};",
                        title: preset,
                        onmousedown: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_action.call(EditorAction::SetColor(SmolStr::new_static(preset)));
                        },
                    }
                }
            }
            div { class: "missive-color-custom",
                div { class: "missive-label", "Custom" }
                input {
                    r#type: "color",
                    class: "missive-color-input",
                    title: "Choose custom color",
                    value: "{custom}",
                    onchange: move |evt: FormEvent| {
                        on_action.call(EditorAction::SetColor(evt.value().into()));
                    },
                }
            }
        }
    }
}

/// One row per side: decrease, current value, increase.
#[component]
pub fn PaddingPanel(padding: PaddingBox, on_action: EventHandler<EditorAction>) -> Element {
    rsx! {
        div { class: "missive-popup", style: "width: 200px;",
            div { class: "missive-label", "Padding (px)" }
            for side in Side::ALL {
                div { key: "{side.label()}", class: "missive-pad-row",
                    span { class: "missive-pad-label", "{side.label()}" }
                    div { class: "missive-pad-ctrl",
                        PaddingButton { side, step: PaddingStep::Decrease, on_action }
                        span { class: "missive-pad-val", "{padding.get(side)}" }
                        PaddingButton { side, step: PaddingStep::Increase, on_action }
                    }
                }
            }
        }
    }
}

#[component]
fn PaddingButton(side: Side, step: PaddingStep, on_action: EventHandler<EditorAction>) -> Element {
    let (title, glyph) = match step {
        PaddingStep::Increase => ("Increase", "+"),
        PaddingStep::Decrease => ("Decrease", "−"),
    };
    rsx! {
        button {
            r#type: "button",
            class: "missive-pad-btn",
            title,
            onmousedown: move |evt: MouseEvent| {
                evt.prevent_default();
                on_action.call(EditorAction::AdjustPadding { side, step });
            },
            "{glyph}"
        }
    }
}

/// The variable list, or an empty-state message.
#[component]
pub fn VariablesPanel(variables: Vec<Variable>, on_action: EventHandler<EditorAction>) -> Element {
    rsx! {
        div { class: "missive-popup", style: "width: 200px; padding: 0;",
            div { class: "missive-label missive-variables-header", "Insert Variable" }
            div { class: "missive-variables-list",
                if variables.is_empty() {
                    div { class: "missive-variables-empty", "No variables available" }
                } else {
                    for variable in variables.iter().cloned() {
                        VariableButton { key: "{variable.token}", variable, on_action }
                    }
                }
            }
        }
    }
}

#[component]
fn VariableButton(variable: Variable, on_action: EventHandler<EditorAction>) -> Element {
    let token = variable.token.clone();
    rsx! {
        button {
            r#type: "button",
            class: "missive-list-btn",
            onmousedown: move |evt: MouseEvent| {
                evt.prevent_default();
                on_action.call(EditorAction::InsertVariable(token.clone()));
            },
            "{variable.label}"
        }
    }
}
