//! The email editor component.
//!
//! Mirrors the controller's state into signals so the toolbar re-renders on
//! every synchronization, and leaves the surface's children entirely to the
//! browser: Dioxus never renders anything inside the `contenteditable` div.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use missive_editor_browser::{
    BrowserSurface, DEFAULT_PADDING, DEFAULT_PLACEHOLDER, EditableSurface, EditorConfig,
    EditorState, OutsidePointerListener, PanelAnchors, PanelSet, SelectionChangeListener, Variable,
    browser_controller, default_variables, open_file_picker,
};

use super::handle::EditorHandle;
use super::image_upload::ImageFileInput;
use super::styles::EDITOR_STYLES;
use super::toolbar::EditorToolbar;

static NEXT_EDITOR: AtomicUsize = AtomicUsize::new(0);

fn next_editor_id() -> String {
    format!("missive-editor-{}", NEXT_EDITOR.fetch_add(1, Ordering::Relaxed))
}

/// The root container class, with the host's extra class appended.
fn container_class(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|c| !c.is_empty()) {
        Some(extra) => format!("missive-container {extra}"),
        None => "missive-container".to_string(),
    }
}

fn editor_config(
    initial_value: &str,
    placeholder: &str,
    variables: &[Variable],
    default_padding: &str,
    class: Option<&str>,
    style: Option<&str>,
) -> EditorConfig {
    EditorConfig {
        class: class.map(str::to_string),
        style: style.map(str::to_string),
        ..EditorConfig::default()
            .with_initial_value(initial_value)
            .with_placeholder(placeholder)
            .with_variables(variables.to_vec())
            .with_default_padding(default_padding)
    }
}

/// WYSIWYG editor for email HTML.
///
/// `initial_value` and `default_padding` are applied once at mount; the
/// surface is the source of truth afterwards. `on_change` receives the
/// surface HTML after typing and after every toolbar action.
#[component]
pub fn EmailEditor(
    #[props(default)] initial_value: String,
    on_change: Option<EventHandler<String>>,
    style: Option<String>,
    class: Option<String>,
    #[props(default = DEFAULT_PLACEHOLDER.to_string(), into)] placeholder: String,
    #[props(default = default_variables())] variables: Vec<Variable>,
    #[props(default = DEFAULT_PADDING.to_string(), into)] default_padding: String,
) -> Element {
    let config = editor_config(
        &initial_value,
        &placeholder,
        &variables,
        &default_padding,
        class.as_deref(),
        style.as_deref(),
    );

    let editor_id = use_hook(next_editor_id);
    let file_input_id = format!("{editor_id}-image-input");
    let anchors = use_hook(|| PanelAnchors::for_editor(&editor_id));
    let state = use_signal(EditorState::default);
    let panels = use_signal(PanelSet::default);

    let handle = use_hook(|| {
        let mut controller = browser_controller(editor_id.clone());
        if let Some(on_change) = on_change {
            controller.set_change_callback(Some(Box::new(move |html: &str| {
                on_change.call(html.to_string())
            })));
        }
        EditorHandle::new(controller, state, panels)
    });

    // Seed content and padding once the surface element exists.
    use_effect({
        let handle = handle.clone();
        let config = config.clone();
        move || {
            tracing::debug!(target: "missive::ui", "mounting editor surface");
            handle.run(|controller| controller.mount(&config));
        }
    });

    // Lives as long as the component; dropping it unsubscribes.
    use_hook({
        let handle = handle.clone();
        let anchors = anchors.clone();
        move || {
            let subscription = OutsidePointerListener::subscribe(move |target| {
                handle.run(|controller| {
                    controller.dismiss_panels(|panel| anchors.contains(panel, target));
                });
            });
            match subscription {
                Ok(listener) => Some(Rc::new(listener)),
                Err(e) => {
                    tracing::warn!("dropdowns will not close on outside clicks: {}", e);
                    None
                }
            }
        }
    });

    // Selection can move without a key or mouse event on the surface itself.
    use_hook({
        let handle = handle.clone();
        move || match SelectionChangeListener::subscribe(move || {
            handle.run(|controller| controller.synchronize())
        }) {
            Ok(listener) => Some(Rc::new(listener)),
            Err(e) => {
                tracing::warn!("toolbar will only resync on surface events: {}", e);
                None
            }
        }
    });

    let surface = BrowserSurface::new(editor_id.clone());
    let picker_input_id = file_input_id.clone();
    let view = state();
    let (placeholder_top, placeholder_left) = view.placeholder_offset();

    rsx! {
        document::Style { {EDITOR_STYLES} }
        div {
            class: container_class(config.class.as_deref()),
            style: config.style.clone().unwrap_or_default(),

            ImageFileInput { input_id: file_input_id, handle: handle.clone() }

            EditorToolbar {
                state: view.clone(),
                panels: panels(),
                variables: config.variables.clone(),
                anchors: anchors.clone(),
                on_action: {
                    let handle = handle.clone();
                    move |action| handle.execute(action)
                },
                on_toggle_panel: {
                    let handle = handle.clone();
                    move |panel| handle.run(|controller| controller.toggle_panel(panel))
                },
                on_pick_image: move |_| open_file_picker(&picker_input_id),
            }

            div {
                class: "missive-editor-area",
                onclick: move |_| surface.focus(),
                div {
                    id: "{editor_id}",
                    class: "missive-content",
                    contenteditable: "true",
                    oninput: {
                        let handle = handle.clone();
                        move |_| handle.run(|controller| controller.handle_input())
                    },
                    onkeyup: {
                        let handle = handle.clone();
                        move |_| handle.run(|controller| controller.synchronize())
                    },
                    onmouseup: {
                        let handle = handle.clone();
                        move |_| handle.run(|controller| controller.synchronize())
                    },
                }
                if view.is_empty {
                    div {
                        class: "missive-placeholder",
                        style: "top: {placeholder_top}px; left: {placeholder_left}px;",
                        "{config.placeholder}"
                    }
                }
            }
        }
    }
}
