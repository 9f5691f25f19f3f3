//! Demo page: one editor plus a live view of the HTML it reports.

use dioxus::prelude::*;
use missive_editor::EmailEditor;
use missive_editor::missive_editor_browser::EditorConfig;

const DEMO_CONFIG: &str = include_str!("../demo.json");

fn main() {
    // Set up better panic messages for wasm
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // Must happen before dioxus::launch so dioxus skips its own init
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        let _ = set_global_default(Registry::default().with(wasm_layer));
    }

    dioxus::launch(App);
}

fn demo_config() -> EditorConfig {
    match serde_json::from_str(DEMO_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("demo config unreadable, using defaults: {}", e);
            EditorConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(demo_config);
    let mut html = use_signal(String::new);

    rsx! {
        main { style: "max-width: 800px; margin: 40px auto; font-family: system-ui, sans-serif;",
            h1 { "Email editor" }
            EmailEditor {
                initial_value: config.initial_value.clone(),
                placeholder: config.placeholder.to_string(),
                variables: config.variables.clone(),
                default_padding: config.default_padding.to_string(),
                style: "min-height: 420px;",
                on_change: move |value: String| html.set(value),
            }
            h2 { style: "margin-top: 32px;", "HTML" }
            pre {
                style: "white-space: pre-wrap; background: #f9fafb; padding: 12px; border-radius: 6px;",
                "{html}"
            }
        }
    }
}
