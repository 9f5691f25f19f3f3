//! Hidden file input feeding local images into the editor as data URLs.

use dioxus::prelude::*;
use missive_editor_browser::{
    EditorAction, NoPrompt, clear_file_input, read_file_as_data_url, selected_file,
};

use super::handle::EditorHandle;

/// The `<input type="file">` behind the toolbar's image button.
///
/// The file is read asynchronously. Completion goes through a weak handle,
/// so an editor unmounted mid-read is left alone.
#[component]
pub(crate) fn ImageFileInput(input_id: String, handle: EditorHandle) -> Element {
    let on_file_change = {
        let input_id = input_id.clone();
        move |_evt: Event<FormData>| {
            let file = selected_file(&input_id);
            // Reset so picking the same file again still fires `change`.
            clear_file_input(&input_id);
            let Some(file) = file else {
                return;
            };
            let editor = handle.downgrade();
            spawn(async move {
                match read_file_as_data_url(&file).await {
                    Ok(src) => {
                        editor.run(|controller| {
                            controller.execute(&EditorAction::InsertImage { src }, &NoPrompt)
                        });
                    }
                    Err(e) => tracing::warn!("image not inserted: {}", e),
                }
            });
        }
    };

    rsx! {
        input {
            id: "{input_id}",
            r#type: "file",
            accept: "image/*",
            style: "display: none;",
            onchange: on_file_change,
        }
    }
}
