//! Image acquisition: URL prompts and local files read into data URLs.

use js_sys::Uint8Array;
use missive_editor_core::{EditorError, PromptPlatform, to_data_url};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// `window.prompt` as a [`PromptPlatform`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl PromptPlatform for BrowserPrompt {
    fn prompt(&self, message: &str) -> Option<String> {
        let window = web_sys::window()?;
        match window.prompt_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("prompt failed: {:?}", e);
                None
            }
        }
    }
}

fn file_input(id: &str) -> Option<web_sys::HtmlInputElement> {
    gloo_utils::document()
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
}

/// Open the native file chooser behind a hidden `<input type="file">`.
pub fn open_file_picker(input_id: &str) {
    match file_input(input_id) {
        Some(input) => input.click(),
        None => tracing::warn!(input_id, "file input not found"),
    }
}

/// The first file currently selected in a file input.
pub fn selected_file(input_id: &str) -> Option<web_sys::File> {
    file_input(input_id)?.files()?.get(0)
}

/// Reset a file input so choosing the same file again fires `change`.
pub fn clear_file_input(input_id: &str) {
    if let Some(input) = file_input(input_id) {
        input.set_value("");
    }
}

/// Read a file fully and encode it as a `data:` URL.
pub async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, EditorError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| EditorError::File(format!("{} could not be read: {:?}", file.name(), e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    let declared = file.type_();
    let declared = (!declared.is_empty()).then_some(declared.as_str());
    tracing::debug!(
        target: "missive::image",
        name = %file.name(),
        bytes = bytes.len(),
        ?declared,
        "read image file"
    );
    Ok(to_data_url(&bytes, declared))
}
