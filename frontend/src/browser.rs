//! Thin wrappers over the browser APIs the pages need.

use chrono::{DateTime, Utc};
use shared::models::Theme;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys;
use web_sys::wasm_bindgen::{JsCast, JsValue};

/// Copy failures are logged only; the pages give no feedback for them.
pub async fn copy_to_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    if let Err(e) = JsFuture::from(promise).await {
        tracing::warn!("Failed to copy to clipboard: {:?}", e);
    }
}

/// Offers `contents` as a JSON file download.
pub fn download_json(file_name: &str, contents: &[u8]) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let link: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    web_sys::Url::revoke_object_url(&url)
}

pub async fn read_file(file: web_sys::File) -> Result<Vec<u8>, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root
        && let Err(e) = root.set_attribute("data-theme", theme.as_str())
    {
        tracing::warn!("Failed to apply theme: {:?}", e);
    }
}
