//! Async Clipboard API

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ()).map_err(clipboard_error)
}

fn clipboard_error(err: JsValue) -> String {
    js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "Clipboard write was refused".to_string())
}
