use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use crate::error::AppError;

/// Escreve texto na área de transferência (navigator.clipboard.writeText)
pub async fn write_text(text: &str) -> Result<(), AppError> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::IntegrationUnavailable("window".to_string()))?;
    let navigator = window.navigator();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(AppError::IntegrationUnavailable("clipboard".to_string()));
    }

    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: Promise = write.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}
