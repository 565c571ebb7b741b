use crate::error::FooterError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Storage, Window};

/// The browser `window`, as an error instead of a panic when there is none.
///
/// Host builds never touch the JS bindings and always report the window as missing.
///
/// # Errors
/// Returns [`FooterError::MissingGlobal`] when there is no browser window.
pub fn try_window() -> Result<Window, FooterError> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().ok_or(FooterError::MissingGlobal("window"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(FooterError::MissingGlobal("window"))
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Write one inline style property on `el`.
///
/// # Errors
/// Returns [`FooterError::StyleWrite`] if the browser rejects the write.
pub fn set_style(el: &HtmlElement, property: &'static str, value: &str) -> Result<(), FooterError> {
    el.style()
        .set_property(property, value)
        .map_err(|err| FooterError::StyleWrite {
            property,
            message: js_error_message(&err),
        })
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, FooterError> {
    try_window()?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(FooterError::MissingGlobal("localStorage"))
}
