//! Error type shared by the browser bindings.
//!
//! Nothing here is ever shown to the visitor. Missing DOM elements are not
//! errors at all (the owning controller just skips itself); `UiError` covers
//! the cases where the browser environment itself misbehaves, and the
//! initializer logs it and moves on to the next controller.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// No global `window` (not running in a browser main thread).
    #[error("window is not available")]
    NoWindow,

    /// The window has no document attached.
    #[error("document is not available")]
    NoDocument,

    /// A DOM or JS call threw.
    #[error("js exception: {0}")]
    Js(String),

    /// The embedded configuration block could not be parsed.
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T> = std::result::Result<T, UiError>;

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
