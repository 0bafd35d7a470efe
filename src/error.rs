//! UI Errors
//!
//! Failures raised while looking up or mutating page elements.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    /// A required element id did not resolve
    #[error("no element with id `{id}`")]
    MissingElement { id: String },

    /// Element lacks a `data-*` attribute it was expected to carry
    #[error("{element} has no `data-{attribute}` attribute")]
    MissingData { element: String, attribute: String },

    #[error("{element} is not an input element")]
    NotAnInput { element: String },

    #[error("{element} is not a form element")]
    NotAForm { element: String },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// A DOM or JS call threw
    #[error("js error: {0}")]
    Js(String),
}

impl UiError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    /// Wrap a thrown JS value, keeping its message when it has one
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js(message)
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
