//! Error type shared by configuration, storage, and DOM glue.
//!
//! Missing markup is not an error: a behavior whose elements are absent
//! attaches nothing. These variants cover the environment itself being
//! unusable or a DOM call throwing.

#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("invalid behavior config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("dom call failed: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BehaviorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
