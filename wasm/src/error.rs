//! Error types for the browser adapter

use thiserror::Error;

/// Failures at the browser boundary
///
/// Converted into a JS `Error` by `wasm_bindgen` when returned from an
/// exported function.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("No global window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}
