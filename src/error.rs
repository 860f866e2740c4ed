//! Error types used by the crate.

use thiserror::Error;

/// Diagnostic shown when the host page did not supply an element builder.
///
/// Names the script the host page loads for this capability and how to
/// install it.
pub const ELEMENT_BUILDER_MISSING_MESSAGE: &str = "Error: jquery could not be loaded.\n\
    Please ensure that is it present by running \"npm install\" within directory \"web\".";

/// Diagnostic shown when the host page did not supply a map provider.
pub const MAP_PROVIDER_MISSING_MESSAGE: &str = "Error: leaflet could not be loaded.\n\
    Please ensure that is it present by running \"npm install\" within directory \"web\".";

/// Agent map error type.
#[derive(Debug, Error)]
pub enum AgentMapError {
    /// No element builder capability was injected before `build`.
    #[error("{}", ELEMENT_BUILDER_MISSING_MESSAGE)]
    ElementBuilderMissing,
    /// No map provider capability was injected before `build`.
    #[error("{}", MAP_PROVIDER_MISSING_MESSAGE)]
    MapProviderMissing,
    /// Error interacting with WASM runtime.
    #[cfg(target_arch = "wasm32")]
    #[error("wasm error: {0:?}")]
    Wasm(Option<String>),
    /// Generic error - details are inside.
    #[error("{0}")]
    Generic(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for AgentMapError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        AgentMapError::Wasm(Some(format!("{value:?}")))
    }
}
