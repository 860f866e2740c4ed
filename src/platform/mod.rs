//! Platform-specific implementations of the host capabilities.

#[cfg(target_arch = "wasm32")]
pub mod web;
