//! WASM bindings for wasm-aleo
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod actions;
pub mod builder;
mod constants;
pub mod try_into_js_value;
pub mod wallet;

// Re-export WASM types
pub use actions::WasmTokenActions;
pub use builder::BuilderNamespace;
pub use wallet::JsWallet;

pub use constants::*;
