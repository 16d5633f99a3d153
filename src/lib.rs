//! wasm-aleo: WASM module for Aleo token transaction requests
//!
//! This crate provides:
//! - Form field validation (amounts, recipient addresses, token records)
//! - Transaction request building for the workshop token program
//! - Per-form submission through a browser wallet's `requestTransaction`
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`

pub mod actions;
pub mod address;
pub mod amount;
pub mod builder;
pub mod config;
pub mod error;
pub mod form;
pub mod program;
pub mod record;
pub mod request;
pub mod session;
pub mod wasm;

// Re-export main types for convenience
pub use actions::TokenActions;
pub use address::{parse_address, validate_address, Address};
pub use amount::{parse_amount, validate_amount, Amount};
pub use builder::types::{TransactionIntent, ValidatedFields};
pub use builder::{build_request, build_transaction, validate_intent};
pub use config::{BuildConfig, FeePolicy, Network, WalletConfig};
pub use error::WasmAleoError;
pub use form::{FormState, Outcome, TransactionForm};
pub use program::Operation;
pub use record::RecordInput;
pub use request::{TransactionRequest, Transition, TransitionInput};
pub use session::{TransactionId, WalletRejection, WalletSession};
