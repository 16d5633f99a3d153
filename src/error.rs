//! Error types for wasm-aleo

use crate::program::Operation;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-aleo operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WasmAleoError {
    /// No connected wallet, public key, or submit capability
    #[error("No wallet connected")]
    MissingSession,
    /// Amount field is not an integer in 1..=255
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// Recipient field is not a well-formed address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    /// Record field was left empty
    #[error("Missing token record")]
    MissingRecord,
    /// The form already has a request in flight
    #[error("Submission already in progress")]
    SubmissionInProgress,
    /// The wallet rejected or failed the request; the cause is only logged
    #[error("Submission failed")]
    SubmissionFailed,
    /// Malformed arguments or configuration
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WasmAleoError {
    /// True for errors raised while checking form fields
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WasmAleoError::InvalidAmount(_)
                | WasmAleoError::InvalidAddress(_)
                | WasmAleoError::MissingRecord
        )
    }

    /// Alert text shown to the user for this error
    pub fn notice(&self, operation: Operation) -> String {
        match self {
            WasmAleoError::MissingSession => "No wallet connected".to_string(),
            WasmAleoError::InvalidAmount(_) => "Enter a valid token amount (u8)".to_string(),
            WasmAleoError::InvalidAddress(_) => "Enter a valid address".to_string(),
            WasmAleoError::MissingRecord => "Paste a token record JSON".to_string(),
            WasmAleoError::SubmissionInProgress => "A transaction is already being submitted".to_string(),
            WasmAleoError::SubmissionFailed => {
                format!("{} failed. See console for details.", operation.label())
            }
            WasmAleoError::InvalidInput(s) => s.clone(),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for WasmAleoError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WasmAleoError::InvalidInput(err.to_string())
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<WasmAleoError> for JsValue {
    fn from(err: WasmAleoError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
