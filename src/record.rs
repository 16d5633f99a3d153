//! Token record field handling
//!
//! Users paste records straight from their wallet. Some wallets export JSON,
//! others the plaintext Leo form, so parsing falls back to the raw text.

use crate::error::WasmAleoError;
use serde::Serialize;

/// A record value threaded into a private transition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordInput {
    /// Pasted text was valid JSON
    Structured(serde_json::Value),
    /// Anything else, passed through unchanged
    Opaque(String),
}

impl RecordInput {
    /// Try JSON first, keep the raw string otherwise
    pub fn parse(raw: &str) -> RecordInput {
        match serde_json::from_str(raw) {
            Ok(value) => RecordInput::Structured(value),
            Err(_) => RecordInput::Opaque(raw.to_string()),
        }
    }
}

/// Parse a raw record field; only an empty field is an error
pub fn parse_record(raw: &str) -> Result<RecordInput, WasmAleoError> {
    if raw.trim().is_empty() {
        return Err(WasmAleoError::MissingRecord);
    }
    Ok(RecordInput::parse(raw))
}
