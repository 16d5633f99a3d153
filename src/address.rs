//! Aleo address checks
//!
//! Only the surface shape is checked here: 63 characters, `aleo1` prefix,
//! ASCII alphanumeric throughout. Bech32 checksum verification belongs to
//! the wallet.

use crate::error::WasmAleoError;
use core::fmt;
use core::str::FromStr;
use serde::Serialize;

/// Human-readable prefix of every Aleo account address
pub const ADDRESS_PREFIX: &str = "aleo1";

/// Total address length including the prefix
pub const ADDRESS_LENGTH: usize = 63;

/// A recipient address that passed [`parse_address`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = WasmAleoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a raw recipient field
pub fn parse_address(raw: &str) -> Result<Address, WasmAleoError> {
    if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(WasmAleoError::InvalidAddress(
            "address must be alphanumeric".to_string(),
        ));
    }
    // All ASCII from here, so byte length is character length
    if raw.len() != ADDRESS_LENGTH {
        return Err(WasmAleoError::InvalidAddress(format!(
            "address must be {} characters, got {}",
            ADDRESS_LENGTH,
            raw.len()
        )));
    }
    if !raw.starts_with(ADDRESS_PREFIX) {
        return Err(WasmAleoError::InvalidAddress(format!(
            "address must start with {}",
            ADDRESS_PREFIX
        )));
    }
    Ok(Address(raw.to_string()))
}

/// Check a raw recipient field without keeping the result
pub fn validate_address(raw: &str) -> bool {
    parse_address(raw).is_ok()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const RECIPIENT: &str =
        "aleo1rhgdu77hgyqd3xjj8ucu3jj9r2krwz6mnzyd80gncr5fxcwlh5rsvzp9px";

    #[test]
    fn test_valid_address() {
        assert_eq!(RECIPIENT.len(), 63);
        let address = parse_address(RECIPIENT).unwrap();
        assert_eq!(address.as_str(), RECIPIENT);
        assert!(validate_address(RECIPIENT));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!validate_address(&RECIPIENT[..62]));
        assert!(!validate_address(&format!("{}q", RECIPIENT)));
        assert!(!validate_address(""));
    }

    #[test]
    fn test_wrong_prefix() {
        let swapped = format!("aleo2{}", &RECIPIENT[5..]);
        assert_eq!(swapped.len(), 63);
        assert!(!validate_address(&swapped));
    }

    #[test]
    fn test_non_alphanumeric() {
        let dashed = format!("{}-", &RECIPIENT[..62]);
        assert!(matches!(
            parse_address(&dashed),
            Err(WasmAleoError::InvalidAddress(_))
        ));
        let spaced = format!("{} ", &RECIPIENT[..62]);
        assert!(!validate_address(&spaced));
        // Multibyte characters must not sneak through the length check
        let accented = format!("{}é", &RECIPIENT[..61]);
        assert!(!validate_address(&accented));
    }

    #[test]
    fn test_serializes_as_string() {
        let address = parse_address(RECIPIENT).unwrap();
        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            serde_json::Value::String(RECIPIENT.to_string())
        );
    }
}
