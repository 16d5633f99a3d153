//! Token amount parsing
//!
//! The workshop program takes its amounts as `u8`, so a form amount must be
//! a whole number in `1..=255`. Parsing accepts the spellings JS `Number()`
//! accepts (`"10"`, `" 10 "`, `"1e2"`, unsigned `"0x0a"`/`"0o12"`/`"0b1010"`),
//! then narrows.

use crate::error::WasmAleoError;
use core::fmt;
use core::str::FromStr;

/// A validated, non-zero `u8` token amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u8);

impl Amount {
    /// Get the raw value
    pub fn value(self) -> u8 {
        self.0
    }

    /// Typed Aleo literal for a transition input, e.g. `"10u8"`
    pub fn to_literal(self) -> String {
        format!("{}u8", self.0)
    }
}

impl TryFrom<u8> for Amount {
    type Error = WasmAleoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(WasmAleoError::InvalidAmount(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(Amount(value))
    }
}

impl FromStr for Amount {
    type Err = WasmAleoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_amount(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a raw form amount
pub fn parse_amount(raw: &str) -> Result<Amount, WasmAleoError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WasmAleoError::InvalidAmount("amount is empty".to_string()));
    }

    let n = parse_number(trimmed)
        .ok_or_else(|| WasmAleoError::InvalidAmount(format!("not a number: {}", trimmed)))?;

    if !n.is_finite() {
        return Err(WasmAleoError::InvalidAmount(format!(
            "not a finite number: {}",
            trimmed
        )));
    }
    if n <= 0.0 {
        return Err(WasmAleoError::InvalidAmount(format!(
            "amount must be greater than zero, got {}",
            trimmed
        )));
    }
    if n > u8::MAX as f64 {
        return Err(WasmAleoError::InvalidAmount(format!(
            "amount exceeds u8 range, got {}",
            trimmed
        )));
    }
    if n.fract() != 0.0 {
        return Err(WasmAleoError::InvalidAmount(format!(
            "amount must be a whole number, got {}",
            trimmed
        )));
    }

    // Range checked above
    Amount::try_from(n as u8)
}

/// Decimal or an unsigned radix-prefixed integer
fn parse_number(s: &str) -> Option<f64> {
    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => return s.parse().ok(),
    };
    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // All digits are valid, so the only failure left is overflow
    Some(
        u128::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::MAX),
    )
}

/// Check a raw form amount without keeping the result
pub fn validate_amount(raw: &str) -> bool {
    parse_amount(raw).is_ok()
}
