//! Intent types for request building
//!
//! buildRequest(intent, initiator, config)
//! - intent: raw form fields for one operation, exactly as the user typed them
//! - initiator: the connected wallet's address
//! - config: program, network, fee

use crate::address::Address;
use crate::amount::Amount;
use crate::program::Operation;
use crate::record::RecordInput;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Deserialize a form field from either a string or a number
///
/// Number inputs reach us as JS numbers when the page passes
/// `valueAsNumber`, and as strings otherwise.
fn deserialize_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct FieldVisitor;

    impl<'de> de::Visitor<'de> for FieldVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a form field as string or number")
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }
    }

    deserializer.deserialize_any(FieldVisitor)
}

/// Transaction intent - raw fields of one submitted form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TransactionIntent {
    /// Mint tokens to the caller's public balance
    MintPublic {
        #[serde(deserialize_with = "deserialize_field")]
        amount: String,
    },
    /// Mint tokens into a private record
    MintPrivate {
        #[serde(deserialize_with = "deserialize_field")]
        amount: String,
        /// Token record as pasted (JSON or plaintext)
        record: String,
    },
    /// Transfer from public balance to a recipient's public balance
    TransferPublic {
        recipient: String,
        #[serde(deserialize_with = "deserialize_field")]
        amount: String,
    },
    /// Spend a private record to a recipient
    TransferPrivate {
        recipient: String,
        #[serde(deserialize_with = "deserialize_field")]
        amount: String,
        /// Token record as pasted (JSON or plaintext)
        record: String,
    },
}

impl TransactionIntent {
    pub fn operation(&self) -> Operation {
        match self {
            TransactionIntent::MintPublic { .. } => Operation::MintPublic,
            TransactionIntent::MintPrivate { .. } => Operation::MintPrivate,
            TransactionIntent::TransferPublic { .. } => Operation::TransferPublic,
            TransactionIntent::TransferPrivate { .. } => Operation::TransferPrivate,
        }
    }
}

/// Fields that passed validation
///
/// `recipient` and `record` are present exactly when the operation's
/// program function takes them.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    pub operation: Operation,
    pub amount: Amount,
    pub recipient: Option<Address>,
    pub record: Option<RecordInput>,
}
