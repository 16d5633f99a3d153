//! Transaction request handed to the wallet
//!
//! Serializes to the wallet adapter's `AleoTransaction` object.

use crate::record::RecordInput;
use serde::Serialize;

/// One transition input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TransitionInput {
    /// A typed literal such as `"10u8"` or an address
    Literal(String),
    /// A record consumed by the transition
    Record(RecordInput),
}

/// A single program function call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    #[serde(rename = "program")]
    pub program_id: String,
    pub function_name: String,
    /// Positional, in the function's declared parameter order
    pub inputs: Vec<TransitionInput>,
}

/// What the wallet signs and broadcasts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(rename = "address")]
    pub initiator_address: String,
    #[serde(rename = "chainId")]
    pub target_network: String,
    pub transitions: Vec<Transition>,
    /// Microcredits
    #[serde(rename = "fee")]
    pub fee_amount: u64,
    #[serde(rename = "feePrivate")]
    pub fee_is_private: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let request = TransactionRequest {
            initiator_address: "aleo1sender".to_string(),
            target_network: "testnetbeta".to_string(),
            transitions: vec![Transition {
                program_id: "workshop_token.aleo".to_string(),
                function_name: "mint_private".to_string(),
                inputs: vec![
                    TransitionInput::Record(RecordInput::Opaque("record1abc".to_string())),
                    TransitionInput::Literal("10u8".to_string()),
                ],
            }],
            fee_amount: 2_000_000,
            fee_is_private: false,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "address": "aleo1sender",
                "chainId": "testnetbeta",
                "transitions": [{
                    "program": "workshop_token.aleo",
                    "functionName": "mint_private",
                    "inputs": ["record1abc", "10u8"]
                }],
                "fee": 2000000,
                "feePrivate": false
            })
        );
    }
}
