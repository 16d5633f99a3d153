//! WASM bindings for request building
//!
//! BuilderNamespace validates and builds without submitting, for pages that
//! want to preview a request or drive their own wallet call.

use crate::address::validate_address;
use crate::amount::validate_amount;
use crate::builder::{build_transaction, types::TransactionIntent, validate_intent};
use crate::config::BuildConfig;
use crate::error::WasmAleoError;
use crate::js_obj;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Read an optional build config; `undefined`/`null` means defaults
pub(crate) fn config_from_js(config: JsValue) -> Result<BuildConfig, WasmAleoError> {
    if config.is_undefined() || config.is_null() {
        return Ok(BuildConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(config)?)
}

pub(crate) fn intent_from_js(intent: JsValue) -> Result<TransactionIntent, WasmAleoError> {
    serde_wasm_bindgen::from_value(intent)
        .map_err(|e| WasmAleoError::InvalidInput(format!("Invalid intent: {}", e)))
}

/// Namespace for building operations
#[wasm_bindgen]
pub struct BuilderNamespace;

#[wasm_bindgen]
impl BuilderNamespace {
    /// Build a transaction request from an intent
    ///
    /// # Arguments
    /// * `intent` - Raw form fields (JSON object with type field)
    /// * `initiator` - Connected wallet address
    /// * `config` - Optional build config (programId, network, fee, feePolicy)
    ///
    /// # Returns
    /// Plain object in the wallet adapter's `AleoTransaction` shape
    ///
    /// # Example Intent (Transfer)
    /// ```json
    /// { "type": "transferPublic", "recipient": "aleo1...", "amount": "5" }
    /// ```
    ///
    /// # Intent Types
    /// - `mintPublic`: (amount)
    /// - `mintPrivate`: (amount, record)
    /// - `transferPublic`: (recipient, amount)
    /// - `transferPrivate`: (recipient, amount, record)
    #[wasm_bindgen(js_name = buildRequest)]
    pub fn build_request_wasm(
        intent: JsValue,
        initiator: &str,
        config: JsValue,
    ) -> Result<JsValue, JsValue> {
        let intent = intent_from_js(intent)?;
        let config = config_from_js(config)?;

        let request = build_transaction(&intent, initiator, &config)?;

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        request
            .serialize(&serializer)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize request: {}", e)))
    }

    /// Check an intent's fields
    ///
    /// # Returns
    /// `{ valid, error?, notice? }` where `notice` is the text to show the user
    #[wasm_bindgen(js_name = validateIntent)]
    pub fn validate_intent_wasm(intent: JsValue) -> Result<JsValue, JsValue> {
        let intent = intent_from_js(intent)?;
        let operation = intent.operation();
        let result = validate_intent(&intent);

        let error = result.as_ref().err().map(|e| e.to_string());
        let notice = result.as_ref().err().map(|e| e.notice(operation));
        Ok(js_obj!(
            "valid" => result.is_ok(),
            "error" => error,
            "notice" => notice,
        )?)
    }

    /// Check a recipient address (63 chars, `aleo1` prefix, alphanumeric)
    #[wasm_bindgen(js_name = validateAddress)]
    pub fn validate_address_wasm(address: &str) -> bool {
        validate_address(address)
    }

    /// Check an amount (whole number in 1..=255)
    #[wasm_bindgen(js_name = validateAmount)]
    pub fn validate_amount_wasm(amount: &str) -> bool {
        validate_amount(amount)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_build_request_shape() {
        let intent = serde_wasm_bindgen::to_value(&TransactionIntent::MintPublic {
            amount: "10".to_string(),
        })
        .unwrap();
        let request =
            BuilderNamespace::build_request_wasm(intent, "aleo1sender", JsValue::UNDEFINED)
                .unwrap();

        let fee = js_sys::Reflect::get(&request, &"fee".into()).unwrap();
        assert_eq!(fee.as_f64(), Some(2_000_000.0));
        let chain = js_sys::Reflect::get(&request, &"chainId".into()).unwrap();
        assert_eq!(chain.as_string().unwrap(), "testnetbeta");
    }

    #[wasm_bindgen_test]
    fn test_validate_intent_notice() {
        let intent = serde_wasm_bindgen::to_value(&TransactionIntent::MintPublic {
            amount: "0".to_string(),
        })
        .unwrap();
        let result = BuilderNamespace::validate_intent_wasm(intent).unwrap();
        let notice = js_sys::Reflect::get(&result, &"notice".into()).unwrap();
        assert_eq!(notice.as_string().unwrap(), "Enter a valid token amount (u8)");
    }
}
