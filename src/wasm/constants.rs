//! Constants exported via WASM.
//!
//! Lets the page configure its wallet provider from the same values the
//! request builder uses.

use crate::config::{BuildConfig, WalletConfig, DEFAULT_FEE};
use crate::program::{CREDITS_PROGRAM_ID, WORKSHOP_PROGRAM_ID};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Workshop token program id
#[wasm_bindgen(js_name = workshopProgramId)]
pub fn workshop_program_id() -> String {
    WORKSHOP_PROGRAM_ID.to_string()
}

/// Native credits program id
#[wasm_bindgen(js_name = creditsProgramId)]
pub fn credits_program_id() -> String {
    CREDITS_PROGRAM_ID.to_string()
}

/// Default fee in microcredits
#[wasm_bindgen(js_name = defaultFee)]
pub fn default_fee() -> f64 {
    DEFAULT_FEE as f64
}

/// Default build config as a plain object
#[wasm_bindgen(js_name = defaultBuildConfig)]
pub fn default_build_config() -> Result<JsValue, JsValue> {
    to_plain(&BuildConfig::default())
}

/// Default wallet provider config as a plain object
#[wasm_bindgen(js_name = defaultWalletConfig)]
pub fn default_wallet_config() -> Result<JsValue, JsValue> {
    to_plain(&WalletConfig::default())
}

fn to_plain<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize config: {}", e)))
}
