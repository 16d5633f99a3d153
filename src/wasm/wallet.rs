//! JS wallet context adapter
//!
//! The page passes the current `useWallet()` values on every call:
//!
//! ```javascript
//! const { wallet, publicKey, connected, requestTransaction } = useWallet();
//! await actions.mintPublic({ publicKey, connected, requestTransaction }, "10");
//! ```

use crate::error::WasmAleoError;
use crate::request::TransactionRequest;
use crate::session::{TransactionId, WalletRejection, WalletSession};
use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Snapshot of the page's wallet hook for one submission
pub struct JsWallet {
    connected: bool,
    public_key: Option<String>,
    request_transaction: Option<js_sys::Function>,
}

impl JsWallet {
    /// Read `{ publicKey, connected, requestTransaction }` from a JS object
    ///
    /// `connected` may be omitted, in which case a present public key counts
    /// as connected.
    pub fn from_js(context: &JsValue) -> Result<JsWallet, WasmAleoError> {
        if !context.is_object() {
            return Err(WasmAleoError::MissingSession);
        }

        let get = |key: &str| {
            js_sys::Reflect::get(context, &JsValue::from_str(key))
                .map_err(|_| WasmAleoError::InvalidInput(format!("Failed to read {}", key)))
        };

        let public_key = get("publicKey")?.as_string();
        let connected = get("connected")?
            .as_bool()
            .unwrap_or(public_key.is_some());
        let request_transaction = get("requestTransaction")?
            .dyn_into::<js_sys::Function>()
            .ok();

        Ok(JsWallet {
            connected,
            public_key,
            request_transaction,
        })
    }
}

/// Best-effort text for a thrown JS value
fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[async_trait(?Send)]
impl WalletSession for JsWallet {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn public_key(&self) -> Option<String> {
        self.public_key.clone()
    }

    fn can_submit(&self) -> bool {
        self.request_transaction.is_some()
    }

    async fn request_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionId, WalletRejection> {
        let function = self
            .request_transaction
            .as_ref()
            .ok_or_else(|| WalletRejection("requestTransaction is not available".to_string()))?;

        // Plain objects and numbers, not Maps and BigInts
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_request = request
            .serialize(&serializer)
            .map_err(|e| WalletRejection(format!("Failed to serialize request: {}", e)))?;

        let outcome = match function.call1(&JsValue::NULL, &js_request) {
            Ok(returned) => JsFuture::from(js_sys::Promise::resolve(&returned)).await,
            Err(thrown) => Err(thrown),
        };

        let id = outcome.map_err(|e| {
            web_sys::console::error_1(&e);
            WalletRejection(describe(&e))
        })?;

        id.as_string()
            .or_else(|| id.as_f64().map(|n| n.to_string()))
            .ok_or_else(|| WalletRejection(format!("Unexpected transaction id: {:?}", id)))
    }
}
