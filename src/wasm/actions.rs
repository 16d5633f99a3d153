//! WASM bindings for the token forms
//!
//! Each submit method returns a Promise of the transaction id. Rejections
//! are `Error`s whose message is the notice to show the user; the detailed
//! error text is on `error.detail`.

use crate::actions::TokenActions;
use crate::builder::types::TransactionIntent;
use crate::config::WalletConfig;
use crate::error::WasmAleoError;
use crate::form::{FormState, Outcome};
use crate::js_obj;
use crate::program::Operation;
use crate::wasm::builder::{config_from_js, intent_from_js};
use crate::wasm::wallet::JsWallet;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

fn to_js_error(err: &WasmAleoError, operation: Operation) -> JsValue {
    let js_err = js_sys::Error::new(&err.notice(operation));
    // Setting a property on a fresh Error cannot fail
    let _ = js_sys::Reflect::set(&js_err, &"detail".into(), &err.to_string().into());
    js_err.into()
}

fn state_name(state: FormState) -> &'static str {
    match state {
        FormState::Idle => "idle",
        FormState::Validating => "validating",
        FormState::Building => "building",
        FormState::Submitting => "submitting",
    }
}

fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::NoSession => "noSession",
        Outcome::ValidationFailed => "validationFailed",
        Outcome::Submitted => "submitted",
        Outcome::Failed => "failed",
    }
}

/// WASM-exposed token forms
#[wasm_bindgen]
pub struct WasmTokenActions {
    inner: Rc<TokenActions>,
}

#[wasm_bindgen]
impl WasmTokenActions {
    /// Create the forms
    ///
    /// # Arguments
    /// * `config` - Optional build config (programId, network, fee, feePolicy)
    /// * `wallet_config` - Optional wallet provider config; when given, the
    ///   program must be in its `programs` list
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, wallet_config: JsValue) -> Result<WasmTokenActions, JsValue> {
        let config = config_from_js(config)?;
        let inner = if wallet_config.is_undefined() || wallet_config.is_null() {
            TokenActions::new(config)
        } else {
            let wallet_config: WalletConfig = serde_wasm_bindgen::from_value(wallet_config)
                .map_err(WasmAleoError::from)?;
            TokenActions::with_wallet_config(config, &wallet_config)?
        };
        Ok(WasmTokenActions {
            inner: Rc::new(inner),
        })
    }

    /// Submit a raw intent through its form
    #[wasm_bindgen]
    pub fn submit(&self, wallet: JsValue, intent: JsValue) -> Result<js_sys::Promise, JsValue> {
        let intent = intent_from_js(intent)?;
        Ok(self.submit_intent(wallet, intent))
    }

    #[wasm_bindgen(js_name = mintPublic)]
    pub fn mint_public(&self, wallet: JsValue, amount: String) -> js_sys::Promise {
        self.submit_intent(wallet, TransactionIntent::MintPublic { amount })
    }

    #[wasm_bindgen(js_name = mintPrivate)]
    pub fn mint_private(&self, wallet: JsValue, amount: String, record: String) -> js_sys::Promise {
        self.submit_intent(wallet, TransactionIntent::MintPrivate { amount, record })
    }

    #[wasm_bindgen(js_name = transferPublic)]
    pub fn transfer_public(
        &self,
        wallet: JsValue,
        recipient: String,
        amount: String,
    ) -> js_sys::Promise {
        self.submit_intent(wallet, TransactionIntent::TransferPublic { recipient, amount })
    }

    #[wasm_bindgen(js_name = transferPrivate)]
    pub fn transfer_private(
        &self,
        wallet: JsValue,
        recipient: String,
        amount: String,
        record: String,
    ) -> js_sys::Promise {
        self.submit_intent(
            wallet,
            TransactionIntent::TransferPrivate {
                recipient,
                amount,
                record,
            },
        )
    }

    /// Id of the most recent successful submission
    #[wasm_bindgen(getter, js_name = lastTxId)]
    pub fn last_tx_id(&self) -> Option<String> {
        self.inner.last_tx_id()
    }

    /// Whether a form has a request in flight (disable its submit button)
    #[wasm_bindgen(js_name = isBusy)]
    pub fn is_busy(&self, operation: JsValue) -> Result<bool, JsValue> {
        let operation: Operation =
            serde_wasm_bindgen::from_value(operation).map_err(WasmAleoError::from)?;
        Ok(self.inner.form(operation).is_busy())
    }

    /// `{ busy, state, lastOutcome? }` for one form
    #[wasm_bindgen(js_name = formStatus)]
    pub fn form_status(&self, operation: JsValue) -> Result<JsValue, JsValue> {
        let operation: Operation =
            serde_wasm_bindgen::from_value(operation).map_err(WasmAleoError::from)?;
        let form = self.inner.form(operation);
        Ok(js_obj!(
            "busy" => form.is_busy(),
            "state" => state_name(form.state()),
            "lastOutcome" => form.last_outcome().map(outcome_name),
        )?)
    }
}

impl WasmTokenActions {
    fn submit_intent(&self, wallet: JsValue, intent: TransactionIntent) -> js_sys::Promise {
        let inner = Rc::clone(&self.inner);
        future_to_promise(async move {
            let operation = intent.operation();
            let wallet = JsWallet::from_js(&wallet).map_err(|e| to_js_error(&e, operation))?;
            inner
                .submit(&intent, &wallet)
                .await
                .map(JsValue::from)
                .map_err(|e| to_js_error(&e, operation))
        })
    }
}
