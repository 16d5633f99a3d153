//! The page's four token forms and the shared last transaction id

use crate::builder::types::TransactionIntent;
use crate::config::{BuildConfig, WalletConfig};
use crate::error::WasmAleoError;
use crate::form::TransactionForm;
use crate::program::Operation;
use crate::session::{TransactionId, WalletSession};
use core::cell::RefCell;

/// Mint and transfer forms, public and private
#[derive(Debug)]
pub struct TokenActions {
    config: BuildConfig,
    mint_public: TransactionForm,
    mint_private: TransactionForm,
    transfer_public: TransactionForm,
    transfer_private: TransactionForm,
    last_tx_id: RefCell<Option<TransactionId>>,
}

impl TokenActions {
    pub fn new(config: BuildConfig) -> Self {
        TokenActions {
            config,
            mint_public: TransactionForm::new(Operation::MintPublic),
            mint_private: TransactionForm::new(Operation::MintPrivate),
            transfer_public: TransactionForm::new(Operation::TransferPublic),
            transfer_private: TransactionForm::new(Operation::TransferPrivate),
            last_tx_id: RefCell::new(None),
        }
    }

    /// Create actions whose program the wallet was asked to grant
    pub fn with_wallet_config(
        config: BuildConfig,
        wallet: &WalletConfig,
    ) -> Result<Self, WasmAleoError> {
        if !wallet.permits(&config.program_id) {
            return Err(WasmAleoError::InvalidInput(format!(
                "program {} is not in the wallet's program permissions",
                config.program_id
            )));
        }
        if wallet.network != config.network {
            return Err(WasmAleoError::InvalidInput(format!(
                "build network {} does not match wallet network {}",
                config.network.chain_id(),
                wallet.network.chain_id()
            )));
        }
        Ok(TokenActions::new(config))
    }

    pub fn form(&self, operation: Operation) -> &TransactionForm {
        match operation {
            Operation::MintPublic => &self.mint_public,
            Operation::MintPrivate => &self.mint_private,
            Operation::TransferPublic => &self.transfer_public,
            Operation::TransferPrivate => &self.transfer_private,
        }
    }

    /// Id of the most recent successful submission from any form
    pub fn last_tx_id(&self) -> Option<TransactionId> {
        self.last_tx_id.borrow().clone()
    }

    /// Submit an intent through its form
    ///
    /// Success overwrites the last transaction id; any error leaves it as is.
    pub async fn submit(
        &self,
        intent: &TransactionIntent,
        session: &dyn WalletSession,
    ) -> Result<TransactionId, WasmAleoError> {
        let form = self.form(intent.operation());
        let id = form.submit(intent, session, &self.config).await?;
        *self.last_tx_id.borrow_mut() = Some(id.clone());
        Ok(id)
    }

    pub async fn mint_public(
        &self,
        session: &dyn WalletSession,
        amount: &str,
    ) -> Result<TransactionId, WasmAleoError> {
        let intent = TransactionIntent::MintPublic {
            amount: amount.to_string(),
        };
        self.submit(&intent, session).await
    }

    pub async fn mint_private(
        &self,
        session: &dyn WalletSession,
        amount: &str,
        record: &str,
    ) -> Result<TransactionId, WasmAleoError> {
        let intent = TransactionIntent::MintPrivate {
            amount: amount.to_string(),
            record: record.to_string(),
        };
        self.submit(&intent, session).await
    }

    pub async fn transfer_public(
        &self,
        session: &dyn WalletSession,
        recipient: &str,
        amount: &str,
    ) -> Result<TransactionId, WasmAleoError> {
        let intent = TransactionIntent::TransferPublic {
            recipient: recipient.to_string(),
            amount: amount.to_string(),
        };
        self.submit(&intent, session).await
    }

    pub async fn transfer_private(
        &self,
        session: &dyn WalletSession,
        recipient: &str,
        amount: &str,
        record: &str,
    ) -> Result<TransactionId, WasmAleoError> {
        let intent = TransactionIntent::TransferPrivate {
            recipient: recipient.to_string(),
            amount: amount.to_string(),
            record: record.to_string(),
        };
        self.submit(&intent, session).await
    }
}

impl Default for TokenActions {
    fn default() -> Self {
        TokenActions::new(BuildConfig::default())
    }
}
