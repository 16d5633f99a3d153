//! Wallet session and submit capability
//!
//! The wallet adapter owns connection state, signing and broadcast. This
//! crate only reads the session and hands finished requests over. Sessions
//! are passed into every submission and never stored, so a disconnect
//! between two submissions is always seen.

use crate::request::TransactionRequest;
use async_trait::async_trait;

/// Opaque reason the wallet gave for not submitting
///
/// User cancellation, insufficient funds and network errors all arrive
/// here. The text is logged, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct WalletRejection(pub String);

/// Transaction id returned by the wallet
pub type TransactionId = String;

/// A connected (or not) browser wallet
#[async_trait(?Send)]
pub trait WalletSession {
    /// Whether the adapter reports a live connection
    fn is_connected(&self) -> bool;

    /// Address of the connected account
    fn public_key(&self) -> Option<String>;

    /// Whether the adapter exposes `requestTransaction`
    fn can_submit(&self) -> bool;

    /// Sign and broadcast a request
    async fn request_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionId, WalletRejection>;
}

/// Address of the session's account if it can take a submission right now
pub fn active_initiator(session: &dyn WalletSession) -> Option<String> {
    if !session.is_connected() || !session.can_submit() {
        return None;
    }
    session.public_key().filter(|key| !key.is_empty())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::channel::oneshot;
    use std::cell::{Cell, RefCell};

    pub(crate) const SENDER: &str =
        "aleo1sendersendersendersendersendersendersendersendersenderse0";

    /// Programmable wallet for tests
    pub(crate) struct MockWallet {
        pub connected: bool,
        pub public_key: Option<String>,
        pub can_submit: bool,
        pub calls: Cell<usize>,
        pub requests: RefCell<Vec<TransactionRequest>>,
        pub outcome: RefCell<Option<Result<TransactionId, WalletRejection>>>,
        pub gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl MockWallet {
        pub(crate) fn connected() -> Self {
            MockWallet {
                connected: true,
                public_key: Some(SENDER.to_string()),
                can_submit: true,
                calls: Cell::new(0),
                requests: RefCell::new(Vec::new()),
                outcome: RefCell::new(None),
                gate: RefCell::new(None),
            }
        }

        pub(crate) fn disconnected() -> Self {
            MockWallet {
                connected: false,
                public_key: None,
                ..MockWallet::connected()
            }
        }

        pub(crate) fn rejecting(reason: &str) -> Self {
            let wallet = MockWallet::connected();
            *wallet.outcome.borrow_mut() = Some(Err(WalletRejection(reason.to_string())));
            wallet
        }

        /// Hold the next request until the returned sender fires
        pub(crate) fn hold(&self) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            *self.gate.borrow_mut() = Some(rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl WalletSession for MockWallet {
        fn is_connected(&self) -> bool {
            self.connected
        }

        fn public_key(&self) -> Option<String> {
            self.public_key.clone()
        }

        fn can_submit(&self) -> bool {
            self.can_submit
        }

        async fn request_transaction(
            &self,
            request: &TransactionRequest,
        ) -> Result<TransactionId, WalletRejection> {
            self.calls.set(self.calls.get() + 1);
            self.requests.borrow_mut().push(request.clone());
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.outcome
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Ok(format!("at1tx{}", self.calls.get())))
        }
    }

    #[test]
    fn test_active_initiator() {
        assert_eq!(
            active_initiator(&MockWallet::connected()),
            Some(SENDER.to_string())
        );
        assert_eq!(active_initiator(&MockWallet::disconnected()), None);

        let no_capability = MockWallet {
            can_submit: false,
            ..MockWallet::connected()
        };
        assert_eq!(active_initiator(&no_capability), None);

        let empty_key = MockWallet {
            public_key: Some(String::new()),
            ..MockWallet::connected()
        };
        assert_eq!(active_initiator(&empty_key), None);
    }
}
