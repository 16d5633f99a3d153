//! Per-form submission state machine
//!
//! ```text
//! Idle -> Validating -> (ValidationFailed -> Idle)
//!                    |  Building -> Submitting -> (Submitted -> Idle)
//!                                              |  (Failed -> Idle)
//! ```
//!
//! A form holds at most one request in flight. State lives in `Cell`s behind
//! `&self`: JS can call back into a form while an earlier Promise is still
//! pending, and that call must see "busy", not a borrow panic.

use crate::builder::types::TransactionIntent;
use crate::builder::{build_request, validate_intent};
use crate::config::BuildConfig;
use crate::error::WasmAleoError;
use crate::program::Operation;
use crate::session::{active_initiator, TransactionId, WalletSession};
use core::cell::Cell;
use tracing::{info, warn};

/// Where a form is in its submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Building,
    Submitting,
}

/// How the last attempt on a form ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No usable wallet session
    NoSession,
    ValidationFailed,
    Submitted,
    Failed,
}

/// Resets the form to `Idle` on every exit path, including a dropped future
struct InFlight<'a> {
    state: &'a Cell<FormState>,
}

impl<'a> InFlight<'a> {
    fn acquire(state: &'a Cell<FormState>) -> Option<InFlight<'a>> {
        if state.get() != FormState::Idle {
            return None;
        }
        state.set(FormState::Validating);
        Some(InFlight { state })
    }

    fn advance(&self, next: FormState) {
        self.state.set(next);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.set(FormState::Idle);
    }
}

/// One operation's form
#[derive(Debug)]
pub struct TransactionForm {
    operation: Operation,
    state: Cell<FormState>,
    last_outcome: Cell<Option<Outcome>>,
}

impl TransactionForm {
    pub fn new(operation: Operation) -> Self {
        TransactionForm {
            operation,
            state: Cell::new(FormState::Idle),
            last_outcome: Cell::new(None),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn state(&self) -> FormState {
        self.state.get()
    }

    /// True while the submit button should be disabled
    pub fn is_busy(&self) -> bool {
        self.state.get() != FormState::Idle
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome.get()
    }

    /// Run one submission through the state machine
    ///
    /// # Arguments
    /// * `intent` - Raw form fields; must target this form's operation
    /// * `session` - Current wallet session, read fresh on every call
    /// * `config` - Program, network and fee settings
    pub async fn submit(
        &self,
        intent: &TransactionIntent,
        session: &dyn WalletSession,
        config: &BuildConfig,
    ) -> Result<TransactionId, WasmAleoError> {
        if intent.operation() != self.operation {
            return Err(WasmAleoError::InvalidInput(format!(
                "{} form cannot submit {}",
                self.operation.function_name(),
                intent.operation().function_name()
            )));
        }

        let guard = InFlight::acquire(&self.state).ok_or(WasmAleoError::SubmissionInProgress)?;

        let Some(initiator) = active_initiator(session) else {
            self.last_outcome.set(Some(Outcome::NoSession));
            return Err(WasmAleoError::MissingSession);
        };

        let request = match validate_intent(intent).and_then(|fields| {
            guard.advance(FormState::Building);
            build_request(&fields, &initiator, config)
        }) {
            Ok(request) => request,
            Err(e) => {
                let outcome = if e.is_validation() {
                    Outcome::ValidationFailed
                } else {
                    Outcome::Failed
                };
                self.last_outcome.set(Some(outcome));
                return Err(e);
            }
        };

        guard.advance(FormState::Submitting);
        match session.request_transaction(&request).await {
            Ok(id) => {
                info!(
                    function = self.operation.function_name(),
                    tx_id = %id,
                    "transaction submitted"
                );
                self.last_outcome.set(Some(Outcome::Submitted));
                Ok(id)
            }
            Err(rejection) => {
                warn!(
                    function = self.operation.function_name(),
                    cause = %rejection,
                    "wallet rejected transaction"
                );
                self.last_outcome.set(Some(Outcome::Failed));
                Err(WasmAleoError::SubmissionFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::TransitionInput;
    use crate::session::tests::{MockWallet, SENDER};
    use futures::executor::block_on;

    fn mint(amount: &str) -> TransactionIntent {
        TransactionIntent::MintPublic {
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_successful_submission() {
        let form = TransactionForm::new(Operation::MintPublic);
        let wallet = MockWallet::connected();

        let id = block_on(form.submit(&mint("10"), &wallet, &BuildConfig::default())).unwrap();

        assert_eq!(id, "at1tx1");
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.last_outcome(), Some(Outcome::Submitted));

        let requests = wallet.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].initiator_address, SENDER);
        assert_eq!(
            requests[0].transitions[0].inputs,
            vec![TransitionInput::Literal("10u8".to_string())]
        );
    }

    #[test]
    fn test_missing_session_skips_validation_and_wallet() {
        let form = TransactionForm::new(Operation::MintPublic);
        let wallet = MockWallet::disconnected();

        // Amount is invalid too, but the session is checked first
        let result = block_on(form.submit(&mint("0"), &wallet, &BuildConfig::default()));

        assert_eq!(result, Err(WasmAleoError::MissingSession));
        assert_eq!(wallet.calls.get(), 0);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.last_outcome(), Some(Outcome::NoSession));
    }

    #[test]
    fn test_validation_failure_returns_to_idle() {
        let form = TransactionForm::new(Operation::MintPublic);
        let wallet = MockWallet::connected();

        let result = block_on(form.submit(&mint("256"), &wallet, &BuildConfig::default()));

        assert!(matches!(result, Err(WasmAleoError::InvalidAmount(_))));
        assert_eq!(wallet.calls.get(), 0);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.last_outcome(), Some(Outcome::ValidationFailed));
    }

    #[test]
    fn test_rejection_becomes_submission_failed() {
        let form = TransactionForm::new(Operation::MintPublic);
        let wallet = MockWallet::rejecting("User rejected the request");

        let result = block_on(form.submit(&mint("10"), &wallet, &BuildConfig::default()));

        assert_eq!(result, Err(WasmAleoError::SubmissionFailed));
        assert_eq!(wallet.calls.get(), 1);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.last_outcome(), Some(Outcome::Failed));
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let form = TransactionForm::new(Operation::MintPublic);
        let wallet = MockWallet::connected();
        let release = wallet.hold();
        let config = BuildConfig::default();
        let intent = mint("10");

        block_on(async {
            let mut first = Box::pin(form.submit(&intent, &wallet, &config));
            assert!(futures::poll!(&mut first).is_pending());
            assert_eq!(form.state(), FormState::Submitting);
            assert!(form.is_busy());

            let second = form.submit(&intent, &wallet, &config).await;
            assert_eq!(second, Err(WasmAleoError::SubmissionInProgress));
            assert_eq!(wallet.calls.get(), 1);

            release.send(()).unwrap();
            assert_eq!(first.await, Ok("at1tx1".to_string()));
        });

        assert_eq!(form.state(), FormState::Idle);
        // The form is usable again
        let third = block_on(form.submit(&intent, &wallet, &config));
        assert_eq!(third, Ok("at1tx2".to_string()));
    }

    #[test]
    fn test_dropped_submission_releases_form() {
        let form = TransactionForm::new(Operation::MintPublic);
        let wallet = MockWallet::connected();
        let _release = wallet.hold();
        let config = BuildConfig::default();
        let intent = mint("10");

        block_on(async {
            let mut pending = Box::pin(form.submit(&intent, &wallet, &config));
            assert!(futures::poll!(&mut pending).is_pending());
            assert!(form.is_busy());
            drop(pending);
        });

        assert_eq!(form.state(), FormState::Idle);
        assert!(!form.is_busy());
    }

    #[test]
    fn test_build_failure_replaces_previous_outcome() {
        let form = TransactionForm::new(Operation::MintPublic);
        let wallet = MockWallet::connected();

        block_on(form.submit(&mint("10"), &wallet, &BuildConfig::default())).unwrap();
        assert_eq!(form.last_outcome(), Some(Outcome::Submitted));

        let config = BuildConfig {
            program_id: "workshop_token".to_string(),
            ..BuildConfig::default()
        };
        let result = block_on(form.submit(&mint("10"), &wallet, &config));

        assert!(matches!(result, Err(WasmAleoError::InvalidInput(_))));
        assert_eq!(wallet.calls.get(), 1);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.last_outcome(), Some(Outcome::Failed));
    }

    #[test]
    fn test_wrong_operation_for_form() {
        let form = TransactionForm::new(Operation::TransferPublic);
        let wallet = MockWallet::connected();

        let result = block_on(form.submit(&mint("10"), &wallet, &BuildConfig::default()));

        assert!(matches!(result, Err(WasmAleoError::InvalidInput(_))));
        assert_eq!(wallet.calls.get(), 0);
        assert_eq!(form.last_outcome(), None);
    }
}
