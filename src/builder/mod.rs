//! Request building from intents
//!
//! Validate raw form fields, then lay them out as the program function's
//! positional inputs.

pub mod types;

use crate::address::parse_address;
use crate::amount::parse_amount;
use crate::config::BuildConfig;
use crate::error::WasmAleoError;
use crate::program::{Param, ParamKind};
use crate::record::parse_record;
use crate::request::{TransactionRequest, Transition, TransitionInput};
use tracing::debug;
use types::{TransactionIntent, ValidatedFields};

/// Validate the raw fields of an intent
///
/// Fields are checked in page order (record, recipient, amount) and the
/// first failure is returned.
pub fn validate_intent(intent: &TransactionIntent) -> Result<ValidatedFields, WasmAleoError> {
    let operation = intent.operation();
    match intent {
        TransactionIntent::MintPublic { amount } => Ok(ValidatedFields {
            operation,
            amount: parse_amount(amount)?,
            recipient: None,
            record: None,
        }),
        TransactionIntent::MintPrivate { amount, record } => {
            let record = parse_record(record)?;
            Ok(ValidatedFields {
                operation,
                amount: parse_amount(amount)?,
                recipient: None,
                record: Some(record),
            })
        }
        TransactionIntent::TransferPublic { recipient, amount } => {
            let recipient = parse_address(recipient)?;
            Ok(ValidatedFields {
                operation,
                amount: parse_amount(amount)?,
                recipient: Some(recipient),
                record: None,
            })
        }
        TransactionIntent::TransferPrivate {
            recipient,
            amount,
            record,
        } => {
            let record = parse_record(record)?;
            let recipient = parse_address(recipient)?;
            Ok(ValidatedFields {
                operation,
                amount: parse_amount(amount)?,
                recipient: Some(recipient),
                record: Some(record),
            })
        }
    }
}

/// Build a request from validated fields
///
/// # Arguments
/// * `fields` - Output of [`validate_intent`]
/// * `initiator` - Address of the connected wallet
/// * `config` - Program, network and fee settings
pub fn build_request(
    fields: &ValidatedFields,
    initiator: &str,
    config: &BuildConfig,
) -> Result<TransactionRequest, WasmAleoError> {
    if !is_program_id(&config.program_id) {
        return Err(WasmAleoError::InvalidInput(format!(
            "malformed program id: {}",
            config.program_id
        )));
    }

    let operation = fields.operation;
    let inputs = operation
        .params()
        .iter()
        .map(|param| build_input(param, fields))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        function = operation.function_name(),
        inputs = inputs.len(),
        "built transition"
    );

    Ok(TransactionRequest {
        initiator_address: initiator.to_string(),
        target_network: config.network.chain_id().to_string(),
        transitions: vec![Transition {
            program_id: config.program_id.clone(),
            function_name: operation.function_name().to_string(),
            inputs,
        }],
        fee_amount: config.fee,
        fee_is_private: config.fee_policy.fee_is_private(operation),
    })
}

/// Validate and build in one step
pub fn build_transaction(
    intent: &TransactionIntent,
    initiator: &str,
    config: &BuildConfig,
) -> Result<TransactionRequest, WasmAleoError> {
    let fields = validate_intent(intent)?;
    build_request(&fields, initiator, config)
}

/// `<name>.aleo` with a lowercase identifier name
fn is_program_id(program_id: &str) -> bool {
    match program_id.strip_suffix(".aleo") {
        Some(name) => {
            name.starts_with(|c: char| c.is_ascii_lowercase())
                && name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        None => false,
    }
}

/// Build one positional input
fn build_input(param: &Param, fields: &ValidatedFields) -> Result<TransitionInput, WasmAleoError> {
    let missing = || {
        WasmAleoError::InvalidInput(format!(
            "{} requires parameter {}",
            fields.operation.function_name(),
            param.name
        ))
    };

    match param.kind {
        ParamKind::U8Amount => Ok(TransitionInput::Literal(fields.amount.to_literal())),
        ParamKind::Address => fields
            .recipient
            .as_ref()
            .map(|address| TransitionInput::Literal(address.to_string()))
            .ok_or_else(missing),
        ParamKind::TokenRecord => fields
            .record
            .clone()
            .map(TransitionInput::Record)
            .ok_or_else(missing),
    }
}
