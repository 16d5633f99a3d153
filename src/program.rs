//! The on-chain token program contract
//!
//! Transition inputs are positional. A request whose inputs are in the wrong
//! order can still execute on chain and do the wrong thing, so parameter
//! order lives here and nowhere else.
//!
//! ```text
//! program workshop_token.aleo;
//!
//! function mint_public:      input r0 as u8.public;
//! function mint_private:     input r0 as Token.record; input r1 as u8.private;
//! function transfer_public:  input r0 as address.public; input r1 as u8.public;
//! function transfer_private: input r0 as Token.record; input r1 as address.private;
//!                            input r2 as u8.private;
//! ```

use serde::{Deserialize, Serialize};

/// Program id of the workshop token
pub const WORKSHOP_PROGRAM_ID: &str = "workshop_token.aleo";

/// Program id of the native credits program (fee payments)
pub const CREDITS_PROGRAM_ID: &str = "credits.aleo";

/// Kind of a declared function parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A `Token` record owned by the caller
    TokenRecord,
    /// An account address
    Address,
    /// A `u8` token amount
    U8Amount,
}

/// One declared function parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
}

const fn param(name: &'static str, kind: ParamKind) -> Param {
    Param { name, kind }
}

const MINT_PUBLIC_PARAMS: &[Param] = &[param("amount", ParamKind::U8Amount)];

const MINT_PRIVATE_PARAMS: &[Param] = &[
    param("token", ParamKind::TokenRecord),
    param("amount", ParamKind::U8Amount),
];

const TRANSFER_PUBLIC_PARAMS: &[Param] = &[
    param("recipient", ParamKind::Address),
    param("amount", ParamKind::U8Amount),
];

const TRANSFER_PRIVATE_PARAMS: &[Param] = &[
    param("token", ParamKind::TokenRecord),
    param("recipient", ParamKind::Address),
    param("amount", ParamKind::U8Amount),
];

/// Asset visibility of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// The four token operations the page offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    MintPublic,
    MintPrivate,
    TransferPublic,
    TransferPrivate,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::MintPublic,
        Operation::MintPrivate,
        Operation::TransferPublic,
        Operation::TransferPrivate,
    ];

    /// Function name in the program
    pub fn function_name(self) -> &'static str {
        match self {
            Operation::MintPublic => "mint_public",
            Operation::MintPrivate => "mint_private",
            Operation::TransferPublic => "transfer_public",
            Operation::TransferPrivate => "transfer_private",
        }
    }

    /// Declared parameters, in call order
    pub fn params(self) -> &'static [Param] {
        match self {
            Operation::MintPublic => MINT_PUBLIC_PARAMS,
            Operation::MintPrivate => MINT_PRIVATE_PARAMS,
            Operation::TransferPublic => TRANSFER_PUBLIC_PARAMS,
            Operation::TransferPrivate => TRANSFER_PRIVATE_PARAMS,
        }
    }

    pub fn visibility(self) -> Visibility {
        match self {
            Operation::MintPublic | Operation::TransferPublic => Visibility::Public,
            Operation::MintPrivate | Operation::TransferPrivate => Visibility::Private,
        }
    }

    /// Human label used in notices, e.g. "Public mint"
    pub fn label(self) -> &'static str {
        match self {
            Operation::MintPublic => "Public mint",
            Operation::MintPrivate => "Private mint",
            Operation::TransferPublic => "Public transfer",
            Operation::TransferPrivate => "Private transfer",
        }
    }
}
