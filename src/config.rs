//! Build and wallet configuration
//!
//! Every field has a default so the page can pass `{}` (or nothing) and get
//! the workshop setup: testnet, public fees, 2 credits fee.

use crate::program::{Operation, Visibility, CREDITS_PROGRAM_ID, WORKSHOP_PROGRAM_ID};
use serde::{Deserialize, Serialize};

/// Default transaction fee in microcredits (1,000,000 microcredits = 1 credit)
pub const DEFAULT_FEE: u64 = 2_000_000;

/// Network a request is broadcast to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Testnet, free credits from the faucet
    #[default]
    TestnetBeta,
    MainnetBeta,
}

impl Network {
    /// Chain id expected by the wallet adapter
    pub fn chain_id(self) -> &'static str {
        match self {
            Network::TestnetBeta => "testnetbeta",
            Network::MainnetBeta => "mainnetbeta",
        }
    }
}

/// How the fee privacy flag is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FeePolicy {
    /// Always pay the fee from public balance (fastest to prove)
    #[default]
    Public,
    /// Private operations pay a private fee
    MatchVisibility,
}

impl FeePolicy {
    pub fn fee_is_private(self, operation: Operation) -> bool {
        match self {
            FeePolicy::Public => false,
            FeePolicy::MatchVisibility => operation.visibility() == Visibility::Private,
        }
    }
}

/// Configuration for building requests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    #[serde(default = "default_program_id")]
    pub program_id: String,
    #[serde(default)]
    pub network: Network,
    /// Fee in microcredits
    #[serde(default = "default_fee")]
    pub fee: u64,
    #[serde(default)]
    pub fee_policy: FeePolicy,
}

fn default_program_id() -> String {
    WORKSHOP_PROGRAM_ID.to_string()
}

fn default_fee() -> u64 {
    DEFAULT_FEE
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program_id: default_program_id(),
            network: Network::default(),
            fee: default_fee(),
            fee_policy: FeePolicy::default(),
        }
    }
}

/// Which records the wallet may decrypt for the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum DecryptPermission {
    NoDecrypt,
    UponRequest,
    AutoDecrypt,
    #[default]
    OnChainHistory,
}

/// Wallet provider setup shared with the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_app_description")]
    pub app_description: String,
    #[serde(default)]
    pub network: Network,
    #[serde(default)]
    pub decrypt_permission: DecryptPermission,
    /// Programs the wallet is asked to grant access to
    #[serde(default = "default_programs")]
    pub programs: Vec<String>,
    #[serde(default = "default_auto_connect")]
    pub auto_connect: bool,
}

fn default_app_name() -> String {
    "Wallet Workshop".to_string()
}

fn default_app_description() -> String {
    "A privacy-focused app for the Aleo Wallet Integration Workshop".to_string()
}

fn default_programs() -> Vec<String> {
    vec![
        CREDITS_PROGRAM_ID.to_string(),
        WORKSHOP_PROGRAM_ID.to_string(),
    ]
}

fn default_auto_connect() -> bool {
    true
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            app_description: default_app_description(),
            network: Network::default(),
            decrypt_permission: DecryptPermission::default(),
            programs: default_programs(),
            auto_connect: default_auto_connect(),
        }
    }
}

impl WalletConfig {
    /// Whether the wallet was asked for access to `program_id`
    pub fn permits(&self, program_id: &str) -> bool {
        self.programs.iter().any(|p| p == program_id)
    }
}
