//! Registry domain — NFT records, contract messages, submission flows.

pub mod client;
pub mod confirm;
pub mod msg;

pub use client::{submit_license, submit_mint, Registry};
pub use confirm::ConfirmConfig;
pub use msg::MintSpec;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::SdkError;
use crate::shared::{price, AccAddress, IsccCode};
use crate::wallet::Coin;

/// An NFT record as stored by the registry contract.
///
/// Created by a mint submission and mutated only on chain (ownership moves
/// on license purchase); the SDK re-queries instead of updating locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NftRecord {
    pub token_id: String,
    pub owner: AccAddress,
    pub iscc_code: IsccCode,
    pub tophash: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub license_url: String,
    pub license_price: Coin,
}

impl NftRecord {
    /// Stored micro-unit license price as a display price.
    pub fn display_price(&self) -> Result<Decimal, SdkError> {
        Ok(price::from_micro(&self.license_price.amount)?)
    }
}

/// Terminal result of a mint or license submission.
///
/// Closed two-variant outcome: every failure from signing through on-chain
/// execution is folded into `Failure` with a user-facing message; nothing
/// escapes the flow as a panic or an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxOutcome {
    Success {
        /// Hash of the included transaction.
        txhash: String,
        /// Client-generated token id. `Some` for mint, `None` for license.
        token_id: Option<String>,
    },
    Failure {
        message: String,
    },
}

impl TxOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TxOutcome::Success { .. })
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            TxOutcome::Failure { message } => Some(message),
            TxOutcome::Success { .. } => None,
        }
    }
}
