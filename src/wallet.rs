//! Wallet capability interface and execute-message wire types.
//!
//! The SDK never signs or broadcasts itself. A [`Wallet`] implementation
//! (browser extension bridge, keypair signer, test double) takes the built
//! messages and fee, and either returns a broadcast hash or one of the
//! distinguished [`WalletError`] kinds. Submission flows are generic over
//! this trait and never see how signing happens.

use serde::{Deserialize, Serialize};

use crate::error::WalletError;
use crate::shared::AccAddress;

/// A coin amount in minor units, e.g. `200000uusd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    /// Integer micro-unit amount, as a string on the wire.
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// `uusd` coin with the given micro amount.
    pub fn uusd(amount: impl Into<String>) -> Self {
        Self::new(crate::registry::msg::UUSD, amount)
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Flat fee attached to a broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub gas: u64,
    pub amount: Vec<Coin>,
}

impl Fee {
    pub fn flat(gas: u64, coin: Coin) -> Self {
        Self {
            gas,
            amount: vec![coin],
        }
    }
}

/// A contract execution message: `sender` calls `contract` with a JSON
/// payload, optionally attaching `coins` as on-chain payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MsgExecuteContract {
    pub sender: AccAddress,
    pub contract: AccAddress,
    pub execute_msg: serde_json::Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coins: Vec<Coin>,
}

/// Broadcast acknowledgement from the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostResponse {
    /// Hash of the broadcast transaction. Broadcast is not inclusion — the
    /// caller still confirms execution against the chain.
    pub txhash: String,
}

/// Capability interface over the user's connected wallet.
#[allow(async_fn_in_trait)]
pub trait Wallet {
    /// Address the wallet signs for.
    fn address(&self) -> AccAddress;

    /// Sign and broadcast, resolving with the broadcast hash.
    async fn post(
        &self,
        msgs: Vec<MsgExecuteContract>,
        fee: Fee,
    ) -> Result<PostResponse, WalletError>;
}
