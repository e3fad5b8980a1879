//! Submission and resolution flows, plus the `Registry` sub-client.
//!
//! A submission walks `signing → broadcasting → confirming` and always ends
//! in a [`TxOutcome`]. The flows are generic over the [`Wallet`] and
//! [`ChainNode`] capability traits; the sub-client binds them to the
//! high-level client's concrete collaborators.

use rust_decimal::Decimal;

use crate::chain::{ChainNode, TxInfo};
use crate::client::LiciumClient;
use crate::error::SdkError;
use crate::registry::confirm::{self, ConfirmConfig};
use crate::registry::msg::{self, MintSpec};
use crate::registry::{NftRecord, TxOutcome};
use crate::shared::{AccAddress, IsccCode};
use crate::wallet::Wallet;

/// Mint an NFT for previously prepared content.
///
/// `None` when no wallet is connected: the submission is a silent no-op with
/// no network traffic, matching a UI that disables the control too late.
pub async fn submit_mint<W: Wallet, C: ChainNode>(
    wallet: Option<&W>,
    node: &C,
    contract: &AccAddress,
    spec: &MintSpec,
    config: &ConfirmConfig,
) -> Option<TxOutcome> {
    let wallet = wallet?;

    let (msg, fee, token_id) = match msg::build_mint(&wallet.address(), contract, spec) {
        Ok(parts) => parts,
        Err(e) => {
            return Some(TxOutcome::Failure {
                message: format!("Create Tx Failed: {e}"),
            })
        }
    };

    tracing::debug!(%token_id, "signing mint transaction");
    let posted = match wallet.post(vec![msg], fee).await {
        Ok(resp) => resp,
        Err(e) => return Some(TxOutcome::Failure { message: e.to_string() }),
    };

    tracing::debug!(txhash = %posted.txhash, "mint broadcast, confirming");
    Some(match confirm::wait_for_inclusion(node, &posted.txhash, config).await {
        Ok(info) if info.succeeded() => TxOutcome::Success {
            txhash: posted.txhash,
            token_id: Some(token_id),
        },
        Ok(info) => TxOutcome::Failure {
            message: execution_failure_message(&info),
        },
        Err(e) => TxOutcome::Failure {
            message: format!("Unknown Error: {e}"),
        },
    })
}

/// Buy a license for an existing token at the given display price.
///
/// Same shape as [`submit_mint`], without a client-generated token id.
pub async fn submit_license<W: Wallet, C: ChainNode>(
    wallet: Option<&W>,
    node: &C,
    contract: &AccAddress,
    token_id: &str,
    price: Decimal,
    config: &ConfirmConfig,
) -> Option<TxOutcome> {
    let wallet = wallet?;

    let (msg, fee) = match msg::build_license(&wallet.address(), contract, token_id, price) {
        Ok(parts) => parts,
        Err(e) => {
            return Some(TxOutcome::Failure {
                message: format!("Create Tx Failed: {e}"),
            })
        }
    };

    tracing::debug!(token_id, "signing license transaction");
    let posted = match wallet.post(vec![msg], fee).await {
        Ok(resp) => resp,
        Err(e) => return Some(TxOutcome::Failure { message: e.to_string() }),
    };

    tracing::debug!(txhash = %posted.txhash, "license broadcast, confirming");
    Some(match confirm::wait_for_inclusion(node, &posted.txhash, config).await {
        Ok(info) if info.succeeded() => TxOutcome::Success {
            txhash: posted.txhash,
            token_id: None,
        },
        Ok(info) => TxOutcome::Failure {
            message: execution_failure_message(&info),
        },
        Err(e) => TxOutcome::Failure {
            message: format!("Unknown Error: {e}"),
        },
    })
}

/// Message for a transaction that was included but failed to execute.
///
/// Prefers the chain's own log; only guesses at the duplicate-registration
/// cause when the node returned nothing usable.
fn execution_failure_message(info: &TxInfo) -> String {
    if info.raw_log.trim().is_empty() {
        format!(
            "Transaction failed on chain (code {}). The content may already be registered.",
            info.code
        )
    } else {
        format!("Transaction failed on chain: {}", info.raw_log)
    }
}

/// Registry sub-client, borrowed from [`LiciumClient`].
pub struct Registry<'a> {
    pub(crate) client: &'a LiciumClient,
}

impl Registry<'_> {
    /// Mint an NFT. See [`submit_mint`].
    pub async fn mint<W: Wallet>(
        &self,
        wallet: Option<&W>,
        spec: &MintSpec,
    ) -> Option<TxOutcome> {
        submit_mint(
            wallet,
            &self.client.node,
            &self.client.contract,
            spec,
            &self.client.confirm,
        )
        .await
    }

    /// Buy a license for a token. See [`submit_license`].
    pub async fn license<W: Wallet>(
        &self,
        wallet: Option<&W>,
        token_id: &str,
        price: Decimal,
    ) -> Option<TxOutcome> {
        submit_license(
            wallet,
            &self.client.node,
            &self.client.contract,
            token_id,
            price,
            &self.client.confirm,
        )
        .await
    }

    /// Look up the registered NFT for an ISCC code, by its content sub-code.
    ///
    /// Read-only; no side effects, no confirmation.
    pub async fn resolve(&self, iscc_code: &IsccCode) -> Result<Option<NftRecord>, SdkError> {
        self.resolve_content_id(&iscc_code.content_id()).await
    }

    /// Look up by an already-extracted content sub-code.
    pub async fn resolve_content_id(
        &self,
        content_id: &str,
    ) -> Result<Option<NftRecord>, SdkError> {
        let query = msg::build_resolve(content_id);
        Ok(self
            .client
            .node
            .contract_query(&self.client.contract, &query)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_failure_prefers_chain_log() {
        let info = TxInfo {
            txhash: "ABC".into(),
            code: 4,
            raw_log: "token_id already claimed".into(),
        };
        assert_eq!(
            execution_failure_message(&info),
            "Transaction failed on chain: token_id already claimed"
        );
    }

    #[test]
    fn test_execution_failure_falls_back_to_duplicate_hint() {
        let info = TxInfo {
            txhash: "ABC".into(),
            code: 4,
            raw_log: "  ".into(),
        };
        let message = execution_failure_message(&info);
        assert!(message.contains("code 4"));
        assert!(message.contains("already be registered"));
    }
}
