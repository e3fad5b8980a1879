//! Chain node access — the `ChainNode` capability trait and the concrete
//! LCD client.
//!
//! Flows depend on the trait, not on `LcdClient`, so execution results and
//! contract state can be faked in tests without a node.

pub mod wire;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ChainError;
use crate::http::{JsonHttp, RetryPolicy};
use crate::network::Network;
use crate::shared::AccAddress;

/// Execution result of an included transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxInfo {
    pub txhash: String,
    /// 0 means the transaction executed successfully.
    pub code: u32,
    pub raw_log: String,
}

impl TxInfo {
    pub fn succeeded(&self) -> bool {
        self.code == 0
    }
}

/// Read-only capability interface over a chain node.
#[allow(async_fn_in_trait)]
pub trait ChainNode {
    /// Look up a transaction by hash. `None` while the node has not indexed
    /// it yet.
    async fn tx_info(&self, txhash: &str) -> Result<Option<TxInfo>, ChainError>;

    /// Query a smart contract's store. `None` when the contract has no
    /// matching record.
    async fn contract_query<Q, T>(
        &self,
        contract: &AccAddress,
        query: &Q,
    ) -> Result<Option<T>, ChainError>
    where
        Q: Serialize + Sync,
        T: DeserializeOwned;
}

/// Concrete chain node over the LCD REST interface.
#[derive(Debug, Clone)]
pub struct LcdClient {
    http: JsonHttp,
    base_url: String,
}

impl LcdClient {
    pub fn new(http: JsonHttp, network: Network) -> Self {
        Self::with_base_url(http, network.lcd_url())
    }

    pub fn with_base_url(http: JsonHttp, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ChainNode for LcdClient {
    async fn tx_info(&self, txhash: &str) -> Result<Option<TxInfo>, ChainError> {
        let url = format!("{}/txs/{}", self.base_url, txhash);
        // No HTTP-level retry here: the confirmation loop owns the polling
        // schedule and a not-yet-indexed hash comes back as a 404.
        let raw: Option<wire::TxInfoResponse> =
            self.http.get_optional(&url, RetryPolicy::None).await?;
        Ok(raw.map(|r| TxInfo {
            txhash: r.txhash,
            code: r.code.unwrap_or(0),
            raw_log: r.raw_log.unwrap_or_default(),
        }))
    }

    async fn contract_query<Q, T>(
        &self,
        contract: &AccAddress,
        query: &Q,
    ) -> Result<Option<T>, ChainError>
    where
        Q: Serialize + Sync,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_string(query)
            .map_err(|e| ChainError::Decode(format!("query encode: {e}")))?;
        let url = format!(
            "{}/wasm/contracts/{}/store?query_msg={}",
            self.base_url,
            contract,
            urlencoding::encode(&payload)
        );
        let resp: Option<wire::ContractStoreResponse<Option<T>>> = self
            .http
            .get_optional(&url, RetryPolicy::Idempotent)
            .await?;
        Ok(resp.and_then(|r| r.result))
    }
}
