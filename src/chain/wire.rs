//! LCD wire types.

use serde::Deserialize;

/// Raw transaction lookup response from the LCD node.
///
/// `code` is absent on successful execution; any present non-zero value
/// means the transaction was included but failed on chain.
#[derive(Debug, Clone, Deserialize)]
pub struct TxInfoResponse {
    pub txhash: String,
    #[serde(default)]
    pub code: Option<u32>,
    #[serde(default)]
    pub raw_log: Option<String>,
}

/// Envelope around smart-contract store queries.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractStoreResponse<T> {
    pub result: T,
}
