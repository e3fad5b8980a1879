//! Unified SDK error types.

use thiserror::Error;

use crate::shared::price::PriceError;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("Price error: {0}")]
    Price(#[from] PriceError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Chain-node errors (LCD queries and confirmation).
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("LCD request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Malformed chain response: {0}")]
    Decode(String),

    /// The broadcast transaction was still not indexed when the
    /// confirmation attempt budget ran out.
    #[error("transaction not indexed after {attempts} confirmation attempts")]
    Unconfirmed { attempts: u32 },
}

/// Wallet-layer failures, as reported by a [`Wallet`](crate::wallet::Wallet)
/// implementation.
///
/// The `Display` strings are user-facing copy and must stay stable: the
/// submission flows surface them verbatim in
/// [`TxOutcome::Failure`](crate::registry::TxOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The user rejected the signing prompt.
    #[error("User Denied")]
    UserDenied,

    /// The transaction could not be constructed before broadcast.
    #[error("Create Tx Failed: {0}")]
    CreateTxFailed(String),

    /// Broadcast was attempted and rejected.
    #[error("Tx Failed: {0}")]
    TxFailed(String),

    /// The wallet's own response deadline elapsed.
    #[error("Timeout")]
    Timeout,

    /// Uncategorized wallet-layer failure.
    #[error("Unspecified Error: {0}")]
    Unspecified(String),
}
