//! # Licium SDK
//!
//! Rust client for the Licium content registry: minting and licensing
//! ISCC-bound NFTs on a Terra-style chain, with clients for the supporting
//! ISCC-generation and IPFS services.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — shared newtypes, price math, error types
//! 2. **Transport** — `JsonHttp` with per-request retry policies
//! 3. **Collaborators** — `Wallet` and `ChainNode` capability traits plus
//!    concrete LCD/ISCC/IPFS clients
//! 4. **Registry** — contract messages, confirmation polling, the
//!    mint/license/resolve flows
//! 5. **High-Level Client** — `LiciumClient`, builder-constructed, no global
//!    state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use licium_sdk::prelude::*;
//!
//! let client = LiciumClient::builder()
//!     .network(Network::Testnet)
//!     .contract("terra1...registry")
//!     .build()?;
//!
//! let outcome = client.registry().mint(Some(&wallet), &spec).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and pure price math.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network selection and chain constants.
pub mod network;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// HTTP transport with retry policies.
pub mod http;

// ── Layer 3: Collaborators ───────────────────────────────────────────────────

/// Wallet capability interface and execute-message types.
pub mod wallet;

/// Chain node access: `ChainNode` trait and the LCD client.
pub mod chain;

/// ISCC generation service client.
pub mod iscc;

/// IPFS storage client.
pub mod storage;

// ── Layer 4: Registry domain ─────────────────────────────────────────────────

/// Registry records, messages, and submission flows.
pub mod registry;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `LiciumClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AccAddress, IsccCode, IsccComponents};

    // Price math
    pub use crate::shared::{from_micro, to_micro};

    // Errors
    pub use crate::error::{ChainError, SdkError, WalletError};

    // Network
    pub use crate::network::Network;

    // Collaborator interfaces
    pub use crate::chain::{ChainNode, LcdClient, TxInfo};
    pub use crate::wallet::{Coin, Fee, MsgExecuteContract, PostResponse, Wallet};

    // Registry domain
    pub use crate::registry::{
        submit_license, submit_mint, ConfirmConfig, MintSpec, NftRecord, TxOutcome,
    };

    // Services
    pub use crate::iscc::{IsccClient, IsccResult};
    pub use crate::storage::{StorageClient, StoredFile};

    // High-level client
    pub use crate::client::{LiciumClient, LiciumClientBuilder, PreparedAsset};

    // HTTP retry knobs
    pub use crate::http::{RetryConfig, RetryPolicy};
}
