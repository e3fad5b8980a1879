//! High-level client — `LiciumClient` with sub-client accessors.
//!
//! The builder wires every collaborator explicitly: network, registry
//! contract address, service endpoints, confirmation schedule. There is no
//! process-global state; clones share the underlying connection pool.

use crate::chain::LcdClient;
use crate::error::SdkError;
use crate::http::JsonHttp;
use crate::iscc::{IsccClient, IsccResult};
use crate::network::Network;
use crate::registry::{ConfirmConfig, Registry};
use crate::shared::AccAddress;
use crate::storage::{StorageClient, StoredFile, DEFAULT_GATEWAY_URL};

/// The primary entry point for the Licium SDK.
#[derive(Debug, Clone)]
pub struct LiciumClient {
    pub(crate) node: LcdClient,
    pub(crate) iscc: IsccClient,
    pub(crate) storage: StorageClient,
    pub(crate) contract: AccAddress,
    pub(crate) network: Network,
    pub(crate) confirm: ConfirmConfig,
}

/// Result of preparing a media file for minting.
///
/// The two collaborator calls fail independently; a generated identifier
/// stays usable even when the upload failed, and vice versa. Nothing is
/// rolled back.
#[derive(Debug)]
pub struct PreparedAsset {
    pub iscc: Result<IsccResult, SdkError>,
    pub stored: Result<StoredFile, SdkError>,
}

impl LiciumClient {
    pub fn builder() -> LiciumClientBuilder {
        LiciumClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn registry(&self) -> Registry<'_> {
        Registry { client: self }
    }

    pub fn iscc(&self) -> &IsccClient {
        &self.iscc
    }

    pub fn storage(&self) -> &StorageClient {
        &self.storage
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Block-explorer link for a transaction on the configured network.
    pub fn tx_url(&self, txhash: &str) -> String {
        self.network.finder_tx_url(txhash)
    }

    /// Generate the ISCC identifier and upload the media in one call.
    ///
    /// Per-step results are reported separately so the caller can show
    /// partial completion.
    pub async fn prepare_asset(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        title: &str,
    ) -> PreparedAsset {
        let iscc = self
            .iscc
            .generate_from_file(file_name, bytes.clone(), title)
            .await;
        let stored = self.storage.add(file_name, bytes).await;
        PreparedAsset { iscc, stored }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct LiciumClientBuilder {
    network: Network,
    lcd_url: Option<String>,
    contract: Option<AccAddress>,
    iscc_base_url: String,
    storage_api_url: String,
    gateway_url: String,
    confirm: ConfirmConfig,
}

impl Default for LiciumClientBuilder {
    fn default() -> Self {
        Self {
            network: Network::default(),
            lcd_url: None,
            contract: None,
            iscc_base_url: "http://localhost:8000".to_string(),
            storage_api_url: "http://localhost:5001".to_string(),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            confirm: ConfirmConfig::default(),
        }
    }
}

impl LiciumClientBuilder {
    pub fn network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Override the LCD endpoint implied by the network.
    pub fn lcd_url(mut self, url: &str) -> Self {
        self.lcd_url = Some(url.to_string());
        self
    }

    /// Address of the deployed registry contract. Required.
    pub fn contract(mut self, address: impl Into<AccAddress>) -> Self {
        self.contract = Some(address.into());
        self
    }

    pub fn iscc_base_url(mut self, url: &str) -> Self {
        self.iscc_base_url = url.to_string();
        self
    }

    pub fn storage_api_url(mut self, url: &str) -> Self {
        self.storage_api_url = url.to_string();
        self
    }

    pub fn gateway_url(mut self, url: &str) -> Self {
        self.gateway_url = url.to_string();
        self
    }

    pub fn confirm(mut self, config: ConfirmConfig) -> Self {
        self.confirm = config;
        self
    }

    pub fn build(self) -> Result<LiciumClient, SdkError> {
        let contract = self.contract.ok_or_else(|| {
            SdkError::Validation("registry contract address is required".to_string())
        })?;

        let http = JsonHttp::new()?;
        let node = match &self.lcd_url {
            Some(url) => LcdClient::with_base_url(http.clone(), url),
            None => LcdClient::new(http.clone(), self.network),
        };

        Ok(LiciumClient {
            node,
            iscc: IsccClient::new(http.clone(), &self.iscc_base_url),
            storage: StorageClient::new(http, &self.storage_api_url, &self.gateway_url),
            contract,
            network: self.network,
            confirm: self.confirm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_contract() {
        let err = LiciumClient::builder().build().unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_build_wires_network() {
        let client = LiciumClient::builder()
            .network(Network::Local)
            .contract("terra1registry")
            .build()
            .unwrap();
        assert_eq!(client.network(), Network::Local);
        assert_eq!(
            client.tx_url("ABC"),
            "https://finder.terra.money/localterra/tx/ABC"
        );
    }
}
