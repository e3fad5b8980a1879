//! IPFS storage client — content-addressed media upload.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::SdkError;
use crate::http::JsonHttp;

/// Public gateway used to derive retrievable URIs from content hashes.
pub const DEFAULT_GATEWAY_URL: &str = "https://ipfs.infura.io";

/// A stored file: its content hash and a gateway URI for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub hash: String,
    pub uri: String,
}

/// Raw `add` response from the IPFS HTTP API.
#[derive(Debug, Clone, Deserialize)]
struct AddResponse {
    #[serde(rename = "Hash")]
    hash: String,
    #[serde(rename = "Name")]
    #[allow(dead_code)]
    name: String,
}

/// Client for an IPFS node's HTTP API.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: JsonHttp,
    api_url: String,
    gateway_url: String,
}

impl StorageClient {
    pub fn new(http: JsonHttp, api_url: &str, gateway_url: &str) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
        }
    }

    /// Upload file bytes and return the content hash plus a gateway URI.
    pub async fn add(&self, file_name: &str, bytes: Vec<u8>) -> Result<StoredFile, SdkError> {
        let form = Form::new().part(
            "file",
            Part::bytes(bytes).file_name(file_name.to_string()),
        );
        let url = format!("{}/api/v0/add", self.api_url);
        let resp: AddResponse = self.http.post_multipart(&url, form).await?;
        let uri = self.gateway_uri(&resp.hash);
        Ok(StoredFile {
            hash: resp.hash,
            uri,
        })
    }

    /// Retrievable URI for a content hash.
    pub fn gateway_uri(&self, hash: &str) -> String {
        format!("{}/ipfs/{}", self.gateway_url, hash)
    }
}
