//! ISCC generation service client.
//!
//! The service derives the composite identifier and tophash from file
//! content; the SDK only uploads and carries the result.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;

use crate::error::SdkError;
use crate::http::JsonHttp;
use crate::shared::IsccCode;

/// Identifier material returned for an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IsccResult {
    pub iscc: IsccCode,
    /// Content-derived integrity hash accompanying the code.
    pub tophash: String,
}

/// Client for the ISCC generation HTTP API.
#[derive(Debug, Clone)]
pub struct IsccClient {
    http: JsonHttp,
    base_url: String,
}

impl IsccClient {
    pub fn new(http: JsonHttp, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a file and receive its generated identifier.
    ///
    /// `title` feeds the meta sub-code; pass the intended display name.
    pub async fn generate_from_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        title: &str,
    ) -> Result<IsccResult, SdkError> {
        let meta = json!({ "title": title });
        let form = Form::new()
            .text("data", meta.to_string())
            .part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        let url = format!("{}/generate/from_file", self.base_url);
        Ok(self.http.post_multipart(&url, form).await?)
    }
}
