//! Shared HTTP transport — `JsonHttp`.
//!
//! One transport serves all three remote collaborators (LCD node, ISCC
//! service, IPFS API). Service clients own their base URLs and call the
//! generic methods here; response decoding into wire types happens at the
//! caller.

use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::multipart::Form;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// JSON-over-HTTP transport with per-request retry policies.
#[derive(Debug, Clone)]
pub struct JsonHttp {
    client: Client,
}

impl JsonHttp {
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }

    /// GET and decode a JSON body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.get_with_retry(url, retry).await
    }

    /// GET where a 404 is a valid "no such record" answer.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<Option<T>, HttpError> {
        match self.get_with_retry(url, retry).await {
            Ok(value) => Ok(Some(value)),
            Err(HttpError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// POST a multipart form and decode a JSON body.
    ///
    /// Uploads are not idempotent, so this is always a single attempt.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: &str,
        form: Form,
    ) -> Result<T, HttpError> {
        let resp = self.client.post(url).multipart(form).send().await?;
        Self::decode(resp).await
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match retry {
            RetryPolicy::None => return self.do_get(url).await,
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, HttpError> {
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
