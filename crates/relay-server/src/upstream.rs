//! Outbound client for the members document.
//!
//! One GET per call, no retries. Transport failures, non-2xx statuses and
//! bodies that do not parse as JSON all surface as [`UpstreamError`].

use axum::body::Bytes;
use relay_config::RelayConfig;
use reqwest::StatusCode;
use serde::de::IgnoredAny;
use thiserror::Error;

const USER_AGENT: &str = concat!("users-relay/", env!("CARGO_PKG_VERSION"));

/// Byte order mark some static hosts prepend to UTF-8 documents.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reasons an outbound fetch did not yield a usable document.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream responded with {0}")]
    Status(StatusCode),
    #[error("upstream body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fetches the configured document through a pooled `reqwest::Client`.
pub struct UpstreamClient {
    client: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    pub fn new(config: &RelayConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.upstream_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the document bytes exactly as received, minus a leading BOM.
    ///
    /// The body is parsed only to confirm it is JSON; the parsed value is
    /// discarded so the caller relays the original bytes.
    pub async fn fetch(&self) -> Result<Bytes, UpstreamError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let mut body = response.bytes().await?;
        if body.starts_with(UTF8_BOM) {
            body = body.slice(UTF8_BOM.len()..);
        }
        serde_json::from_slice::<IgnoredAny>(&body)?;
        Ok(body)
    }
}
