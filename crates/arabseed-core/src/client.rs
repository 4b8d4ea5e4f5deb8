//! HTTP client for ArabSeed
//!
//! This module provides the fetcher: one GET per call, bounded by a timeout,
//! with non-success statuses surfaced as errors instead of empty pages.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use tracing::{debug, warn};

use crate::error::{ArabSeedError, Result};

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header for Arabic content
const DEFAULT_ACCEPT_LANGUAGE: &str = "ar,en-US;q=0.9,en;q=0.8";

/// Configuration for the ArabSeed HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// User-Agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// HTTP client for ArabSeed
///
/// Cheap to share: the inner `reqwest::Client` pools connections and is safe to
/// use from concurrent requests.
#[derive(Debug, Clone)]
pub struct ArabSeedClient {
    /// Underlying HTTP client
    client: reqwest::Client,
}

impl ArabSeedClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the HTML of an absolute URL.
    ///
    /// # Errors
    /// - `ArabSeedError::HttpError` - transport failure or timeout
    /// - `ArabSeedError::UpstreamStatus` - the site answered with a non-2xx status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url, error = %e, "request failed");
            ArabSeedError::HttpError(e)
        })?;
        let status = response.status();

        if !status.is_success() {
            warn!(url, status = status.as_u16(), "upstream returned an error status");
            return Err(ArabSeedError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!(url, bytes = body.len(), "page fetched");
        Ok(body)
    }
}
