//! Error types for the ArabSeed scraper
//!
//! This module defines all error types used throughout the library.
//! ArabSeedError implements Serialize so it can be embedded in JSON payloads.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for ArabSeed scraper operations
#[derive(Error, Debug)]
pub enum ArabSeedError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    /// Failed to parse HTML content
    ///
    /// Part of the taxonomy for structurally invalid documents. The HTML parser
    /// is permissive, so no extractor returns it today.
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Invalid film URL supplied by the caller
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid listing endpoint supplied by the caller
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Query string that does not fit the route, e.g. a non-numeric page
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The page was fetched but holds no film
    #[error("Film not found: {0}")]
    NotFound(String),
}

impl ArabSeedError {
    /// Whether the error was caused by caller input rather than the upstream site.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::InvalidEndpoint(_) | Self::InvalidQuery(_)
        )
    }

    /// Whether the error came from talking to the upstream site.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::UpstreamStatus { .. })
    }
}

/// Serialize ArabSeedError as its display string
impl Serialize for ArabSeedError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for ArabSeed scraper operations
pub type Result<T> = std::result::Result<T, ArabSeedError>;
