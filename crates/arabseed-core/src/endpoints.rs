//! Upstream site layout
//!
//! Base URL and path templates of the ArabSeed pages the scraper reads.

use crate::error::{ArabSeedError, Result};

/// Base URL for ArabSeed
pub const ARABSEED_BASE_URL: &str = "https://a.asd.homes";

/// Home page with the latest episodes
pub const HOME_PATH: &str = "/main0";

/// Films listing with slider and grid cards
pub const FILMS_PATH: &str = "/movies/";

/// Netflix category listing
pub const NETFLIX_FILMS_PATH: &str = "/category/netfilx/افلام-netfilx/";

/// Where each scraped page lives on the upstream site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Scheme and host, without a trailing slash
    pub base_url: String,
    pub home: String,
    pub films: String,
    pub netflix_films: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_base_url(ARABSEED_BASE_URL)
    }
}

impl Endpoints {
    /// Default paths on a different host, e.g. a mirror domain.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            home: HOME_PATH.to_string(),
            films: FILMS_PATH.to_string(),
            netflix_films: NETFLIX_FILMS_PATH.to_string(),
        }
    }

    /// Absolute URL of the home page
    pub fn home_url(&self) -> String {
        format!("{}{}", self.base_url, self.home)
    }

    /// Absolute URL of the films listing
    pub fn films_url(&self) -> String {
        format!("{}{}", self.base_url, self.films)
    }

    /// Absolute URL of one page of a category listing.
    ///
    /// The endpoint gets a leading `/` when it lacks one. Pages after the first
    /// append a `/page/{n}/` segment.
    ///
    /// # Errors
    /// `ArabSeedError::InvalidEndpoint` when `endpoint` is empty
    ///
    /// # Example
    /// ```
    /// use arabseed_core::Endpoints;
    ///
    /// let endpoints = Endpoints::default();
    /// assert_eq!(
    ///     endpoints.listing_url("category/series/", 3).unwrap(),
    ///     "https://a.asd.homes/category/series/page/3/"
    /// );
    /// ```
    pub fn listing_url(&self, endpoint: &str, page: u32) -> Result<String> {
        if endpoint.is_empty() {
            return Err(ArabSeedError::InvalidEndpoint(
                "endpoint parameter is required".to_string(),
            ));
        }

        let mut url = if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        };

        if page > 1 {
            let trimmed = url.trim_end_matches('/').len();
            url.truncate(trimmed);
            url.push_str(&format!("/page/{}/", page));
        }

        Ok(url)
    }
}
