//! Main ArabSeed Scraper API
//!
//! This module provides the high-level API for scraping ArabSeed.
//! It combines the HTTP client with parsers: every call performs one fetch,
//! runs one extractor and keeps no state between calls.

use tracing::debug;

use crate::client::{ArabSeedClient, ClientConfig};
use crate::endpoints::Endpoints;
use crate::error::{ArabSeedError, Result};
use crate::parser::{parse_box_page, parse_film_detail, parse_films_page, parse_home_episodes};
use crate::types::{EpisodeSummary, FilmDetail, FilmSummary, ListingResult};

/// Main scraper API for ArabSeed
///
/// # Example
/// ```no_run
/// use arabseed_core::ArabSeedScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = ArabSeedScraper::new()?;
///
///     let listing = scraper.netflix_films(2).await?;
///     println!("Found {} films", listing.total_results);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ArabSeedScraper {
    client: ArabSeedClient,
    endpoints: Endpoints,
}

impl ArabSeedScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), Endpoints::default())
    }

    /// Create a new scraper with custom client settings and upstream layout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig, endpoints: Endpoints) -> Result<Self> {
        let client = ArabSeedClient::with_config(config)?;
        Ok(Self::with_client(client, endpoints))
    }

    /// Create a new scraper with a pre-configured client.
    pub fn with_client(client: ArabSeedClient, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// Upstream layout this scraper reads from
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Films from the films listing page, slider cards first.
    pub async fn films_from_films_page(&self) -> Result<Vec<FilmSummary>> {
        let html = self.client.fetch(&self.endpoints.films_url()).await?;
        let films = parse_films_page(&html);
        debug!(count = films.len(), "parsed films page");
        Ok(films)
    }

    /// Latest episodes from the home page, in the site's order.
    pub async fn films_from_home(&self) -> Result<Vec<EpisodeSummary>> {
        let html = self.client.fetch(&self.endpoints.home_url()).await?;
        let episodes = parse_home_episodes(&html);
        debug!(count = episodes.len(), "parsed home page");
        Ok(episodes)
    }

    /// One page of the Netflix category listing.
    ///
    /// # Arguments
    /// * `page` - Page number (1-based)
    pub async fn netflix_films(&self, page: u32) -> Result<ListingResult> {
        self.box_listing(&self.endpoints.netflix_films, page).await
    }

    /// One page of any category listing laid out in boxes.
    ///
    /// # Arguments
    /// * `endpoint` - Category path on the site, with or without a leading `/`
    /// * `page` - Page number (1-based)
    ///
    /// # Returns
    /// * `Ok(ListingResult)` with the films and pagination of that page
    /// * `Err(ArabSeedError::InvalidEndpoint)` if `endpoint` is empty
    pub async fn box_listing(&self, endpoint: &str, page: u32) -> Result<ListingResult> {
        let url = self.endpoints.listing_url(endpoint, page)?;
        let html = self.client.fetch(&url).await?;
        let result = parse_box_page(&html, page);
        debug!(
            count = result.total_results,
            current_page = result.pagination.current_page,
            "parsed listing page"
        );
        Ok(result)
    }

    /// Details of a single film.
    ///
    /// # Arguments
    /// * `url` - Absolute `http://` or `https://` URL of the film page
    ///
    /// # Returns
    /// * `Ok(Some(FilmDetail))` with the film's details
    /// * `Ok(None)` when the page holds no film
    /// * `Err(ArabSeedError::InvalidUrl)` if `url` is empty or not http(s)
    ///
    /// # Example
    /// ```no_run
    /// use arabseed_core::ArabSeedScraper;
    ///
    /// # async fn example() -> Result<(), arabseed_core::ArabSeedError> {
    /// let scraper = ArabSeedScraper::new()?;
    /// if let Some(film) = scraper.get_film_information("https://a.asd.homes/dune/").await? {
    ///     println!("{:?}", film.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_film_information(&self, url: &str) -> Result<Option<FilmDetail>> {
        validate_film_url(url)?;

        let html = self.client.fetch(url).await?;
        let detail = parse_film_detail(&html);
        if detail.is_none() {
            debug!(url, "page has no detail area");
        }
        Ok(detail)
    }
}

/// Check that a film URL is present and uses http or https.
pub fn validate_film_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(ArabSeedError::InvalidUrl("URL parameter is required".to_string()));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ArabSeedError::InvalidUrl(format!(
            "'{}'. URL must start with http:// or https://",
            url
        )));
    }

    Ok(())
}
