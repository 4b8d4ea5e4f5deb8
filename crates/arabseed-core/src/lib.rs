//! ArabSeed Scraper Core Library
//!
//! This crate provides the core scraping functionality for the ArabSeed
//! film and series site.
//!
//! # Features
//! - Latest episodes from the home page
//! - Films from the films listing (slider and grid cards)
//! - Paginated category listings, including the Netflix category
//! - Full film details from a film page
//!
//! Every extractor tolerates missing markup: an absent block leaves its
//! field unset instead of failing the whole page.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ArabSeedClient, ClientConfig};
pub use endpoints::Endpoints;
pub use error::{ArabSeedError, Result};
pub use scraper::ArabSeedScraper;
pub use types::{
    DetailValue, EpisodeSummary, FilmDetail, FilmInfo, FilmLinks, FilmSummary, ImdbRating,
    ListingResult, PaginationInfo, UserActions, VisitorRating,
};
