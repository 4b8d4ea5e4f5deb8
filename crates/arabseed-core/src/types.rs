//! Data types for the ArabSeed scraper
//!
//! This module contains the records produced by the extractors.
//! Every optional field serializes as `null` when the markup lacks it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Secondary information block of a listing card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmInfo {
    /// Heading inside the card's info panel
    pub title: Option<String>,
    /// Genre labels in card order (may be empty)
    pub genres: Vec<String>,
    /// Runtime label, only carried by slider cards
    pub runtime: Option<String>,
}

/// One film or series card from a listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmSummary {
    /// Link to the film page (`href` of the card anchor)
    pub url: String,
    /// Display title (`title` attribute of the same anchor)
    pub title: String,
    /// Poster image URL
    pub image: Option<String>,
    pub ratings: Option<String>,
    pub category: Option<String>,
    pub info: FilmInfo,
    pub description: Option<String>,
    /// Trailer iframe URL, only carried by slider cards
    pub trailer: Option<String>,
}

/// Likes and views counters on a film page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserActions {
    pub likes: Option<String>,
    pub views: Option<String>,
}

/// IMDb rating box
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImdbRating {
    pub rating: Option<String>,
    pub votes: Option<String>,
}

/// Site visitors' star rating
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRating {
    pub average: Option<String>,
    pub count: Option<String>,
}

/// Watch and download buttons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmLinks {
    pub watch: Option<String>,
    pub download: Option<String>,
}

/// Value of one row in the film details list.
///
/// Rows holding a tag list become `Tags`, rows holding a single link become `Text`.
/// Serialized untagged, as a plain string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Text(String),
    Tags(Vec<String>),
}

/// Everything extracted from a single film page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmDetail {
    pub cover_image: Option<String>,
    /// Present only when the page has a user actions block
    pub user_actions: Option<UserActions>,
    pub title: Option<String>,
    pub breadcrumbs: Option<Vec<String>>,
    pub imdb_rating: Option<ImdbRating>,
    pub description: Option<String>,
    pub story: Option<String>,
    /// Label to value rows, in page order
    pub details: IndexMap<String, DetailValue>,
    pub links: FilmLinks,
    pub poster_image: Option<String>,
    /// Quality ribbon on the poster
    pub quality: Option<String>,
    pub visitor_rating: Option<VisitorRating>,
}

/// Latest-episode card from the home page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub url: String,
    pub title: String,
    pub image: Option<String>,
    /// Whether the card carries the "new" ribbon
    pub is_last: bool,
    pub series_title: Option<String>,
    pub episode_text: Option<String>,
    pub episode_number: Option<String>,
}

/// Page-number information read from a listing's pagination control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Current page number (1-based)
    pub current_page: u32,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
    /// Highest numbered page link found
    pub last_page: Option<u32>,
    /// Same value as `last_page`
    pub total_pages: Option<u32>,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationInfo {
    /// Pagination for a page without any pagination control
    pub fn single(current_page: u32) -> Self {
        Self {
            current_page,
            next_page: None,
            prev_page: None,
            last_page: None,
            total_pages: None,
            has_next: false,
            has_prev: false,
        }
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResult {
    pub films: Vec<FilmSummary>,
    pub pagination: PaginationInfo,
    /// Number of films on this page
    pub total_results: usize,
}

impl ListingResult {
    /// Assemble a listing page; `total_results` is the number of films given.
    pub fn new(films: Vec<FilmSummary>, pagination: PaginationInfo) -> Self {
        let total_results = films.len();
        Self {
            films,
            pagination,
            total_results,
        }
    }
}
