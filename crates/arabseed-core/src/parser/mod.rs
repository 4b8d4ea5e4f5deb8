//! HTML parsers for ArabSeed pages
//!
//! This module contains parsers for extracting data from ArabSeed HTML pages:
//! - `detail`: Parse a single film page
//! - `home`: Parse the latest episodes on the home page
//! - `listing`: Parse the films page (slider and grid cards)
//! - `box_listing`: Parse paginated category pages
//! - `pagination`: Read the page-number control
//! - `document`: Element probes shared by the parsers

pub mod box_listing;
pub mod detail;
pub mod document;
pub mod home;
pub mod listing;
pub mod pagination;

// Re-export main parsing functions
pub use box_listing::{parse_box_card, parse_box_page};
pub use detail::parse_film_detail;
pub use document::parse_document;
pub use home::parse_home_episodes;
pub use listing::{parse_films_page, parse_grid_card, parse_slider_card};
pub use pagination::{parse_page_number, parse_pagination};
