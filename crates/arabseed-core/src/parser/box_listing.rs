//! Paginated category listing parser for ArabSeed
//!
//! Category pages (the Netflix listing among them) lay films out as
//! `li.box__xs__2` boxes and end with a page-number control.

use scraper::ElementRef;

use crate::types::{FilmSummary, ListingResult};

use super::document::{all_in, first, parse_document, text_of};
use super::listing::{block_summary, non_empty_text};
use super::pagination::parse_pagination;

/// Parse one page of a category listing.
///
/// # Arguments
/// * `html` - Raw HTML content of the listing page
/// * `requested_page` - Page number that was fetched, used when the page does not say
pub fn parse_box_page(html: &str, requested_page: u32) -> ListingResult {
    let document = parse_document(html);

    let films = all_in(&document, "li.box__xs__2")
        .iter()
        .filter_map(parse_box_card)
        .collect();
    let pagination = parse_pagination(&document, requested_page);

    ListingResult::new(films, pagination)
}

/// Parse a single listing box. Returns `None` when the box holds no movie block.
pub fn parse_box_card(item: &ElementRef) -> Option<FilmSummary> {
    let contents = first(item, "div.item__contents")?;
    let link = first(&contents, "a.movie__block")?;

    let mut film = block_summary(&link);
    film.ratings = text_of(&link, "div.post__ratings");
    film.info.genres = [
        non_empty_text(&link, "div.__genre"),
        non_empty_text(&link, "div.__quality"),
    ]
    .into_iter()
    .flatten()
    .collect();

    Some(film)
}
