//! Home page parser for ArabSeed
//!
//! Parses the latest-episodes strip of the home page.

use scraper::ElementRef;

use crate::types::EpisodeSummary;

use super::document::{all_in, attr, attr_of, first, parse_document, text_of};

/// Parse the episode cards of the home page.
///
/// Cards are returned in page order, which is the site's own recency order.
///
/// # Arguments
/// * `html` - Raw HTML content of the home page
pub fn parse_home_episodes(html: &str) -> Vec<EpisodeSummary> {
    let document = parse_document(html);
    all_in(&document, "a.episode__item")
        .iter()
        .map(parse_episode_item)
        .collect()
}

fn parse_episode_item(item: &ElementRef) -> EpisodeSummary {
    EpisodeSummary {
        url: attr(item, "href").unwrap_or_default(),
        title: attr(item, "title").unwrap_or_default(),
        // Home cards are always lazy loaded
        image: attr_of(item, "img", "data-src"),
        is_last: first(item, "div.ribbon__new").is_some(),
        series_title: text_of(item, "span"),
        episode_text: text_of(item, "p"),
        episode_number: text_of(item, "em"),
    }
}
