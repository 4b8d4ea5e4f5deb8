//! Films listing parser for ArabSeed
//!
//! The films page mixes two card layouts: "slider" cards in the featured strip
//! and "content grid" cards below it. Both map onto [`FilmSummary`]; fields a
//! layout does not carry stay unset.

use scraper::ElementRef;

use crate::types::{FilmInfo, FilmSummary};

use super::document::{all, all_in, attr, attr_of, first, image_source, parse_document, text, text_of};

/// Parse every film card of the films listing page.
///
/// All slider cards come first, then all grid cards, each group in page order.
///
/// # Arguments
/// * `html` - Raw HTML content of the listing page
pub fn parse_films_page(html: &str) -> Vec<FilmSummary> {
    let document = parse_document(html);

    let sliders = all_in(&document, "div.slider__single")
        .into_iter()
        .filter_map(|card| parse_slider_card(&card));
    let grid = all_in(&document, "div.item__contents")
        .into_iter()
        .filter_map(|card| parse_grid_card(&card));

    sliders.chain(grid).collect()
}

/// Parse a featured slider card. Returns `None` when the card has no link.
pub fn parse_slider_card(card: &ElementRef) -> Option<FilmSummary> {
    let link = first(card, "a")?;
    let post_info = first(&link, "div.post__info");

    Some(FilmSummary {
        url: attr(&link, "href").unwrap_or_default(),
        title: attr(&link, "title").unwrap_or_default(),
        image: card_image(&link),
        ratings: text_of(&link, "div.post__ratings"),
        category: text_of(&link, "div.post__category"),
        info: FilmInfo {
            title: post_info.as_ref().and_then(|info| text_of(info, "h3")),
            genres: post_info
                .as_ref()
                .map(|info| all(info, "li.__genre").iter().map(text).collect())
                .unwrap_or_default(),
            runtime: post_info
                .as_ref()
                .and_then(|info| text_of(info, "li.__runtime")),
        },
        description: first(&link, "div.post__content").and_then(|content| text_of(&content, "p")),
        trailer: attr_of(&link, "div.trailer__btn", "data-iframe"),
    })
}

/// Parse a content grid card. Returns `None` when the card has no movie block link.
///
/// Grid cards carry a quality badge instead of genres; it is reported as the only genre.
pub fn parse_grid_card(card: &ElementRef) -> Option<FilmSummary> {
    let link = first(card, "a.movie__block")?;
    let mut film = block_summary(&link);
    film.info.genres = non_empty_text(&link, "div.__quality").into_iter().collect();
    Some(film)
}

/// Fields shared by every `a.movie__block` card.
pub(crate) fn block_summary(link: &ElementRef) -> FilmSummary {
    FilmSummary {
        url: attr(link, "href").unwrap_or_default(),
        title: attr(link, "title").unwrap_or_default(),
        image: card_image(link),
        ratings: None,
        category: text_of(link, "div.post__category"),
        info: FilmInfo {
            title: first(link, "div.post__info").and_then(|info| text_of(&info, "h3")),
            genres: Vec::new(),
            runtime: None,
        },
        description: first(link, "div.post__info").and_then(|info| text_of(&info, "p")),
        trailer: None,
    }
}

/// Poster of a card, read from its image frame.
pub(crate) fn card_image(link: &ElementRef) -> Option<String> {
    let frame = first(link, "div.post__image")?;
    let img = first(&frame, "img")?;
    image_source(&img)
}

/// Text of the first match, dropped when empty.
pub(crate) fn non_empty_text(element: &ElementRef, css: &str) -> Option<String> {
    text_of(element, css).filter(|value| !value.is_empty())
}
