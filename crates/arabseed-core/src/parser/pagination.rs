//! Pagination reader for ArabSeed listings
//!
//! Reads the WordPress-style `ul.page-numbers` control found under paginated
//! category listings.

use scraper::Html;

use crate::types::PaginationInfo;

use super::document::{all, first, first_in, text};

/// Read pagination from a listing document.
///
/// The current page comes from the control's `current` marker and falls back to
/// `requested_page` when the marker is missing or unreadable. Next and previous
/// pages are derived from the current page, never from the link text.
///
/// # Arguments
/// * `document` - Parsed listing page
/// * `requested_page` - Page number the caller asked for
pub fn parse_pagination(document: &Html, requested_page: u32) -> PaginationInfo {
    let mut pagination = PaginationInfo::single(requested_page);

    let Some(control) = first_in(document, "ul.page-numbers") else {
        return pagination;
    };

    if let Some(current) = first(&control, "span.current").and_then(|el| parse_page_number(&text(&el))) {
        pagination.current_page = current;
    }

    if first(&control, "a.next").is_some() {
        pagination.has_next = true;
        pagination.next_page = Some(pagination.current_page.saturating_add(1));
    }

    if first(&control, "a.prev").is_some() {
        pagination.has_prev = true;
        pagination.prev_page = Some(pagination.current_page.saturating_sub(1));
    }

    let last = all(&control, "a.page-numbers:not(.next):not(.prev)")
        .iter()
        .filter_map(|link| parse_page_number(&text(link)))
        .max();
    pagination.last_page = last;
    pagination.total_pages = last;

    pagination
}

/// Parse a page number written with ASCII or Arabic-Indic digits.
///
/// # Examples
/// ```
/// use arabseed_core::parser::parse_page_number;
///
/// assert_eq!(parse_page_number("12"), Some(12));
/// assert_eq!(parse_page_number("١٢"), Some(12));
/// assert_eq!(parse_page_number("…"), None);
/// ```
pub fn parse_page_number(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    value.chars().try_fold(0u32, |number, c| {
        let digit = decimal_digit(c)?;
        number.checked_mul(10)?.checked_add(digit)
    })
}

fn decimal_digit(c: char) -> Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        // Arabic-Indic
        '\u{0660}'..='\u{0669}' => Some(c as u32 - 0x0660),
        // Extended Arabic-Indic (Persian)
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - 0x06F0),
        _ => None,
    }
}
