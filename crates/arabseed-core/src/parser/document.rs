//! Element probes shared by the extractors
//!
//! Every probe answers `None` when the node is missing, so a changed block in the
//! markup only empties the matching field.

use scraper::{ElementRef, Html, Selector};

/// Parse a full HTML document. Malformed markup never fails.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Compile a CSS selector, treating an invalid one as matching nothing.
fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// First descendant of `element` matching `css`.
pub fn first<'a>(element: &ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = selector(css)?;
    element.select(&selector).next()
}

/// All descendants of `element` matching `css`, in document order.
pub fn all<'a>(element: &ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(selector) => element.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// First element of the whole document matching `css`.
pub fn first_in<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = selector(css)?;
    document.select(&selector).next()
}

/// All elements of the whole document matching `css`, in document order.
pub fn all_in<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(selector) => document.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// Concatenated text of `element`, trimmed.
pub fn text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Attribute value of `element`.
pub fn attr(element: &ElementRef, name: &str) -> Option<String> {
    element.value().attr(name).map(|s| s.to_string())
}

/// Trimmed text of the first descendant matching `css`.
pub fn text_of(element: &ElementRef, css: &str) -> Option<String> {
    first(element, css).map(|el| text(&el))
}

/// Attribute of the first descendant matching `css`.
pub fn attr_of(element: &ElementRef, css: &str, name: &str) -> Option<String> {
    first(element, css).and_then(|el| attr(&el, name))
}

/// Image URL of a lazily loaded `<img>`: `src` unless empty, then `data-src`.
pub fn image_source(img: &ElementRef) -> Option<String> {
    attr(img, "src")
        .filter(|src| !src.is_empty())
        .or_else(|| attr(img, "data-src"))
}
