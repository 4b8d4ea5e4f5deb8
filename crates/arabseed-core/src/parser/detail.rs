//! Film detail parser for ArabSeed
//!
//! Parses a single film page. Each block is probed on its own, so a block
//! missing from the markup only leaves its field empty.

use indexmap::IndexMap;
use scraper::ElementRef;

use crate::types::{DetailValue, FilmDetail, FilmLinks, ImdbRating, UserActions, VisitorRating};

use super::document::{all, attr_of, first, first_in, image_source, parse_document, text, text_of};

/// Parse a film page.
///
/// # Arguments
/// * `html` - Raw HTML content of the film page
///
/// # Returns
/// * `Some(FilmDetail)` when the page has a detail area
/// * `None` when it does not, meaning there is no such film
pub fn parse_film_detail(html: &str) -> Option<FilmDetail> {
    let document = parse_document(html);
    let area = first_in(&document, "section.single__area")?;

    let poster_side = first(&area, "div.poster__side");

    Some(FilmDetail {
        cover_image: attr_of(&area, "div.single__cover img", "src"),
        user_actions: extract_user_actions(&area),
        title: text_of(&area, "h1.post__name"),
        breadcrumbs: first(&area, "ol.bread__crumbs")
            .map(|ol| all(&ol, "li").iter().map(text).collect()),
        imdb_rating: extract_imdb_rating(&area),
        description: text_of(&area, "p.post__content"),
        story: text_of(&area, "div.post__story"),
        details: extract_details(&area),
        links: FilmLinks {
            watch: attr_of(&area, "a.watch__btn", "href"),
            download: attr_of(&area, "a.download__btn", "href"),
        },
        poster_image: poster_side.as_ref().and_then(extract_poster_image),
        quality: poster_side.as_ref().and_then(|side| text_of(side, "div.ribbon")),
        visitor_rating: extract_visitor_rating(&area),
    })
}

fn extract_user_actions(area: &ElementRef) -> Option<UserActions> {
    let actions = first(area, "div.user__actions")?;
    Some(UserActions {
        likes: first(&actions, "button#like__post")
            .and_then(|button| text_of(&button, "span.like__count")),
        views: first(&actions, "button.views__count")
            .and_then(|button| text_of(&button, "span.like__count")),
    })
}

fn extract_imdb_rating(area: &ElementRef) -> Option<ImdbRating> {
    let rating_box = first(area, "div.rating__box")?;
    Some(ImdbRating {
        rating: text_of(&rating_box, "div.rate__txt"),
        votes: text_of(&rating_box, "span.votes"),
    })
}

fn extract_visitor_rating(area: &ElementRef) -> Option<VisitorRating> {
    let stars = first(area, "div.star__rating")?;
    Some(VisitorRating {
        average: text_of(&stars, "span.rating-average"),
        count: text_of(&stars, "span.rating-count"),
    })
}

/// Build the label to value mapping from the info list.
///
/// A row with a tag list maps to all of its tag texts, a row with a plain link
/// maps to that link's text. Rows without a label or value are skipped.
fn extract_details(area: &ElementRef) -> IndexMap<String, DetailValue> {
    let mut details = IndexMap::new();

    let Some(info_list) = first(area, "ul.info__area__ul") else {
        return details;
    };

    for row in all(&info_list, "li") {
        let Some(key) = first(&row, "div.title__kit")
            .and_then(|kit| text_of(&kit, "span"))
            .map(|label| clean_label(&label))
        else {
            continue;
        };

        if let Some(tags) = first(&row, "ul.tags__list") {
            let values = all(&tags, "a").iter().map(text).collect();
            details.insert(key, DetailValue::Tags(values));
        } else if let Some(link) = first(&row, "a") {
            details.insert(key, DetailValue::Text(text(&link)));
        }
    }

    details
}

/// Drop every colon from a row label.
fn clean_label(label: &str) -> String {
    label.replace(':', "").trim().to_string()
}

/// Poster inside the poster card, preferring the lazy-loader image.
fn extract_poster_image(poster_side: &ElementRef) -> Option<String> {
    let card = first(poster_side, "div.poster__single")?;
    let img = first(&card, "img.images__loader").or_else(|| first(&card, "img"))?;
    image_source(&img)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"
        <html><body>
        <section class="single__area">
            <div class="single__cover"><img src="https://img.test/cover.jpg"></div>
            <div class="user__actions">
                <button id="like__post"><span class="like__count"> 120 </span></button>
                <button class="views__count"><span class="like__count">5.4K</span></button>
            </div>
            <ol class="bread__crumbs"><li>الرئيسية</li><li> افلام </li><li>Dune</li></ol>
            <h1 class="post__name"> فيلم Dune 2021 مترجم </h1>
            <div class="rating__box"><div class="rate__txt">8.0</div><span class="votes">700K</span></div>
            <p class="post__content"> A noble family becomes embroiled in a war. </p>
            <div class="post__story">The story.</div>
            <ul class="info__area__ul">
                <li><div class="title__kit"><span>النوع :</span></div>
                    <ul class="tags__list"><li><a>خيال علمي</a></li><li><a>مغامرة</a></li></ul></li>
                <li><div class="title__kit"><span>السنة:</span></div><a href="/year/2021">2021</a></li>
                <li><div class="title__kit"><span>بدون قيمة</span></div></li>
                <li><a href="/orphan">orphan</a></li>
            </ul>
            <a class="watch__btn" href="https://a.asd.homes/watch/dune/">watch</a>
            <a class="download__btn" href="https://a.asd.homes/download/dune/">download</a>
            <div class="poster__side">
                <div class="poster__single">
                    <img class="images__loader" src="" data-src="https://img.test/poster.jpg">
                </div>
                <div class="ribbon"> WEB-DL </div>
            </div>
            <div class="star__rating">
                <span class="rating-average">4.5</span><span class="rating-count">12</span>
            </div>
        </section>
        </body></html>
    "#;

    #[test]
    fn test_parse_full_detail() {
        let detail = parse_film_detail(FULL_PAGE).unwrap();

        assert_eq!(detail.cover_image.as_deref(), Some("https://img.test/cover.jpg"));
        let actions = detail.user_actions.unwrap();
        assert_eq!(actions.likes.as_deref(), Some("120"));
        assert_eq!(actions.views.as_deref(), Some("5.4K"));
        assert_eq!(detail.title.as_deref(), Some("فيلم Dune 2021 مترجم"));
        assert_eq!(
            detail.breadcrumbs,
            Some(vec!["الرئيسية".to_string(), "افلام".to_string(), "Dune".to_string()])
        );
        let imdb = detail.imdb_rating.unwrap();
        assert_eq!(imdb.rating.as_deref(), Some("8.0"));
        assert_eq!(imdb.votes.as_deref(), Some("700K"));
        assert_eq!(
            detail.description.as_deref(),
            Some("A noble family becomes embroiled in a war.")
        );
        assert_eq!(detail.story.as_deref(), Some("The story."));
        assert_eq!(
            detail.links.watch.as_deref(),
            Some("https://a.asd.homes/watch/dune/")
        );
        assert_eq!(
            detail.links.download.as_deref(),
            Some("https://a.asd.homes/download/dune/")
        );
        assert_eq!(detail.poster_image.as_deref(), Some("https://img.test/poster.jpg"));
        assert_eq!(detail.quality.as_deref(), Some("WEB-DL"));
        let visitors = detail.visitor_rating.unwrap();
        assert_eq!(visitors.average.as_deref(), Some("4.5"));
        assert_eq!(visitors.count.as_deref(), Some("12"));
    }

    #[test]
    fn test_details_dual_shape() {
        let detail = parse_film_detail(FULL_PAGE).unwrap();

        assert_eq!(detail.details.len(), 2);
        let keys: Vec<&str> = detail.details.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["النوع", "السنة"]);
        assert_eq!(
            detail.details["النوع"],
            DetailValue::Tags(vec!["خيال علمي".to_string(), "مغامرة".to_string()])
        );
        assert_eq!(detail.details["السنة"], DetailValue::Text("2021".to_string()));
    }

    #[test]
    fn test_missing_container_is_none() {
        let html = r#"<html><body><h1 class="post__name">Dune</h1></body></html>"#;
        assert!(parse_film_detail(html).is_none());
    }

    #[test]
    fn test_empty_container_yields_unset_fields() {
        let html = r#"<section class="single__area"></section>"#;
        let detail = parse_film_detail(html).unwrap();

        assert_eq!(detail.cover_image, None);
        assert_eq!(detail.user_actions, None);
        assert_eq!(detail.title, None);
        assert_eq!(detail.breadcrumbs, None);
        assert_eq!(detail.imdb_rating, None);
        assert_eq!(detail.description, None);
        assert!(detail.details.is_empty());
        assert_eq!(detail.links, FilmLinks::default());
        assert_eq!(detail.poster_image, None);
        assert_eq!(detail.quality, None);
        assert_eq!(detail.visitor_rating, None);
    }

    #[test]
    fn test_partial_blocks() {
        let html = r#"
            <section class="single__area">
                <div class="user__actions"><button class="views__count"></button></div>
                <div class="rating__box"><span class="votes">10</span></div>
            </section>
        "#;
        let detail = parse_film_detail(html).unwrap();

        assert_eq!(
            detail.user_actions,
            Some(UserActions {
                likes: None,
                views: None
            })
        );
        assert_eq!(
            detail.imdb_rating,
            Some(ImdbRating {
                rating: None,
                votes: Some("10".to_string())
            })
        );
    }

    #[test]
    fn test_poster_falls_back_to_any_image() {
        let html = r#"
            <section class="single__area">
                <div class="poster__side">
                    <div class="poster__single"><img src="https://img.test/plain.jpg"></div>
                </div>
            </section>
        "#;
        let detail = parse_film_detail(html).unwrap();
        assert_eq!(detail.poster_image.as_deref(), Some("https://img.test/plain.jpg"));
        assert_eq!(detail.quality, None);
    }

    #[test]
    fn test_poster_requires_poster_card() {
        let html = r#"
            <section class="single__area">
                <div class="poster__side"><img src="https://img.test/stray.jpg"></div>
            </section>
        "#;
        let detail = parse_film_detail(html).unwrap();
        assert_eq!(detail.poster_image, None);
    }

    #[test]
    fn test_clean_label() {
        assert_eq!(clean_label("السنة :"), "السنة");
        assert_eq!(clean_label("Genre: "), "Genre");
        assert_eq!(clean_label("a:b"), "ab");
    }
}
