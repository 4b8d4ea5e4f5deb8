//! HTTP routes of the ArabSeed API
//!
//! Handlers are thin: validate input, call the scraper once, wrap the result.

use actix_web::{get, web, HttpResponse};
use arabseed_core::{ArabSeedError, EpisodeSummary, FilmDetail, FilmSummary, ListingResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::ApiError;
use crate::ScraperState;

/// `{"films": [...]}` wrapper used by the plain listing routes
#[derive(Debug, Serialize)]
pub struct FilmsResponse<T> {
    pub films: Vec<T>,
}

/// Query string of paginated routes
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// Liveness probe.
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Films from the films listing page.
#[get("/arabseed/films")]
pub async fn films_from_films_page(
    state: web::Data<ScraperState>,
) -> Result<web::Json<FilmsResponse<FilmSummary>>, ApiError> {
    let films = state.scraper().films_from_films_page().await?;
    Ok(web::Json(FilmsResponse { films }))
}

/// Latest episodes from the home page.
#[get("/arabseed/home/films")]
pub async fn films_from_home(
    state: web::Data<ScraperState>,
) -> Result<web::Json<FilmsResponse<EpisodeSummary>>, ApiError> {
    let films = state.scraper().films_from_home().await?;
    Ok(web::Json(FilmsResponse { films }))
}

/// One page of the Netflix category, `?page=` defaults to 1.
#[get("/arabseed/films/netflix")]
pub async fn netflix_films(
    state: web::Data<ScraperState>,
    query: web::Query<PageQuery>,
) -> Result<web::Json<ListingResult>, ApiError> {
    let page = query.page.unwrap_or(1);
    debug!(page, "netflix listing requested");
    let result = state.scraper().netflix_films(page).await?;
    Ok(web::Json(result))
}

/// Details of the film at the absolute URL captured by the rest of the path.
///
/// Must be registered after every other `/arabseed/films/...` route.
#[get("/arabseed/films/{url:.*}")]
pub async fn film_information(
    state: web::Data<ScraperState>,
    path: web::Path<String>,
) -> Result<web::Json<FilmDetail>, ApiError> {
    let url = path.into_inner();
    debug!(url = %url, "film details requested");

    match state.scraper().get_film_information(&url).await? {
        Some(detail) => Ok(web::Json(detail)),
        None => Err(ArabSeedError::NotFound(url).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configure;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use arabseed_core::{ArabSeedScraper, ClientConfig, Endpoints};
    use serde_json::Value;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_for(server: &MockServer) -> web::Data<ScraperState> {
        state_with_config(server, ClientConfig::default())
    }

    fn state_with_config(server: &MockServer, config: ClientConfig) -> web::Data<ScraperState> {
        let mut endpoints = Endpoints::with_base_url(server.uri());
        endpoints.netflix_films = "/category/netflix/".to_string();
        let scraper = ArabSeedScraper::with_config(config, endpoints).unwrap();
        web::Data::new(ScraperState::with_scraper(scraper))
    }

    async fn serve(server: &MockServer, route: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[actix_web::test]
    async fn test_films_page() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/movies/",
            r#"
            <div class="item__contents"><a class="movie__block" href="/g" title="G"></a></div>
            <div class="slider__single"><a href="/s" title="S"></a></div>
            "#,
        )
        .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
        let req = test::TestRequest::get().uri("/arabseed/films").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["films"][0]["url"], "/s");
        assert_eq!(body["films"][1]["url"], "/g");
        assert_eq!(body["films"][1]["trailer"], Value::Null);
        assert_eq!(body["films"][1]["info"]["genres"], json!([]));
    }

    #[actix_web::test]
    async fn test_home_films() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/main0",
            r#"<a class="episode__item" href="/ep" title="Ep"><div class="ribbon__new"></div></a>"#,
        )
        .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
        let req = test::TestRequest::get().uri("/arabseed/home/films").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["films"][0]["title"], "Ep");
        assert_eq!(body["films"][0]["is_last"], true);
    }

    #[actix_web::test]
    async fn test_netflix_default_page() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/category/netflix/",
            r#"
            <ul>
                <li class="box__xs__2"><div class="item__contents"><a class="movie__block" href="/a"></a></div></li>
                <li class="box__xs__2"><div class="item__contents"><a class="movie__block" href="/b"></a></div></li>
            </ul>
            <ul class="page-numbers">
                <li><span class="page-numbers current">1</span></li>
                <li><a class="page-numbers">2</a></li>
                <li><a class="page-numbers">3</a></li>
                <li><a class="page-numbers">5</a></li>
                <li><a class="page-numbers">7</a></li>
                <li><a class="next page-numbers">»</a></li>
            </ul>
            "#,
        )
        .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
        let req = test::TestRequest::get().uri("/arabseed/films/netflix").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["total_results"], 2);
        assert_eq!(body["films"].as_array().map(|f| f.len()), Some(2));
        assert_eq!(body["pagination"]["current_page"], 1);
        assert_eq!(body["pagination"]["next_page"], 2);
        assert_eq!(body["pagination"]["has_next"], true);
        assert_eq!(body["pagination"]["prev_page"], Value::Null);
        assert_eq!(body["pagination"]["last_page"], 7);
        assert_eq!(body["pagination"]["total_pages"], 7);
    }

    #[actix_web::test]
    async fn test_netflix_later_page() {
        let server = MockServer::start().await;
        serve(&server, "/category/netflix/page/3/", "<html><body></body></html>").await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/arabseed/films/netflix?page=3")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["pagination"]["current_page"], 3);
        assert_eq!(body["total_results"], 0);
    }

    #[actix_web::test]
    async fn test_film_information() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/dune/",
            r#"
            <section class="single__area">
                <h1 class="post__name">Dune</h1>
                <ul class="info__area__ul">
                    <li><div class="title__kit"><span>النوع:</span></div>
                        <ul class="tags__list"><li><a>خيال علمي</a></li></ul></li>
                </ul>
            </section>
            "#,
        )
        .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri(&format!("/arabseed/films/{}/dune/", server.uri()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Dune");
        assert_eq!(body["description"], Value::Null);
        assert_eq!(body["details"]["النوع"], json!(["خيال علمي"]));
    }

    #[actix_web::test]
    async fn test_film_information_not_found() {
        let server = MockServer::start().await;
        serve(&server, "/nothing/", "<html><body></body></html>").await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri(&format!("/arabseed/films/{}/nothing/", server.uri()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().starts_with("Film not found"));
    }

    #[actix_web::test]
    async fn test_film_information_rejects_bad_urls() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;

        for uri in ["/arabseed/films/", "/arabseed/films/ftp://x"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

            let body: Value = test::read_body_json(resp).await;
            assert!(body["detail"].as_str().unwrap().starts_with("Invalid URL"));
        }
    }

    #[actix_web::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/main0"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
        let req = test::TestRequest::get().uri("/arabseed/home/films").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_netflix_bad_page_is_json_bad_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;

        for uri in ["/arabseed/films/netflix?page=abc", "/arabseed/films/netflix?page=-1"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

            let body: Value = test::read_body_json(resp).await;
            assert!(body["detail"].as_str().unwrap().starts_with("Invalid query"));
        }
    }

    #[actix_web::test]
    async fn test_upstream_timeout_is_gateway_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies/"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let state = state_with_config(&server, ClientConfig::default().with_timeout_secs(1));
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;
        let req = test::TestRequest::get().uri("/arabseed/films").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().starts_with("HTTP request failed"));
    }
}
