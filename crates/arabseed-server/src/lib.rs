//! ArabSeed Scraper HTTP API
//!
//! This crate exposes the ArabSeed scraper over HTTP with actix-web.
//!
//! # Usage
//!
//! ```rust,ignore
//! use actix_web::{web, App, HttpServer};
//! use arabseed_server::ScraperState;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let state = web::Data::new(ScraperState::new().expect("scraper"));
//!     HttpServer::new(move || {
//!         App::new()
//!             .app_data(state.clone())
//!             .configure(arabseed_server::configure)
//!     })
//!     .bind(("0.0.0.0", 8000))?
//!     .run()
//!     .await
//! }
//! ```
//!
//! # Routes
//! - `GET /health` - Liveness probe
//! - `GET /arabseed/films` - Films listing page
//! - `GET /arabseed/home/films` - Latest episodes from the home page
//! - `GET /arabseed/films/netflix?page=N` - Netflix category with pagination
//! - `GET /arabseed/films/{url}` - Details of the film at an absolute URL

pub mod config;
pub mod error;
pub mod routes;

use actix_web::web;
use tracing_subscriber::EnvFilter;

use arabseed_core::{ArabSeedError, ArabSeedScraper, Result};

pub use config::ServerConfig;
pub use error::{ApiError, ConfigError};

/// Shared state of the HTTP server.
///
/// Requests only read it; actix-web's `Data` already shares it across workers.
pub struct ScraperState {
    scraper: ArabSeedScraper,
}

impl ScraperState {
    /// Create a new ScraperState with default configuration.
    ///
    /// # Errors
    /// Returns an error if the scraper cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_scraper(ArabSeedScraper::new()?))
    }

    /// Create a ScraperState from server settings.
    ///
    /// # Errors
    /// Returns an error if the scraper cannot be created.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let scraper = ArabSeedScraper::with_config(config.client_config(), config.endpoints())?;
        Ok(Self::with_scraper(scraper))
    }

    /// Wrap an already configured scraper.
    pub fn with_scraper(scraper: ArabSeedScraper) -> Self {
        Self { scraper }
    }

    /// Get a reference to the inner scraper.
    pub fn scraper(&self) -> &ArabSeedScraper {
        &self.scraper
    }
}

/// Register every route. The film detail route captures the rest of the path,
/// so it goes last.
///
/// Malformed query strings answer with the same JSON error body as the handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::from(ArabSeedError::InvalidQuery(err.to_string())).into()
    });

    cfg.app_data(query_config)
        .service(routes::health)
        .service(routes::films_from_films_page)
        .service(routes::films_from_home)
        .service(routes::netflix_films)
        .service(routes::film_information);
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` turns on debug-level output.
pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed, e.g. by a test harness
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
