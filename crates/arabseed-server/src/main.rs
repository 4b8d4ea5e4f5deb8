use actix_web::{web, App, HttpServer};
use tracing::info;

use arabseed_server::{configure, init_tracing, ScraperState, ServerConfig};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.debug);

    let state = web::Data::new(ScraperState::from_config(&config)?);
    info!(
        host = %config.host,
        port = config.port,
        upstream = %state.scraper().endpoints().base_url,
        timeout_secs = config.timeout().as_secs(),
        "starting ArabSeed API"
    );

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await?;

    info!("server stopped");
    Ok(())
}
