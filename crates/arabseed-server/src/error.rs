//! Error types for the HTTP server
//!
//! `ApiError` maps scraper failures onto HTTP statuses with a JSON body of the
//! form `{"detail": "<message>"}`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use arabseed_core::ArabSeedError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Failure of a single API request
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub ArabSeedError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            ArabSeedError::InvalidUrl(_)
            | ArabSeedError::InvalidEndpoint(_)
            | ArabSeedError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ArabSeedError::NotFound(_) => StatusCode::NOT_FOUND,
            ArabSeedError::HttpError(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            ArabSeedError::HttpError(_) | ArabSeedError::UpstreamStatus { .. } => {
                StatusCode::BAD_GATEWAY
            }
            ArabSeedError::ParseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %self.0, "request failed");
        }
        HttpResponse::build(status).json(json!({ "detail": self.0 }))
    }
}

/// Invalid server settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
}
