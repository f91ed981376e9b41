use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Appended to every scrape error so browser users know there is a fallback
/// when a site refuses automated fetching.
const MANUAL_PASTE_HINT: &str =
    "If this is a social media post (e.g., X/Twitter), please copy and paste the content manually.";

#[derive(Serialize)]
pub struct ErrorResponse {
    detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid URL: {0}.")]
    InvalidUrl(String),

    #[error("Failed to fetch URL. This site may block automated scrapers or require login.")]
    FetchError,

    #[error("Content too short or not found. This site may block automated scrapers or require login.")]
    ContentError,

    #[error("Scraping failed: {0}.")]
    Unexpected(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidUrl(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::FetchError => StatusCode::NOT_FOUND,
            AppError::ContentError => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let detail = match &self {
            AppError::ConfigError(_) => self.to_string(),
            _ => format!("{} {}", self, MANUAL_PASTE_HINT),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Unexpected(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
