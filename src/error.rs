use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

/// Message returned for every internal failure. The real cause stays in the
/// server log; clients only ever see this string.
pub const GENERIC_FAILURE: &str = "Failed to extract summary.";

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No URL provided.")]
    EmptyUrl,

    #[error("No content found.")]
    NoContent,

    #[error("Failed to fetch page: {0}")]
    Fetch(String),

    #[error("Error parsing content: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::EmptyUrl => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NoContent => (StatusCode::BAD_REQUEST, self.to_string()),
            // Fetch, parse and config causes are collapsed into one opaque
            // message at the HTTP boundary.
            AppError::Fetch(_) | AppError::Parse(_) | AppError::Config(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Fetch(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
