use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;
use tracing::error;

/// The message surfaced for every internal failure, regardless of which
/// upstream call actually broke. The real cause is logged server-side only.
pub const GENERIC_ROAST_FAILURE: &str = "Your site was so bad I failed to roast it.";

pub const URL_REQUIRED: &str = "URL is required!";

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing or empty URL")]
    MissingUrl,

    #[error("Screenshot capture failed: {0}")]
    Screenshot(String),

    #[error("Failed to download screenshot image: {0}")]
    ImageFetch(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingUrl => (StatusCode::BAD_REQUEST, URL_REQUIRED.to_string()),
            // Everything past validation collapses to one generic message;
            // the caller never learns which upstream call failed.
            err => {
                error!("roast failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ROAST_FAILURE.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
