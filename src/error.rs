//! Error handling

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tracing::info;

/// definitions for the prophecy application.
#[derive(Debug)]
pub enum ProphecyError {
    /// Generation was requested without a credential
    MissingApiKey,
    /// Conversion was requested without a document body
    MissingSvg,
    /// When the rasterizer rejects or fails on a document
    Render(String),
    /// When an internal server error occurs
    InternalServerError(String),
}

impl From<std::io::Error> for ProphecyError {
    fn from(err: std::io::Error) -> Self {
        ProphecyError::InternalServerError(err.to_string())
    }
}

impl From<axum::http::Error> for ProphecyError {
    fn from(err: axum::http::Error) -> Self {
        ProphecyError::InternalServerError(err.to_string())
    }
}

impl From<url::ParseError> for ProphecyError {
    fn from(err: url::ParseError) -> Self {
        ProphecyError::InternalServerError(err.to_string())
    }
}

fn error_body(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for ProphecyError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ProphecyError::MissingApiKey => {
                info!("Generate request without an API key");
                error_body(StatusCode::BAD_REQUEST, "API key is required")
            }
            ProphecyError::MissingSvg => {
                info!("Convert request without SVG content");
                error_body(StatusCode::BAD_REQUEST, "SVG content is required")
            }
            ProphecyError::Render(message) => {
                tracing::error!("Rasterization error: {}", message);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, &message)
            }
            ProphecyError::InternalServerError(message) => {
                tracing::error!("Internal server error: {}", message);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, &message)
            }
        }
    }
}
