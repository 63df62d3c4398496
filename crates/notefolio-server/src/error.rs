use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Unified API error type for all route handlers.
///
/// The `/api/gemini` relay does not use this; its error body shapes are
/// part of the relay contract and built in place.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Upstream generative-text failure, carrying its status and message.
    Upstream(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<notefolio_core::error::CoreError> for ApiError {
    fn from(e: notefolio_core::error::CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<notefolio_gemini::error::GeminiError> for ApiError {
    fn from(e: notefolio_gemini::error::GeminiError) -> Self {
        use notefolio_gemini::error::GeminiError;
        match e {
            GeminiError::Upstream { .. } | GeminiError::Transport(_) => {
                ApiError::Upstream(e.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<notefolio_export::error::ExportError> for ApiError {
    fn from(e: notefolio_export::error::ExportError) -> Self {
        match e {
            notefolio_export::error::ExportError::EmptyDocument => {
                ApiError::BadRequest(e.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
