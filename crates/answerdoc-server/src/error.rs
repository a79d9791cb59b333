use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// The model call failed; the message is passed through.
    Upstream(String),
    /// Document serialization failed; the message is passed through.
    Render(String),
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
            ApiError::Render(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("rendering failed: {msg}"),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<answerdoc_export::error::ExportError> for ApiError {
    fn from(e: answerdoc_export::error::ExportError) -> Self {
        ApiError::Render(e.to_string())
    }
}

impl From<answerdoc_bedrock::error::BedrockError> for ApiError {
    fn from(e: answerdoc_bedrock::error::BedrockError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}

impl From<tera::Error> for ApiError {
    fn from(e: tera::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}
