use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Detail returned for every rejected chat request.
pub const INVALID_MESSAGE_DETAIL: &str = "Valid message required";
/// Detail returned for every unexpected failure. The cause is only logged.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upstream catalog and completion failures never reach this type; they are
/// recovered into fallback replies by the chat service.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Validation(reason) => {
                tracing::debug!("Rejected chat request: {reason}");
                (StatusCode::BAD_REQUEST, INVALID_MESSAGE_DETAIL)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL)
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
