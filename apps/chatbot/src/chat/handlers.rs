//! Axum route handlers for the chat API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::chat::service::{get_response, ChatOutcome};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub response: String,
}

/// Pulls a usable message out of the request body: `message` must be a
/// string that is not blank. Returns it trimmed.
pub fn extract_message(body: &Value) -> Result<&str, AppError> {
    let message = body
        .get("message")
        .ok_or_else(|| AppError::Validation("message is missing".to_string()))?
        .as_str()
        .ok_or_else(|| AppError::Validation("message is not a string".to_string()))?
        .trim();

    if message.is_empty() {
        return Err(AppError::Validation("message is blank".to_string()));
    }
    Ok(message)
}

/// POST /predict
///
/// Answers one customer question. Catalog and completion failures still
/// return 200 with a fallback reply.
pub async fn handle_predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let message = extract_message(&body)?;

    let outcome = get_response(
        state.catalog.as_ref(),
        state.llm.as_ref(),
        &state.product_base_url,
        message,
    )
    .await?;

    match &outcome {
        ChatOutcome::Answered(_) => info!("Answered chat message"),
        ChatOutcome::CatalogEmpty => info!("No active products in catalog; replied with fallback"),
        ChatOutcome::CatalogFailed(e) => error!("Error fetching product catalog: {e}"),
        ChatOutcome::CompletionFailed(e) => error!("Completion call failed: {e}"),
    }

    Ok(Json(PredictResponse {
        response: outcome.into_reply(),
    }))
}
