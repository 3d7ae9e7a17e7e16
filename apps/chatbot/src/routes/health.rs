use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness only; database and provider reachability are not checked.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
