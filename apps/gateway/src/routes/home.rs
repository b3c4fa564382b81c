use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Reports that the gateway is up.
pub async fn home_handler() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "AutoTasker AI Backend is running"
    }))
}
