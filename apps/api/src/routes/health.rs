use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service banner for anyone poking the root.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "app": "Disha",
        "version": env!("CARGO_PKG_VERSION"),
        "powered_by": "Groq",
    }))
}

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
