use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health, GET /api/health
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": state.service_name,
        "provider": state.relay.provider_name(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
