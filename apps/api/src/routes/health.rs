use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::recommendation::catalogue::CATALOGUE_VERSION;
use crate::state::AppState;

/// GET /health
/// Returns service status and the active provider mode. Never contacts the remote provider.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "mode": state.recommender.mode(),
        "catalogueVersion": CATALOGUE_VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
