//! Status route — GET /api/status.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// Service configuration and store counts.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let stored_queries = state.store.queries().map(|q| q.len()).ok();
    let stored_summaries = state.store.summaries().map(|s| s.len()).ok();

    Json(serde_json::json!({
        "model": state.config.model,
        "endpoint": state.config.ollama_url,
        "storeAvailable": stored_queries.is_some(),
        "storedQueries": stored_queries,
        "storedSummaries": stored_summaries,
    }))
}
