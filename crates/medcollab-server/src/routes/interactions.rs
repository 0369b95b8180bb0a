//! Stored interaction routes — GET /api/interactions/*.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::routes::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/interactions/queries", get(list_queries))
        .route("/interactions/summaries", get(list_summaries))
}

/// All stored query interactions, in append order.
async fn list_queries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let queries = state.store.queries()?;
    Ok(Json(serde_json::json!({
        "total": queries.len(),
        "queries": queries,
    })))
}

/// All stored document summaries, in append order.
async fn list_summaries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let summaries = state.store.summaries()?;
    Ok(Json(serde_json::json!({
        "total": summaries.len(),
        "summaries": summaries,
    })))
}
