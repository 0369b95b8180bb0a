//! Query route — POST /api/query.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use medcollab_core::types::{Query, QueryResponse};

use crate::routes::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/query", post(process_query))
}

/// Process a medical query through the LLM pipeline.
async fn process_query(
    State(state): State<Arc<AppState>>,
    Json(mut query): Json<Query>,
) -> Result<Json<QueryResponse>, ApiError> {
    query.validate()?;
    let response = state.pipeline.run_query(query).await?;
    Ok(Json(response))
}
