//! HTTP route handlers and the boundary error mapping.

pub mod documents;
pub mod interactions;
pub mod query;
pub mod status;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::error;

use medcollab_core::Error;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(query::routes())
        .merge(documents::routes())
        .merge(interactions::routes())
        .merge(status::routes())
}

/// Maps every pipeline failure kind to a status and a human-readable
/// message. No internal state leaks to callers.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            Error::Validation(m) => (StatusCode::UNPROCESSABLE_ENTITY, m),
            Error::DocumentParse(m) => (StatusCode::BAD_REQUEST, m),
            Error::Timeout(_) => (
                StatusCode::GATEWAY_TIMEOUT,
                "Request to LLM service timed out. Please try again.".to_string(),
            ),
            Error::Upstream(m) => (
                StatusCode::BAD_GATEWAY,
                format!("Error communicating with LLM service: {}", m),
            ),
            Error::Persistence(m) => {
                error!("Persistence failure: {}", m);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to record the interaction".to_string(),
                )
            }
            other => {
                error!("Unexpected failure: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
