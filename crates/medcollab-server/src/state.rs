//! Shared application state.

use std::sync::Arc;

use medcollab_core::AppConfig;
use medcollab_store::JsonStore;

use crate::pipeline::Pipeline;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<JsonStore>,
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<JsonStore>, pipeline: Pipeline) -> Self {
        Self {
            config,
            store,
            pipeline,
        }
    }
}
