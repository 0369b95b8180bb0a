//! MedCollab — doctor collaboration service backed by a local medical LLM.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod pipeline;
mod routes;
mod state;

use pipeline::Pipeline;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = medcollab_core::AppConfig::from_env();
    info!(
        "Using model {} at {}, store at {}",
        config.model,
        config.ollama_url,
        config.db_path.display()
    );

    // Initialize store
    let store = Arc::new(
        medcollab_store::JsonStore::open(&config.db_path)
            .map_err(|e| anyhow::anyhow!("Failed to open store: {}", e))?,
    );

    // Initialize inference client
    let client = medcollab_gateway::OllamaClient::new(
        &config.ollama_url,
        &config.model,
        config.connect_timeout,
        config.request_timeout,
    )
    .map_err(|e| anyhow::anyhow!("Failed to build inference client: {}", e))?;

    // Build application state
    let pipeline = Pipeline::new(Arc::new(client), store.clone());
    let port = config.port;
    let state = Arc::new(AppState::new(config, store, pipeline));

    // Build router
    let app = routes::build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MedCollab server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
