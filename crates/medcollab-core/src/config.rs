//! Process-wide configuration, read once at startup.

use std::path::PathBuf;
use std::time::Duration;

/// Default Ollama model. `medllama2` is tuned for medical Q&A;
/// `meditron` is a drop-in alternative.
pub const DEFAULT_MODEL: &str = "medllama2";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Immutable application configuration, shared by reference with every
/// component constructor.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port.
    pub port: u16,
    /// Base URL of the Ollama inference endpoint.
    pub ollama_url: String,
    /// Model identifier sent with every generate call.
    pub model: String,
    /// Path to the JSON interaction store.
    pub db_path: PathBuf,
    /// Budget for establishing the upstream connection.
    pub connect_timeout: Duration,
    /// Budget for receiving the complete upstream response.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let ollama_url = std::env::var("OLLAMA_API_URL")
            .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());

        let model =
            std::env::var("LLM_MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let db_path = std::env::var("MEDCOLLAB_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("db/data.json"));

        Self {
            port,
            ollama_url,
            model,
            db_path,
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
