//! Ollama inference client: one bounded-time call per invocation, no
//! retries. Retry policy, if any, belongs to the caller.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use medcollab_core::{Error, Result};

/// Seam between the orchestrators and the inference endpoint.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Issue a single generation call and return the raw model text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for an Ollama-style `/api/generate` endpoint.
pub struct OllamaClient {
    http: reqwest::Client,
    url: String,
    model: String,
}

impl OllamaClient {
    /// Build a client with separate connection and total-response budgets.
    /// Connection problems surface faster than slow-but-alive generation.
    pub fn new(
        base_url: &str,
        model: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            url: format!("{}/api/generate", base_url.trim_end_matches('/')),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("Calling {} with model {}", self.url, self.model);

        let response = self
            .http
            .post(&self.url)
            .json(&json!({
                "model": self.model,
                "prompt": prompt,
                "stream": false,
            }))
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "LLM endpoint returned {}: {}",
                status, body
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(classify_transport_error)?;
        body.get("response")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::Upstream("LLM reply is missing the `response` field".to_string())
            })
    }
}

/// Deadline overruns are retryable by the caller; everything else on the
/// wire is an upstream fault.
fn classify_transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Upstream(e.to_string())
    }
}
