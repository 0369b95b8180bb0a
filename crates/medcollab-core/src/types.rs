//! Shared request, response, and record types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum length of a query after trimming.
pub const MIN_QUERY_LEN: usize = 5;
/// Maximum length of an inbound query context after trimming.
pub const MAX_CONTEXT_LEN: usize = 1000;

/// A medical query. `text` is serialized as `query` on the wire and in
/// persisted records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    #[serde(rename = "query")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Query {
    pub fn new(text: impl Into<String>, context: Option<String>) -> Self {
        Self {
            text: text.into(),
            context,
        }
    }

    /// Enforce the inbound-boundary preconditions: query length and the
    /// context length cap. Trims both fields in place.
    pub fn validate(&mut self) -> Result<()> {
        self.text = self.text.trim().to_string();
        if self.text.chars().count() < MIN_QUERY_LEN {
            return Err(Error::Validation(format!(
                "query must be at least {} characters",
                MIN_QUERY_LEN
            )));
        }

        if let Some(context) = &self.context {
            let trimmed = context.trim();
            if trimmed.chars().count() > MAX_CONTEXT_LEN {
                return Err(Error::Validation(format!(
                    "context must be at most {} characters",
                    MAX_CONTEXT_LEN
                )));
            }
            self.context = Some(trimmed.to_string());
        }

        Ok(())
    }
}

/// Structured answer for a query: response text, confidence in [0, 1],
/// and an ordered list of sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
    pub confidence: f64,
    pub sources: Vec<String>,
}

/// One page extracted from an uploaded document, 1-indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPage {
    pub text: String,
    pub page_number: usize,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Pages plus document-level metadata, in source order.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub pages: Vec<DocumentPage>,
    pub metadata: HashMap<String, String>,
}

impl ExtractedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Document title from the metadata, falling back to "Untitled".
    pub fn title(&self) -> String {
        self.metadata
            .get("Title")
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

/// Structured result of a document upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfUploadResponse {
    pub filename: String,
    pub page_count: usize,
    pub summary: String,
    pub topics: Vec<String>,
}

/// Persisted snapshot of one completed query interaction. Never mutated
/// after append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    pub query: Query,
    pub response: QueryResponse,
    pub timestamp: String,
}

impl QueryRecord {
    /// Snapshot a completed interaction, stamped with the current time.
    pub fn now(query: Query, response: QueryResponse) -> Self {
        Self {
            query,
            response,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Persisted store layout: two ordered top-level arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    pub queries: Vec<QueryRecord>,
    pub summaries: Vec<PdfUploadResponse>,
}
