//! Query and document orchestration.
//!
//! A query runs one pass: validate, normalize, build the prompt, call the
//! inference gateway, interpret, persist. A document runs extraction, then
//! two independent internal query calls (summary and topics) before the
//! summary record is persisted. Nothing here retries.

use std::sync::Arc;

use tracing::info;

use medcollab_core::types::{
    ExtractedDocument, PdfUploadResponse, Query, QueryRecord, QueryResponse, MIN_QUERY_LEN,
};
use medcollab_core::{Error, Result};
use medcollab_gateway::interpret::{self, ConfidenceScorer, FixedConfidence};
use medcollab_gateway::prompt::{self, ASSISTANT_INSTRUCTION, SUMMARY_REQUEST, TOPIC_REQUEST};
use medcollab_gateway::TextGenerator;
use medcollab_ingest::normalize;
use medcollab_store::JsonStore;

/// Character budget for the aggregated text handed to summarization.
const SUMMARY_CONTEXT_BUDGET: usize = 4000;
/// Topic extraction only sees the leading pages.
const TOPIC_PAGE_BUDGET: usize = 2;

pub struct Pipeline {
    generator: Arc<dyn TextGenerator>,
    scorer: Arc<dyn ConfidenceScorer>,
    store: Arc<JsonStore>,
}

impl Pipeline {
    pub fn new(generator: Arc<dyn TextGenerator>, store: Arc<JsonStore>) -> Self {
        Self {
            generator,
            scorer: Arc::new(FixedConfidence::default()),
            store,
        }
    }

    /// Substitute the confidence strategy.
    pub fn with_scorer(mut self, scorer: Arc<dyn ConfidenceScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Process one query end to end. The minimum-length precondition is
    /// checked here, before anything touches the network; persistence
    /// failure fails the whole call so no answer goes unrecorded.
    pub async fn run_query(&self, query: Query) -> Result<QueryResponse> {
        let text = query.text.trim();
        if text.chars().count() < MIN_QUERY_LEN {
            return Err(Error::Validation(format!(
                "query must be at least {} characters",
                MIN_QUERY_LEN
            )));
        }

        let cleaned = normalize::clean(text);
        let prompt =
            prompt::build_prompt(ASSISTANT_INSTRUCTION, &cleaned, query.context.as_deref());

        let raw = self.generator.generate(&prompt).await?;
        let response = interpret::interpret_answer(raw, self.scorer.as_ref());

        self.store
            .append_query(QueryRecord::now(query, response.clone()))?;

        Ok(response)
    }

    /// Process uploaded document bytes end to end.
    pub async fn run_upload(&self, bytes: &[u8]) -> Result<PdfUploadResponse> {
        let doc = medcollab_ingest::extract_pdf(bytes)?;
        self.run_document(doc).await
    }

    /// Summarize an extracted document and pull its key topics. The two
    /// inference calls have no data dependency and run concurrently; if
    /// either fails, nothing is persisted for the document.
    pub async fn run_document(&self, doc: ExtractedDocument) -> Result<PdfUploadResponse> {
        info!("Processing document with {} pages", doc.page_count());

        let aggregate: Vec<&str> = doc.pages.iter().map(|p| p.text.as_str()).collect();
        let summary_context: String = aggregate
            .join("\n")
            .chars()
            .take(SUMMARY_CONTEXT_BUDGET)
            .collect();
        let topic_context = aggregate
            .iter()
            .take(TOPIC_PAGE_BUDGET)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");

        let summary_query = Query::new(SUMMARY_REQUEST, Some(summary_context));
        let topic_query = Query::new(TOPIC_REQUEST, Some(topic_context));

        let (summary, topic_reply) = tokio::try_join!(
            self.run_query(summary_query),
            self.run_query(topic_query)
        )?;

        let response = PdfUploadResponse {
            filename: doc.title(),
            page_count: doc.page_count(),
            summary: summary.response,
            topics: interpret::parse_topics(&topic_reply.response),
        };

        self.store.append_summary(response.clone())?;
        Ok(response)
    }
}
