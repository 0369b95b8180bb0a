//! Deterministic prompt composition.

/// Task framing prepended to every inference call.
pub const ASSISTANT_INSTRUCTION: &str = "You are a medical AI assistant. Please provide a \
detailed, accurate, and professional response to the following medical query. Base your \
response on established medical knowledge and research.";

/// Fixed request text the document flow issues for summarization.
pub const SUMMARY_REQUEST: &str =
    "Please provide a concise summary of the following medical document:";

/// Fixed request text the document flow issues for topic extraction.
pub const TOPIC_REQUEST: &str =
    "Please extract the main medical topics from this document:";

/// Compose the prompt string. Pure string concatenation; omitting the
/// context omits the `Context:` section entirely.
pub fn build_prompt(instruction: &str, query: &str, context: Option<&str>) -> String {
    match context {
        Some(context) => format!(
            "{}\n\nContext: {}\n\nQuery: {}",
            instruction, context, query
        ),
        None => format!("{}\n\nQuery: {}", instruction, query),
    }
}
