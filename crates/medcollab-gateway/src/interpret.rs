//! Raw model text → structured results.

use medcollab_core::types::QueryResponse;

/// Maximum number of topics kept from a topic-extraction reply.
pub const MAX_TOPICS: usize = 5;

/// Injectable confidence strategy. The default is a constant score — a
/// documented simplification, not a computed quality signal.
pub trait ConfidenceScorer: Send + Sync {
    fn score(&self, response: &str) -> f64;
}

/// Constant-confidence scorer.
pub struct FixedConfidence(pub f64);

impl Default for FixedConfidence {
    fn default() -> Self {
        Self(0.95)
    }
}

impl ConfidenceScorer for FixedConfidence {
    fn score(&self, _response: &str) -> f64 {
        self.0
    }
}

/// Wrap raw model text into a structured answer. Sources are not yet
/// extracted; the list stays empty.
pub fn interpret_answer(raw: String, scorer: &dyn ConfidenceScorer) -> QueryResponse {
    let confidence = scorer.score(&raw).clamp(0.0, 1.0);
    QueryResponse {
        response: raw,
        confidence,
        sources: Vec::new(),
    }
}

/// Split a topic-extraction reply into at most `MAX_TOPICS` non-blank
/// lines. No deduplication, no semantic filtering.
pub fn parse_topics(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_TOPICS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_carries_fixed_confidence_and_empty_sources() {
        let answer = interpret_answer("Rest and hydrate.".to_string(), &FixedConfidence::default());
        assert_eq!(answer.response, "Rest and hydrate.");
        assert_eq!(answer.confidence, 0.95);
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn test_out_of_range_scorer_is_clamped() {
        let answer = interpret_answer("text".to_string(), &FixedConfidence(1.7));
        assert_eq!(answer.confidence, 1.0);

        let answer = interpret_answer("text".to_string(), &FixedConfidence(-0.2));
        assert_eq!(answer.confidence, 0.0);
    }

    #[test]
    fn test_topics_capped_at_five() {
        let raw = "one\ntwo\nthree\nfour\nfive\nsix\nseven";
        let topics = parse_topics(raw);
        assert_eq!(topics, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn test_topics_skip_blank_lines_and_trim() {
        let raw = "  hypertension  \n\n   \n diabetes\n";
        assert_eq!(parse_topics(raw), vec!["hypertension", "diabetes"]);
    }

    #[test]
    fn test_empty_reply_yields_no_topics() {
        assert!(parse_topics("").is_empty());
        assert!(parse_topics("\n \n\t\n").is_empty());
    }
}
