//! MedCollab Gateway — prompt construction, the Ollama inference client,
//! and raw-response interpretation.

pub mod client;
pub mod interpret;
pub mod prompt;

pub use client::{OllamaClient, TextGenerator};
pub use interpret::{ConfidenceScorer, FixedConfidence};
