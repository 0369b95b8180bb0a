//! MedCollab Ingest — text normalization and PDF extraction.

pub mod extract;
pub mod normalize;

pub use extract::extract_pdf;
pub use normalize::clean;
