//! MedCollab Core — error taxonomy, configuration, shared data types.

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use types::{
    DocumentPage, ExtractedDocument, PdfUploadResponse, Query, QueryRecord, QueryResponse,
    StoreData,
};
