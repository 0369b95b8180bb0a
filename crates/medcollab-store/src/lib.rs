//! MedCollab Store — append-only JSON interaction persistence and
//! summary export.

pub mod export;
pub mod store;

pub use store::JsonStore;
