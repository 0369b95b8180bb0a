//! Append-only interaction store backed by a single JSON document.
//!
//! Each append is a full read-modify-write of the backing file. The store
//! holds one process-wide mutex from read through write, so concurrent
//! appends from multiple request handlers cannot drop each other's records.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::info;

use medcollab_core::types::{PdfUploadResponse, QueryRecord, StoreData};
use medcollab_core::{Error, Result};

pub struct JsonStore {
    path: PathBuf,
    /// Serializes every read-modify-write cycle.
    guard: Mutex<()>,
}

impl JsonStore {
    /// Open the store at `path`, initializing an empty document (and any
    /// missing parent directories) if the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::Persistence(format!("create {:?}: {}", parent, e)))?;
            }
            let empty = serde_json::to_string_pretty(&StoreData::default())
                .map_err(|e| Error::Persistence(e.to_string()))?;
            std::fs::write(&path, empty)
                .map_err(|e| Error::Persistence(format!("initialize {:?}: {}", path, e)))?;
            info!("Initialized interaction store at {}", path.display());
        }
        Ok(Self {
            path,
            guard: Mutex::new(()),
        })
    }

    /// Append a completed query interaction.
    pub fn append_query(&self, record: QueryRecord) -> Result<()> {
        let _guard = self.guard.lock();
        let mut data = self.read_unlocked()?;
        data.queries.push(record);
        self.write_unlocked(&data)
    }

    /// Append a document summary.
    pub fn append_summary(&self, record: PdfUploadResponse) -> Result<()> {
        let _guard = self.guard.lock();
        let mut data = self.read_unlocked()?;
        data.summaries.push(record);
        self.write_unlocked(&data)
    }

    /// All stored query interactions, in append order.
    pub fn queries(&self) -> Result<Vec<QueryRecord>> {
        let _guard = self.guard.lock();
        Ok(self.read_unlocked()?.queries)
    }

    /// All stored document summaries, in append order.
    pub fn summaries(&self) -> Result<Vec<PdfUploadResponse>> {
        let _guard = self.guard.lock();
        Ok(self.read_unlocked()?.summaries)
    }

    fn read_unlocked(&self) -> Result<StoreData> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Persistence(format!("read {:?}: {}", self.path, e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Persistence(format!("corrupt store {:?}: {}", self.path, e)))
    }

    fn write_unlocked(&self, data: &StoreData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| Error::Persistence(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| Error::Persistence(format!("write {:?}: {}", self.path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcollab_core::types::{Query, QueryResponse};

    fn record(text: &str) -> QueryRecord {
        QueryRecord::now(
            Query::new(text, None),
            QueryResponse {
                response: "answer".to_string(),
                confidence: 0.95,
                sources: Vec::new(),
            },
        )
    }

    #[test]
    fn test_initializes_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("db/data.json")).unwrap();
        assert!(store.queries().unwrap().is_empty());
        assert!(store.summaries().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("data.json")).unwrap();

        store.append_query(record("first query")).unwrap();
        store.append_query(record("second query")).unwrap();
        store
            .append_summary(PdfUploadResponse {
                filename: "Untitled".to_string(),
                page_count: 2,
                summary: "A short document summary.".to_string(),
                topics: vec!["hypertension".to_string()],
            })
            .unwrap();

        let queries = store.queries().unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].query.text, "first query");
        assert_eq!(queries[1].query.text, "second query");
        assert_eq!(store.summaries().unwrap().len(), 1);
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let store = JsonStore::open(&path).unwrap();
        store.append_query(record("persisted query")).unwrap();
        drop(store);

        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.queries().unwrap().len(), 1);
    }

    #[test]
    fn test_concurrent_appends_lose_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store =
            std::sync::Arc::new(JsonStore::open(dir.path().join("data.json")).unwrap());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.append_query(record(&format!("query number {}", i))).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.queries().unwrap().len(), 16);
    }

    #[test]
    fn test_corrupt_store_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonStore::open(&path).unwrap();
        assert!(matches!(
            store.queries(),
            Err(Error::Persistence(_))
        ));
    }
}
