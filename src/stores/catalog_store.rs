//! Catalog store - in-memory artist records loaded from a static document

use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::config::is_remote;
use crate::models::ArtistRecord;
use crate::utils::network::fetch_json;

/// Global listing catalog instance
static LISTING_STORE: OnceLock<Arc<CatalogStore>> = OnceLock::new();

/// Global onboarded roster instance
static ROSTER_STORE: OnceLock<Arc<CatalogStore>> = OnceLock::new();

/// In-memory store for one catalog document, kept in document order
pub struct CatalogStore {
    records: RwLock<Vec<ArtistRecord>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Get or initialize the global listing catalog
    pub fn listing() -> Arc<CatalogStore> {
        LISTING_STORE
            .get_or_init(|| Arc::new(CatalogStore::new()))
            .clone()
    }

    /// Get or initialize the global onboarded roster
    pub fn roster() -> Arc<CatalogStore> {
        ROSTER_STORE
            .get_or_init(|| Arc::new(CatalogStore::new()))
            .clone()
    }

    /// Replace the store contents
    pub fn load(&self, records: Vec<ArtistRecord>) {
        *self.records.write() = records;
    }

    /// Get total record count
    pub fn count(&self) -> usize {
        self.records.read().len()
    }

    /// Get all records in document order
    pub fn get_all(&self) -> Vec<ArtistRecord> {
        self.records.read().clone()
    }

    /// Get record by id
    pub fn get_by_id(&self, id: i64) -> Option<ArtistRecord> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }

    /// Append a record, e.g. an accepted onboarding submission
    pub fn add(&self, record: ArtistRecord) {
        self.records.write().push(record);
    }

    /// Clear the store
    pub fn clear(&self) {
        self.records.write().clear();
    }

    /// Load the store from a resolved source.
    ///
    /// A failed fetch leaves an empty store so the views fall back to their
    /// empty state; the error is only logged.
    pub async fn load_from_source(&self, source: &str, timeout: Duration) -> usize {
        let records = match read_source(source, timeout).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Failed to load catalog from {}: {:#}", source, e);
                Vec::new()
            }
        };
        let count = records.len();
        self.load(records);
        count
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a catalog document from a file path or an http(s) url
pub async fn read_source(source: &str, timeout: Duration) -> Result<Vec<ArtistRecord>> {
    if is_remote(source) {
        return fetch_json(source, timeout).await;
    }

    let content = tokio::fs::read_to_string(source)
        .await
        .with_context(|| format!("Failed to read {}", source))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", source))
}
