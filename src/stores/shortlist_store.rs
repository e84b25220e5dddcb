//! Shortlist store - artist ids picked while browsing

use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

use crate::models::ArtistRecord;

/// Global shortlist instance
static SHORTLIST_STORE: OnceLock<Arc<ShortlistStore>> = OnceLock::new();

/// Ordered set of shortlisted artist ids
pub struct ShortlistStore {
    ids: RwLock<Vec<i64>>,
}

impl ShortlistStore {
    pub fn new() -> Self {
        Self {
            ids: RwLock::new(Vec::new()),
        }
    }

    /// Get or initialize the global shortlist
    pub fn get() -> Arc<ShortlistStore> {
        SHORTLIST_STORE
            .get_or_init(|| Arc::new(ShortlistStore::new()))
            .clone()
    }

    /// Add an id; adding twice keeps a single entry
    pub fn add(&self, id: i64) {
        let mut ids = self.ids.write();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    pub fn remove(&self, id: i64) {
        self.ids.write().retain(|&i| i != id);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.read().contains(&id)
    }

    /// Shortlisted ids in the order they were added
    pub fn ids(&self) -> Vec<i64> {
        self.ids.read().clone()
    }

    pub fn len(&self) -> usize {
        self.ids.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.read().is_empty()
    }

    /// Shortlisted records among `records`, keeping their order
    pub fn select<'a>(&self, records: &'a [ArtistRecord]) -> Vec<&'a ArtistRecord> {
        let ids = self.ids.read();
        records.iter().filter(|r| ids.contains(&r.id)).collect()
    }
}

impl Default for ShortlistStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let shortlist = ShortlistStore::new();
        shortlist.add(3);
        shortlist.add(1);
        shortlist.add(3);
        assert_eq!(shortlist.ids(), [3, 1]);
        assert_eq!(shortlist.len(), 2);
        assert!(shortlist.contains(1));
    }

    #[test]
    fn test_remove() {
        let shortlist = ShortlistStore::new();
        shortlist.add(1);
        shortlist.remove(1);
        shortlist.remove(42);
        assert!(shortlist.is_empty());
        assert!(!shortlist.contains(1));
    }

    #[test]
    fn test_select_keeps_record_order() {
        let records = vec![
            ArtistRecord::new(1, "Amy"),
            ArtistRecord::new(2, "Zed"),
            ArtistRecord::new(3, "Lana"),
        ];
        let shortlist = ShortlistStore::new();
        shortlist.add(3);
        shortlist.add(1);
        let names: Vec<&str> = shortlist
            .select(&records)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Amy", "Lana"]);
    }
}
