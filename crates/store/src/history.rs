//! Persistent, append-only history of past generations.
//!
//! The store is the sole owner of the persisted list: every mutation loads,
//! transforms, and writes back the full newest-first array under the
//! [`keys::HISTORY`] key. Mutations are synchronous and immediately durable.

use vidgen_core::history::{self, HistoryEntry};

use crate::error::StoreError;
use crate::kv::{keys, KvStore};

/// Stateless repository over the [`KvStore`] port.
pub struct HistoryStore;

impl HistoryStore {
    /// Current entries, newest-first. A missing key reads as an empty list.
    ///
    /// The list is fully materialized; there is no pagination.
    pub fn list(kv: &impl KvStore) -> Result<Vec<HistoryEntry>, StoreError> {
        match kv.get(keys::HISTORY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Prepend `entry` and persist the full list.
    pub fn record(kv: &impl KvStore, entry: HistoryEntry) -> Result<(), StoreError> {
        let mut entries = Self::list(kv)?;
        history::prepend(&mut entries, entry);
        Self::save(kv, &entries)?;
        tracing::debug!(total = entries.len(), "History entry recorded");
        Ok(())
    }

    /// Delete the entry with the given id and persist the remainder.
    ///
    /// Removing a non-existent id is a no-op (nothing is rewritten).
    pub fn remove(kv: &impl KvStore, id: &str) -> Result<(), StoreError> {
        let mut entries = Self::list(kv)?;
        if history::remove_entry(&mut entries, id) {
            Self::save(kv, &entries)?;
            tracing::debug!(%id, "History entry removed");
        }
        Ok(())
    }

    /// Empty the list, removing the persisted key entirely.
    pub fn clear(kv: &impl KvStore) -> Result<(), StoreError> {
        kv.delete(keys::HISTORY)?;
        tracing::debug!("History cleared");
        Ok(())
    }

    fn save(kv: &impl KvStore, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        kv.set(keys::HISTORY, &serde_json::to_string(entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};
    use vidgen_core::request::GenerationRequest;

    use crate::kv::MemoryKvStore;

    fn entry(millis: i64, prompt: &str) -> HistoryEntry {
        let at = Utc.timestamp_millis_opt(millis).unwrap();
        let request = GenerationRequest::new(prompt).with_start_image(vec![1]);
        HistoryEntry::from_request(at, &request, "https://x/video.mp4", "data:image/png;base64,AA")
    }

    #[test]
    fn empty_store_lists_nothing() {
        let kv = MemoryKvStore::new();
        assert!(HistoryStore::list(&kv).unwrap().is_empty());
    }

    #[test]
    fn record_prepends_newest_first() {
        let kv = MemoryKvStore::new();
        HistoryStore::record(&kv, entry(1, "first")).unwrap();
        HistoryStore::record(&kv, entry(2, "second")).unwrap();

        let entries = HistoryStore::list(&kv).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].prompt, "second");
        assert_eq!(entries[1].prompt, "first");
    }

    #[test]
    fn remove_drops_only_the_matching_entry() {
        let kv = MemoryKvStore::new();
        HistoryStore::record(&kv, entry(1, "a")).unwrap();
        HistoryStore::record(&kv, entry(2, "b")).unwrap();

        HistoryStore::remove(&kv, "1").unwrap();
        let entries = HistoryStore::list(&kv).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries.iter().all(|e| e.id != "1"));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let kv = MemoryKvStore::new();
        HistoryStore::record(&kv, entry(1, "a")).unwrap();
        HistoryStore::remove(&kv, "999").unwrap();
        assert_eq!(HistoryStore::list(&kv).unwrap().len(), 1);
    }

    #[test]
    fn clear_removes_the_persisted_key_entirely() {
        let kv = MemoryKvStore::new();
        HistoryStore::record(&kv, entry(1, "a")).unwrap();

        HistoryStore::clear(&kv).unwrap();
        assert!(HistoryStore::list(&kv).unwrap().is_empty());
        assert_eq!(kv.get(keys::HISTORY).unwrap(), None);
    }

    #[test]
    fn persisted_list_round_trips_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let kv = crate::kv::FileKvStore::open(dir.path()).unwrap();

        HistoryStore::record(&kv, entry(1, "a")).unwrap();
        HistoryStore::record(&kv, entry(2, "b")).unwrap();
        HistoryStore::record(&kv, entry(3, "c")).unwrap();
        let before = HistoryStore::list(&kv).unwrap();

        // A fresh handle over the same directory sees the identical sequence.
        let reopened = crate::kv::FileKvStore::open(dir.path()).unwrap();
        let after = HistoryStore::list(&reopened).unwrap();
        assert_eq!(before, after);
        assert_eq!(
            after.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            vec!["3", "2", "1"]
        );
    }

    #[test]
    fn corrupt_history_surfaces_a_serialize_error() {
        let kv = MemoryKvStore::new();
        kv.set(keys::HISTORY, "not json").unwrap();
        assert_matches!(HistoryStore::list(&kv), Err(StoreError::Serialize(_)));
    }
}
