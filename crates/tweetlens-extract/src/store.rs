//! Persisted extraction record.
//!
//! The last extraction is kept as one pretty-printed JSON document:
//!
//! ```json
//! {
//!   "filename": "tweets.pdf",
//!   "extractedAt": "2026-10-19T08:30:00Z",
//!   "totalItems": 2,
//!   "items": [{ "id": 1, "text": "..." }, { "id": 2, "text": "..." }]
//! }
//! ```
//!
//! Saving replaces the whole record. Items can then be listed, edited by id
//! and deleted one id at a time or all at once.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entries::Entry;
use crate::error::ExtractError;

/// Where the record lives when no other path is configured.
pub const DEFAULT_STORE_PATH: &str = "data/tweets.json";

/// One stored entry. `id` is the entry's ordinal as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub id: u64,
    pub text: String,
}

impl From<&Entry> for StoredEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.ordinal,
            text: entry.body.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<DateTime<Utc>>,
    pub total_items: usize,
    pub items: Vec<StoredEntry>,
}

impl ExtractionRecord {
    /// Record for entries just extracted from `source`, stamped with the current time.
    #[must_use]
    pub fn new(source: &Path, entries: &[Entry]) -> Self {
        let items: Vec<StoredEntry> = entries.iter().map(StoredEntry::from).collect();
        Self {
            filename: source
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            extracted_at: Some(Utc::now()),
            total_items: items.len(),
            items,
        }
    }
}

/// File-backed store for a single [`ExtractionRecord`].
#[derive(Debug, Clone)]
pub struct ExtractionStore {
    path: PathBuf,
}

impl ExtractionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored record, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Io`] if the directory or file cannot be
    /// written, or [`ExtractError::Json`] on serialization failure.
    pub fn save(&self, record: &ExtractionRecord) -> Result<(), ExtractError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ExtractError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let body = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, body).map_err(|e| ExtractError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;

        tracing::info!(
            path = %self.path.display(),
            total_items = record.total_items,
            "saved extraction record"
        );
        Ok(())
    }

    /// Read the stored record. `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Io`] if the file exists but cannot be read, or
    /// [`ExtractError::Json`] if it does not hold a record.
    pub fn load(&self) -> Result<Option<ExtractionRecord>, ExtractError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ExtractError::Io {
                    path: self.path.display().to_string(),
                    source: e,
                })
            }
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn load_existing(&self) -> Result<ExtractionRecord, ExtractError> {
        self.load()?
            .ok_or_else(|| ExtractError::StoreNotFound(self.path.display().to_string()))
    }

    /// Replace the text of the first item with `id` and return the updated item.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::StoreNotFound`] when no record has been saved
    /// and [`ExtractError::EntryNotFound`] when no item has `id`.
    pub fn update_entry(&self, id: u64, text: &str) -> Result<StoredEntry, ExtractError> {
        let mut record = self.load_existing()?;
        let item = record
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ExtractError::EntryNotFound(id))?;
        item.text = text.to_string();
        let updated = item.clone();

        self.save(&record)?;
        tracing::info!(id, "updated stored entry");
        Ok(updated)
    }

    /// Remove every item with `id` and return how many items remain.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::StoreNotFound`] when no record has been saved
    /// and [`ExtractError::EntryNotFound`] when no item has `id`.
    pub fn delete_entry(&self, id: u64) -> Result<usize, ExtractError> {
        let mut record = self.load_existing()?;
        let before = record.items.len();
        record.items.retain(|item| item.id != id);
        if record.items.len() == before {
            return Err(ExtractError::EntryNotFound(id));
        }
        record.total_items = record.items.len();

        self.save(&record)?;
        tracing::info!(id, remaining = record.total_items, "deleted stored entry");
        Ok(record.total_items)
    }

    /// Remove all items, keeping the record's filename and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::StoreNotFound`] when no record has been saved.
    pub fn clear(&self) -> Result<(), ExtractError> {
        let mut record = self.load_existing()?;
        record.items.clear();
        record.total_items = 0;
        self.save(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::extract_entries;

    fn saved_store(dir: &Path) -> ExtractionStore {
        let store = ExtractionStore::new(dir.join("data").join("tweets.json"));
        let entries = extract_entries("1. Delivery came early\n2. Checkout is buggy\n3. Love it");
        store
            .save(&ExtractionRecord::new(Path::new("/uploads/tweets.pdf"), &entries))
            .unwrap();
        store
    }

    fn ids(record: &ExtractionRecord) -> Vec<u64> {
        record.items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn record_uses_camel_case_field_names() {
        let record = ExtractionRecord::new(
            Path::new("tweets.pdf"),
            &[Entry {
                ordinal: 7,
                body: "hello".to_string(),
            }],
        );
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["filename"], "tweets.pdf");
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["items"], serde_json::json!([{"id": 7, "text": "hello"}]));
        assert!(json["extractedAt"].is_string());
    }

    #[test]
    fn record_without_metadata_parses() {
        let record: ExtractionRecord =
            serde_json::from_str(r#"{"totalItems": 1, "items": [{"id": 1, "text": "a"}]}"#)
                .unwrap();
        assert!(record.filename.is_none());
        assert!(record.extracted_at.is_none());
        assert_eq!(ids(&record), [1]);
    }

    #[test]
    fn save_creates_parent_directory_and_load_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = saved_store(dir.path());

        let record = store.load().unwrap().expect("record saved");
        assert_eq!(record.filename.as_deref(), Some("tweets.pdf"));
        assert_eq!(record.total_items, 3);
        assert_eq!(ids(&record), [1, 2, 3]);
        assert_eq!(record.items[1].text, "Checkout is buggy");
    }

    #[test]
    fn load_of_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExtractionStore::new(dir.path().join("tweets.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn update_replaces_text_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = saved_store(dir.path());

        let updated = store.update_entry(2, "Checkout is fixed now").unwrap();
        assert_eq!(updated.text, "Checkout is fixed now");

        let record = store.load().unwrap().unwrap();
        assert_eq!(ids(&record), [1, 2, 3]);
        assert_eq!(record.items[1].text, "Checkout is fixed now");
        assert_eq!(record.total_items, 3);
    }

    #[test]
    fn update_of_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = saved_store(dir.path());
        let err = store.update_entry(9, "x").unwrap_err();
        assert!(matches!(err, ExtractError::EntryNotFound(9)), "got {err:?}");
    }

    #[test]
    fn delete_removes_item_and_recounts() {
        let dir = tempfile::tempdir().unwrap();
        let store = saved_store(dir.path());

        assert_eq!(store.delete_entry(1).unwrap(), 2);
        let record = store.load().unwrap().unwrap();
        assert_eq!(ids(&record), [2, 3]);
        assert_eq!(record.total_items, 2);

        let err = store.delete_entry(1).unwrap_err();
        assert!(matches!(err, ExtractError::EntryNotFound(1)), "got {err:?}");
    }

    #[test]
    fn delete_removes_every_item_sharing_an_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExtractionStore::new(dir.path().join("tweets.json"));
        let entries = extract_entries("1. first\n1. again\n2. other");
        store
            .save(&ExtractionRecord::new(Path::new("dup.docx"), &entries))
            .unwrap();

        assert_eq!(store.delete_entry(1).unwrap(), 1);
        assert_eq!(ids(&store.load().unwrap().unwrap()), [2]);
    }

    #[test]
    fn clear_keeps_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let store = saved_store(dir.path());
        let before = store.load().unwrap().unwrap();

        store.clear().unwrap();
        let after = store.load().unwrap().unwrap();
        assert!(after.items.is_empty());
        assert_eq!(after.total_items, 0);
        assert_eq!(after.filename, before.filename);
        assert_eq!(after.extracted_at, before.extracted_at);
    }

    #[test]
    fn edits_without_a_saved_record_fail() {
        let dir = tempfile::tempdir().unwrap();
        let store = ExtractionStore::new(dir.path().join("tweets.json"));

        assert!(matches!(
            store.update_entry(1, "x"),
            Err(ExtractError::StoreNotFound(_))
        ));
        assert!(matches!(
            store.delete_entry(1),
            Err(ExtractError::StoreNotFound(_))
        ));
        assert!(matches!(store.clear(), Err(ExtractError::StoreNotFound(_))));
    }
}
