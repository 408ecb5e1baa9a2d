//! Document loading and numbered-entry extraction.
//!
//! Loads CSV, XLSX, JSON, DOCX and PDF inputs. Tabular formats become a
//! [`Dataset`] directly; text formats are scanned for numbered entries
//! (`1. ...`, `2. ...`) whose multi-line bodies are reassembled, with a
//! per-line fallback when no numbering is present. The last extraction can be
//! persisted as an [`ExtractionRecord`] and edited in place.

pub mod dataset;
pub mod document;
pub mod entries;
pub mod error;
pub mod export;
pub mod loader;
pub mod store;

pub use dataset::{build_dataset, CellValue, Dataset, ExtractionInfo, PreparedDataset};
pub use document::RawDocument;
pub use entries::{clean_body, extract_entries, fallback_segments, Entry};
pub use error::ExtractError;
pub use export::{export_entries_csv, export_entries_json};
pub use loader::{load_document, DocumentFormat, LoadedDocument};
pub use store::{ExtractionRecord, ExtractionStore, StoredEntry, DEFAULT_STORE_PATH};
