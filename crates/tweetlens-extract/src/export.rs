//! CSV and JSON export of extracted entries.

use std::path::{Path, PathBuf};

use crate::entries::Entry;
use crate::error::ExtractError;

/// Write entries as CSV with a `tweet_number,tweet_text` header.
///
/// Returns `Ok(None)` without creating a file when `entries` is empty.
///
/// # Errors
///
/// Returns [`ExtractError::Csv`] if the file cannot be created or written.
pub fn export_entries_csv(entries: &[Entry], path: &Path) -> Result<Option<PathBuf>, ExtractError> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush().map_err(|e| ExtractError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::info!(count = entries.len(), path = %path.display(), "exported entries to CSV");
    Ok(Some(path.to_path_buf()))
}

/// Write entries as a pretty-printed JSON array.
///
/// Returns `Ok(None)` without creating a file when `entries` is empty.
///
/// # Errors
///
/// Returns [`ExtractError::Json`] on serialization failure or
/// [`ExtractError::Io`] if the file cannot be written.
pub fn export_entries_json(
    entries: &[Entry],
    path: &Path,
) -> Result<Option<PathBuf>, ExtractError> {
    if entries.is_empty() {
        return Ok(None);
    }

    let body = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, body).map_err(|e| ExtractError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::info!(count = entries.len(), path = %path.display(), "exported entries to JSON");
    Ok(Some(path.to_path_buf()))
}
