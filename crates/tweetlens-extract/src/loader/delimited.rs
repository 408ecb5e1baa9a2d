//! CSV loader.

use std::path::Path;

use crate::dataset::{infer_cell, Dataset};
use crate::error::ExtractError;

/// Load a comma-separated file whose first row holds the headers.
///
/// Rows may have differing widths; short rows are padded with nulls.
pub(crate) fn load_csv(path: &Path) -> Result<Dataset, ExtractError> {
    let content = super::read_to_string(path)?;
    parse_csv(&content)
}

pub(crate) fn parse_csv(content: &str) -> Result<Dataset, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(infer_cell).collect());
    }

    Ok(Dataset::new(headers, rows))
}
