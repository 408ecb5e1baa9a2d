//! Tabular view over loaded documents.

use serde::Serialize;

use crate::entries::{extract_entries, fallback_segments, Entry};
use crate::loader::LoadedDocument;

/// Name of the single column produced from PDF/DOCX text.
pub const TEXT_COLUMN: &str = "text";

/// Number of rows included in [`Dataset::preview`] and entry previews.
pub const PREVIEW_ROWS: usize = 5;

/// Number of leading non-null cells sampled by [`Dataset::detect_text_columns`].
const TEXT_SAMPLE_SIZE: usize = 10;

/// Mean sample length above which a column is considered free text.
const TEXT_MIN_MEAN_LEN: f64 = 10.0;

/// Tokens read as missing values in delimited files.
const MISSING_TOKENS: &[&str] = &[
    "na", "n/a", "nan", "null", "none", "nil", "-", "#n/a", "<na>",
];

/// A single typed cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// String form of a non-null cell.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Int(i) => Some(i.to_string()),
            CellValue::Float(f) => Some(f.to_string()),
            CellValue::Text(s) => Some(s.clone()),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Null => serde_json::Value::Null,
            CellValue::Bool(b) => serde_json::json!(b),
            CellValue::Int(i) => serde_json::json!(i),
            CellValue::Float(f) => serde_json::json!(f),
            CellValue::Text(s) => serde_json::json!(s),
        }
    }
}

/// Infer a typed cell from a raw delimited-file field.
#[must_use]
pub fn infer_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed.to_lowercase().as_str()) {
        return CellValue::Null;
    }
    match trimmed {
        "true" | "True" | "TRUE" => return CellValue::Bool(true),
        "false" | "False" | "FALSE" => return CellValue::Bool(false),
        _ => {}
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.is_finite() {
            return CellValue::Float(f);
        }
    }
    CellValue::Text(raw.to_string())
}

/// Rows of typed cells under named columns.
///
/// Every row has exactly one cell per header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Build a dataset, padding short rows with nulls and naming any extra columns.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(headers.len());

        let mut headers: Vec<String> = headers
            .into_iter()
            .enumerate()
            .map(|(i, h)| {
                if h.trim().is_empty() {
                    format!("Unnamed: {i}")
                } else {
                    h
                }
            })
            .collect();
        for i in headers.len()..width {
            headers.push(format!("Unnamed: {i}"));
        }

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Null);
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// A one-column dataset named [`TEXT_COLUMN`].
    #[must_use]
    pub fn from_texts<I>(texts: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let rows = texts.into_iter().map(|t| vec![CellValue::Text(t)]).collect();
        Self::new(vec![TEXT_COLUMN.to_string()], rows)
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Total number of null cells.
    #[must_use]
    pub fn missing_values(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| c.is_null())
            .count()
    }

    /// The first `n` rows as JSON objects keyed by header.
    #[must_use]
    pub fn preview(&self, n: usize) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .take(n)
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().map(CellValue::to_json))
                    .collect()
            })
            .collect()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn column(&self, idx: usize) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().map(move |row| &row[idx])
    }

    /// Columns that look like free text rather than categories or numbers.
    ///
    /// A column qualifies when it holds at least one text cell and the mean
    /// length of its first ten non-null cells exceeds ten characters.
    #[must_use]
    pub fn detect_text_columns(&self) -> Vec<String> {
        let mut found = Vec::new();

        for (idx, header) in self.headers.iter().enumerate() {
            let has_text = self.column(idx).any(|c| matches!(c, CellValue::Text(_)));
            if !has_text {
                continue;
            }

            let sample: Vec<String> = self
                .column(idx)
                .filter_map(CellValue::as_text)
                .take(TEXT_SAMPLE_SIZE)
                .collect();
            if sample.is_empty() {
                continue;
            }

            let total_chars: usize = sample.iter().map(|s| s.chars().count()).sum();
            #[allow(clippy::cast_precision_loss)]
            let mean = total_chars as f64 / sample.len() as f64;
            if mean > TEXT_MIN_MEAN_LEN {
                found.push(header.clone());
            }
        }

        found
    }

    /// Non-null cells of a column as strings, at most `limit` of them.
    ///
    /// Returns `None` if the column does not exist.
    #[must_use]
    pub fn column_texts(&self, name: &str, limit: usize) -> Option<Vec<String>> {
        let idx = self.column_index(name)?;
        Some(
            self.column(idx)
                .filter_map(CellValue::as_text)
                .take(limit)
                .collect(),
        )
    }
}

/// Summary of a successful numbered-entry extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionInfo {
    pub total_entries: usize,
    pub entries: Vec<Entry>,
    /// Bodies of the first few entries.
    pub preview: Vec<String>,
}

impl ExtractionInfo {
    fn from_entries(entries: Vec<Entry>) -> Self {
        let preview = entries
            .iter()
            .take(PREVIEW_ROWS)
            .map(|e| e.body.clone())
            .collect();
        Self {
            total_entries: entries.len(),
            entries,
            preview,
        }
    }
}

/// A dataset ready for analysis, with extraction details when entries were found.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDataset {
    pub dataset: Dataset,
    pub extraction: Option<ExtractionInfo>,
}

/// Turn a loaded document into a dataset.
///
/// Tables pass through. Text documents become a single `text` column holding
/// the numbered entries, or one row per non-blank line when none are found.
#[must_use]
pub fn build_dataset(document: LoadedDocument) -> PreparedDataset {
    match document {
        LoadedDocument::Table(dataset) => PreparedDataset {
            dataset,
            extraction: None,
        },
        LoadedDocument::Text(raw) => {
            let text = raw.text();
            let entries = extract_entries(&text);

            if entries.is_empty() {
                let segments = fallback_segments(&text);
                tracing::info!(
                    segments = segments.len(),
                    "no numbered entries found; falling back to line segments"
                );
                return PreparedDataset {
                    dataset: Dataset::from_texts(segments),
                    extraction: None,
                };
            }

            let dataset = Dataset::from_texts(entries.iter().map(|e| e.body.clone()));
            PreparedDataset {
                dataset,
                extraction: Some(ExtractionInfo::from_entries(entries)),
            }
        }
    }
}
