//! Format-specific document loaders.

mod delimited;
mod docx;
mod pdf;
mod records;
mod workbook;

use std::path::Path;

use crate::dataset::Dataset;
use crate::document::RawDocument;
use crate::error::ExtractError;

/// Supported input formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Csv,
    Xlsx,
    Json,
    Docx,
    Pdf,
}

impl DocumentFormat {
    /// Resolve the format from a path's extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::UnsupportedFormat`] for any other extension,
    /// including a missing one.
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "json" => Ok(Self::Json),
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            "" => Err(ExtractError::UnsupportedFormat(
                path.display().to_string(),
            )),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Whether the format loads straight into a [`Dataset`].
    #[must_use]
    pub fn is_tabular(self) -> bool {
        matches!(self, Self::Csv | Self::Xlsx | Self::Json)
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Csv => write!(f, "csv"),
            DocumentFormat::Xlsx => write!(f, "xlsx"),
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Docx => write!(f, "docx"),
            DocumentFormat::Pdf => write!(f, "pdf"),
        }
    }
}

/// Output of a loader: a table, or raw text still to be split into entries.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedDocument {
    Table(Dataset),
    Text(RawDocument),
}

/// Load a document, dispatching on its extension.
///
/// # Errors
///
/// Returns [`ExtractError::UnsupportedFormat`] for unknown extensions, or the
/// format-specific error if the file cannot be read or parsed.
pub fn load_document(path: &Path) -> Result<LoadedDocument, ExtractError> {
    let format = DocumentFormat::from_path(path)?;
    tracing::info!(path = %path.display(), %format, "loading document");

    let loaded = match format {
        DocumentFormat::Csv => LoadedDocument::Table(delimited::load_csv(path)?),
        DocumentFormat::Xlsx => LoadedDocument::Table(workbook::load_xlsx(path)?),
        DocumentFormat::Json => LoadedDocument::Table(records::load_json(path)?),
        DocumentFormat::Docx => LoadedDocument::Text(docx::load_docx(path)?),
        DocumentFormat::Pdf => LoadedDocument::Text(pdf::load_pdf(path)?),
    };

    match &loaded {
        LoadedDocument::Table(ds) => tracing::debug!(
            rows = ds.row_count(),
            columns = ds.column_count(),
            "loaded table"
        ),
        LoadedDocument::Text(raw) => {
            tracing::debug!(lines = raw.lines().len(), "loaded text document");
        }
    }

    Ok(loaded)
}

fn read_to_string(path: &Path) -> Result<String, ExtractError> {
    std::fs::read_to_string(path).map_err(|e| ExtractError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
