//! PDF loader.

use std::path::Path;

use crate::document::RawDocument;
use crate::error::ExtractError;

pub(crate) fn load_pdf(path: &Path) -> Result<RawDocument, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::Io {
            path: path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        });
    }

    let text = pdf_extract::extract_text(path)
        .map_err(|e| ExtractError::Pdf(format!("{}: {e}", path.display())))?;

    let doc = RawDocument::from_text(&text);
    if doc.is_blank() {
        tracing::warn!(path = %path.display(), "PDF produced no extractable text");
    }
    Ok(doc)
}
