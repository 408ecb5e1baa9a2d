use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet error: {0}")]
    Workbook(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported JSON layout: {0}")]
    JsonLayout(String),

    #[error("DOCX archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid DOCX file: {0}")]
    Docx(String),

    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("no extraction record found at {0}")]
    StoreNotFound(String),

    #[error("entry {0} not found")]
    EntryNotFound(u64),
}
