//! DOCX loader.
//!
//! A DOCX file is a ZIP archive; the body lives in `word/document.xml`. Each
//! `<w:p>` paragraph becomes one line of the resulting document.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::document::RawDocument;
use crate::error::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

pub(crate) fn load_docx(path: &Path) -> Result<RawDocument, ExtractError> {
    let file = File::open(path).map_err(|e| ExtractError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut archive = ZipArchive::new(file)?;
    let mut xml = String::new();
    {
        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| ExtractError::Docx(format!("{DOCUMENT_PART} not found")))?;
        part.read_to_string(&mut xml).map_err(|e| ExtractError::Io {
            path: format!("{}!{DOCUMENT_PART}", path.display()),
            source: e,
        })?;
    }

    let paragraphs = paragraphs_from_xml(&xml)?;
    tracing::debug!(paragraphs = paragraphs.len(), "read DOCX paragraphs");
    Ok(RawDocument::from_lines(paragraphs))
}

/// Collect the text of every `<w:p>` paragraph, in document order.
///
/// Text runs (`<w:t>`) are concatenated; `<w:tab/>` becomes a tab and
/// `<w:br/>`/`<w:cr/>` a line break.
pub(crate) fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if in_paragraph => current.push('\t'),
                b"w:br" | b"w:cr" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(e) if in_text => {
                current.push_str(&e.unescape()?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
