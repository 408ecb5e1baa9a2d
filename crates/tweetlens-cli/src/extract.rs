//! `extract` command: list and export the numbered entries of a document.

use std::path::Path;

use tweetlens_extract::{
    export_entries_csv, export_entries_json, extract_entries, load_document, DocumentFormat,
    Entry, ExtractionRecord, ExtractionStore, LoadedDocument,
};

/// Extract numbered entries from a DOCX or PDF file, print them, and export
/// them when output paths are given. With `store_out` the entries also
/// replace the saved extraction record.
///
/// # Errors
///
/// Returns an error for tabular or unsupported formats, unreadable files, or
/// failed exports.
pub(crate) fn run_extract(
    path: &Path,
    csv_out: Option<&Path>,
    json_out: Option<&Path>,
    store_out: Option<&Path>,
) -> anyhow::Result<()> {
    let entries = entries_from_file(path)?;

    if entries.is_empty() {
        println!("no numbered entries found in {}", path.display());
        return Ok(());
    }

    println!("found {} entries in {}", entries.len(), path.display());
    for entry in &entries {
        println!("{}. {}", entry.ordinal, entry.body);
    }

    if let Some(out) = csv_out {
        if let Some(written) = export_entries_csv(&entries, out)? {
            println!("wrote {}", written.display());
        }
    }
    if let Some(out) = json_out {
        if let Some(written) = export_entries_json(&entries, out)? {
            println!("wrote {}", written.display());
        }
    }
    if let Some(out) = store_out {
        ExtractionStore::new(out).save(&ExtractionRecord::new(path, &entries))?;
        println!("saved extraction record to {}", out.display());
    }

    Ok(())
}

fn entries_from_file(path: &Path) -> anyhow::Result<Vec<Entry>> {
    let format = DocumentFormat::from_path(path)?;
    if format.is_tabular() {
        anyhow::bail!("{format} files hold tables, not numbered entries; use `tweetlens analyze`");
    }

    match load_document(path)? {
        LoadedDocument::Text(raw) => Ok(extract_entries(&raw.text())),
        LoadedDocument::Table(_) => {
            anyhow::bail!("{} loaded as a table, not as text", path.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabular_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tweets.csv");
        std::fs::write(&path, "text\nhello there friend\n").unwrap();

        let err = run_extract(&path, None, None, None).unwrap_err();
        assert!(err.to_string().contains("csv files hold tables"));
    }

    #[test]
    fn store_flag_saves_extraction_record() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let docx = dir.path().join("tweets.docx");
        let xml = concat!(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
            "<w:p><w:r><w:t>1. Delivery came two days early</w:t></w:r></w:p>",
            "<w:p><w:r><w:t>2. Checkout is buggy</w:t></w:r></w:p>",
            "</w:body></w:document>"
        );
        let mut zip = zip::ZipWriter::new(std::fs::File::create(&docx).unwrap());
        zip.start_file("word/document.xml", zip::write::FileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();

        let store_path = dir.path().join("data").join("tweets.json");
        run_extract(&docx, None, None, Some(&store_path)).unwrap();

        let record = ExtractionStore::new(&store_path)
            .load()
            .unwrap()
            .expect("record saved");
        assert_eq!(record.filename.as_deref(), Some("tweets.docx"));
        assert_eq!(record.total_items, 2);
        assert_eq!(record.items[1].id, 2);
        assert_eq!(record.items[1].text, "Checkout is buggy");
        assert!(record.extracted_at.is_some());
    }

    #[test]
    fn unsupported_input_is_rejected() {
        let err = run_extract(Path::new("notes.txt"), None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "unsupported file format: txt");
    }
}
