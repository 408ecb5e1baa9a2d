/// Text extracted from a PDF or DOCX file, one element per line.
///
/// Line endings are normalized to `\n` on construction; the lines are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawDocument {
    lines: Vec<String>,
}

impl RawDocument {
    /// Build a document from a blob of text, normalizing CRLF and CR to LF.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let normalized = normalize_line_endings(text);
        Self {
            lines: normalized.split('\n').map(str::to_string).collect(),
        }
    }

    /// Build a document from already-separated lines (e.g. DOCX paragraphs).
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self::from_text(&lines.join("\n"))
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

/// Replace `\r\n` and lone `\r` with `\n`.
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_and_cr_become_lf() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn from_text_splits_lines() {
        let doc = RawDocument::from_text("one\r\ntwo\rthree");
        assert_eq!(doc.lines(), ["one", "two", "three"]);
    }

    #[test]
    fn from_lines_splits_embedded_breaks() {
        let doc = RawDocument::from_lines(vec!["first\nsecond".to_string(), "third".to_string()]);
        assert_eq!(doc.lines().len(), 3);
        assert_eq!(doc.text(), "first\nsecond\nthird");
    }

    #[test]
    fn whitespace_only_document_is_blank() {
        assert!(RawDocument::from_text("  \n\t\n").is_blank());
        assert!(!RawDocument::from_text("\nx\n").is_blank());
    }
}
