use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Reference sentences used when no knowledge base file is configured.
pub const DEFAULT_KNOWLEDGE_BASE: [&str; 6] = [
    "Hate speech often contains derogatory terms targeting specific groups",
    "Positive sentiment indicators include words like excellent, amazing, love, great",
    "Negative sentiment indicators include words like terrible, awful, hate, disappointed",
    "Neutral sentiment often uses factual language without emotional indicators",
    "Context matters significantly in sentiment analysis",
    "Sarcasm can flip the apparent sentiment of a statement",
];

/// Descriptive sentences retrieved as context for classified texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub sentences: Vec<String>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            sentences: DEFAULT_KNOWLEDGE_BASE
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

/// Load and validate a knowledge base from a YAML file.
///
/// The file has a single `sentences` list.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_knowledge_base(path: &Path) -> Result<KnowledgeBase, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::KnowledgeBaseIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let kb: KnowledgeBase = serde_yaml::from_str(&content)?;
    validate_knowledge_base(&kb)?;

    Ok(kb)
}

fn validate_knowledge_base(kb: &KnowledgeBase) -> Result<(), ConfigError> {
    if kb.sentences.is_empty() {
        return Err(ConfigError::Validation(
            "knowledge base must contain at least one sentence".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for sentence in &kb.sentences {
        let trimmed = sentence.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Validation(
                "knowledge base sentences must be non-empty".to_string(),
            ));
        }
        if !seen.insert(trimmed.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate knowledge base sentence: '{trimmed}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_yaml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write yaml");
        file
    }

    #[test]
    fn default_has_six_sentences() {
        let kb = KnowledgeBase::default();
        assert_eq!(kb.sentences.len(), 6);
        assert!(validate_knowledge_base(&kb).is_ok());
    }

    #[test]
    fn loads_valid_file() {
        let file = write_yaml("sentences:\n  - Reviews praise fast delivery\n  - Complaints mention billing\n");
        let kb = load_knowledge_base(file.path()).expect("should load");
        assert_eq!(kb.sentences.len(), 2);
        assert_eq!(kb.sentences[0], "Reviews praise fast delivery");
    }

    #[test]
    fn empty_list_fails_validation() {
        let file = write_yaml("sentences: []\n");
        let err = load_knowledge_base(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn duplicate_sentence_fails_validation() {
        let file = write_yaml("sentences:\n  - Same thing\n  - same thing\n");
        let err = load_knowledge_base(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("duplicate")));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let file = write_yaml("sentences: [unclosed\n");
        let err = load_knowledge_base(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::KnowledgeBaseParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_knowledge_base(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::KnowledgeBaseIo { .. }));
    }
}
