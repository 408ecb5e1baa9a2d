use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Base URL of a TEI server hosting an embedding model.
    pub tei_embed_url: Option<String>,
    /// Base URL of a TEI server hosting a sequence-classification model.
    pub tei_classify_url: Option<String>,
    pub request_timeout_secs: u64,
    pub knowledge_base_path: Option<PathBuf>,
    /// Maximum number of texts analyzed from one file.
    pub max_texts: usize,
    /// Number of knowledge-base sentences attached to each result.
    pub context_top_k: usize,
    /// Added to the baseline confidence by the augmentation pass, capped at 1.0.
    pub confidence_boost: f32,
    pub hash_embed_dim: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "tei_embed_url",
                &self.tei_embed_url.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "tei_classify_url",
                &self.tei_classify_url.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("knowledge_base_path", &self.knowledge_base_path)
            .field("max_texts", &self.max_texts)
            .field("context_top_k", &self.context_top_k)
            .field("confidence_boost", &self.confidence_boost)
            .field("hash_embed_dim", &self.hash_embed_dim)
            .finish()
    }
}

impl Default for AppConfig {
    /// The values used when no environment variable is set.
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            tei_embed_url: None,
            tei_classify_url: None,
            request_timeout_secs: 30,
            knowledge_base_path: None,
            max_texts: 100,
            context_top_k: 2,
            confidence_boost: 0.05,
            hash_embed_dim: 256,
        }
    }
}
