//! Shared configuration for the tweetlens workspace.
//!
//! Holds the environment-driven [`AppConfig`] and the knowledge base of
//! reference sentences used by the contextual augmentation pass.

pub mod app_config;
pub mod config;
pub mod knowledge_base;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use knowledge_base::{load_knowledge_base, KnowledgeBase, DEFAULT_KNOWLEDGE_BASE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read knowledge base file {path}: {source}")]
    KnowledgeBaseIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse knowledge base file: {0}")]
    KnowledgeBaseParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
