use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TEI error: {0}")]
    Tei(String),

    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("embedding error: {0}")]
    Embedding(String),

    #[error("configuration error: {0}")]
    Config(#[from] tweetlens_core::ConfigError),

    #[error("document error: {0}")]
    Extract(#[from] tweetlens_extract::ExtractError),
}
