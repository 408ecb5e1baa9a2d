//! Text embedding backends used for knowledge-base retrieval.

use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tweetlens_core::AppConfig;

use crate::error::SentimentError;

/// Maximum number of texts per /embed call.
const BATCH_SIZE: usize = 64;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid token regex"));

/// Turns texts into fixed-length vectors.
///
/// Implementations return one vector per input, in input order, and every
/// vector has the same dimension.
pub trait Embedder {
    fn embed(
        &self,
        texts: &[String],
    ) -> impl Future<Output = Result<Vec<Vec<f32>>, SentimentError>> + Send;
}

/// TEI (Text Embeddings Inference) HTTP client.
#[derive(Debug, Clone)]
pub struct TeiEmbedder {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [String],
}

impl TeiEmbedder {
    /// Create a client for the TEI server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: format!("{}/embed", base_url.trim_end_matches('/')),
        })
    }

    async fn embed_batched(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, SentimentError> {
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            let request = EmbedRequest { inputs: chunk };
            let response = self
                .client
                .post(&self.url)
                .json(&request)
                .send()
                .await
                .map_err(|e| SentimentError::Tei(format!("TEI request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(SentimentError::Tei(format!(
                    "TEI returned status {}",
                    response.status()
                )));
            }

            let embeddings: Vec<Vec<f32>> = response
                .json()
                .await
                .map_err(|e| SentimentError::Tei(format!("TEI response parse error: {e}")))?;

            if embeddings.len() != chunk.len() {
                return Err(SentimentError::Tei(format!(
                    "TEI returned {} embeddings for {} inputs",
                    embeddings.len(),
                    chunk.len()
                )));
            }

            all_embeddings.extend(embeddings);
        }

        tracing::debug!(count = all_embeddings.len(), "embedded texts via TEI");
        Ok(all_embeddings)
    }
}

impl Embedder for TeiEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, SentimentError> {
        self.embed_batched(texts).await
    }
}

/// Offline embedder that hashes lowercase word tokens into signed buckets.
///
/// Vectors are L2-normalized, so the inner product of two embeddings is their
/// cosine similarity. Texts without any word token map to the zero vector.
#[derive(Debug, Clone, Copy)]
pub struct HashingEmbedder {
    dim: usize,
}

impl HashingEmbedder {
    /// # Errors
    ///
    /// Returns [`SentimentError::Embedding`] when `dim` is zero.
    pub fn new(dim: usize) -> Result<Self, SentimentError> {
        if dim == 0 {
            return Err(SentimentError::Embedding(
                "hashing embedder dimension must be at least 1".to_string(),
            ));
        }
        Ok(Self { dim })
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dim];

        for token in TOKEN.find_iter(text) {
            let digest = Sha256::digest(token.as_str().to_lowercase().as_bytes());
            let mut bucket_bytes = [0_u8; 8];
            bucket_bytes.copy_from_slice(&digest[..8]);
            let bucket = (u64::from_le_bytes(bucket_bytes) % self.dim as u64) as usize;
            let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Embedder for HashingEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, SentimentError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}

/// Embedder selected from [`AppConfig`]: TEI when an embed URL is set,
/// otherwise the hashing embedder.
#[derive(Debug, Clone)]
pub enum ConfiguredEmbedder {
    Tei(TeiEmbedder),
    Hashing(HashingEmbedder),
}

impl ConfiguredEmbedder {
    /// # Errors
    ///
    /// Returns an error if the TEI client cannot be built or the hashing
    /// dimension is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, SentimentError> {
        match config.tei_embed_url.as_deref() {
            Some(url) => {
                tracing::info!("using TEI embedder");
                let timeout = Duration::from_secs(config.request_timeout_secs);
                Ok(Self::Tei(TeiEmbedder::with_base_url(url, timeout)?))
            }
            None => {
                tracing::info!(dim = config.hash_embed_dim, "using hashing embedder");
                Ok(Self::Hashing(HashingEmbedder::new(config.hash_embed_dim)?))
            }
        }
    }
}

impl Embedder for ConfiguredEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, SentimentError> {
        match self {
            Self::Tei(tei) => tei.embed(texts).await,
            Self::Hashing(hashing) => hashing.embed(texts).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            HashingEmbedder::new(0),
            Err(SentimentError::Embedding(_))
        ));
    }

    #[test]
    fn hashing_is_deterministic_and_case_insensitive() {
        let e = HashingEmbedder::new(64).unwrap();
        assert_eq!(e.embed_one("Great Service"), e.embed_one("great service"));
    }

    #[test]
    fn hashing_output_is_unit_length() {
        let e = HashingEmbedder::new(32).unwrap();
        let v = e.embed_one("delivery was fast and the support was friendly");
        assert_eq!(v.len(), 32);
        assert!((dot(&v, &v) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn text_without_tokens_is_zero_vector() {
        let e = HashingEmbedder::new(16).unwrap();
        assert!(e.embed_one("!!! ...").iter().all(|v| *v == 0.0));
    }

    #[test]
    fn overlapping_texts_score_higher() {
        let e = HashingEmbedder::new(256).unwrap();
        let query = e.embed_one("customer service was excellent");
        let close = e.embed_one("excellent customer service");
        let far = e.embed_one("the package arrived broken");
        assert!(dot(&query, &close) > dot(&query, &far));
    }

    #[tokio::test]
    async fn embed_preserves_order_and_count() {
        let e = HashingEmbedder::new(8).unwrap();
        let texts = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let vectors = e.embed(&texts).await.unwrap();
        assert_eq!(vectors.len(), 3);
        assert_eq!(vectors[1], e.embed_one("two"));
    }
}
