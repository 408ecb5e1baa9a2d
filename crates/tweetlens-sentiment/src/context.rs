//! In-memory nearest-neighbour index over knowledge-base sentences.

use serde::Serialize;

use crate::embeddings::Embedder;
use crate::error::SentimentError;

/// A knowledge-base sentence and its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextMatch {
    pub sentence: String,
    pub score: f32,
}

/// Embedded reference sentences, built once and then read-only.
#[derive(Debug, Clone)]
pub struct ContextIndex {
    sentences: Vec<String>,
    vectors: Vec<Vec<f32>>,
    dim: usize,
}

impl ContextIndex {
    /// Embed `sentences` and build the index.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Embedding`] if `sentences` is empty or the
    /// embedder returns the wrong number of vectors or vectors of differing
    /// length. Embedder errors are propagated.
    pub async fn build<E: Embedder>(
        embedder: &E,
        sentences: &[String],
    ) -> Result<Self, SentimentError> {
        if sentences.is_empty() {
            return Err(SentimentError::Embedding(
                "cannot build a context index from zero sentences".to_string(),
            ));
        }

        let vectors = embedder.embed(sentences).await?;
        if vectors.len() != sentences.len() {
            return Err(SentimentError::Embedding(format!(
                "embedder returned {} vectors for {} sentences",
                vectors.len(),
                sentences.len()
            )));
        }

        let dim = vectors[0].len();
        if dim == 0 || vectors.iter().any(|v| v.len() != dim) {
            return Err(SentimentError::Embedding(
                "knowledge-base vectors must share one non-zero dimension".to_string(),
            ));
        }

        tracing::info!(sentences = sentences.len(), dim, "built context index");
        Ok(Self {
            sentences: sentences.to_vec(),
            vectors,
            dim,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The `k` sentences with the highest inner product against `query`,
    /// best first. Equal scores keep knowledge-base order.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Embedding`] if `query` has the wrong dimension.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<ContextMatch>, SentimentError> {
        if query.len() != self.dim {
            return Err(SentimentError::Embedding(format!(
                "query has dimension {}, index has {}",
                query.len(),
                self.dim
            )));
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .map(|v| v.iter().zip(query).map(|(a, b)| a * b).sum::<f32>())
            .enumerate()
            .collect();
        // stable sort keeps index order on ties
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(i, score)| ContextMatch {
                sentence: self.sentences[i].clone(),
                score,
            })
            .collect())
    }
}
