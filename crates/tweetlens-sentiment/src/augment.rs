//! Knowledge-base augmentation of baseline classifications.

use crate::context::ContextIndex;
use crate::embeddings::Embedder;
use crate::error::SentimentError;
use crate::types::{AugmentedResult, SentimentResult};

/// Attach the `top_k` nearest knowledge-base sentences to each baseline result
/// and raise its confidence by `boost`, capped at 1.0.
///
/// Labels are never changed. Blank texts, baseline fallbacks and texts whose
/// embedding or search fails get [`AugmentedResult::fallback`].
pub async fn augment_results<E: Embedder>(
    embedder: &E,
    index: &ContextIndex,
    baseline: &[SentimentResult],
    top_k: usize,
    boost: f32,
) -> Vec<AugmentedResult> {
    let mut results = Vec::with_capacity(baseline.len());

    for (position, base) in baseline.iter().enumerate() {
        if base.fallback || base.text.trim().is_empty() {
            results.push(AugmentedResult::fallback(&base.text));
            continue;
        }

        match nearest_context(embedder, index, &base.text, top_k).await {
            Ok(context) => results.push(AugmentedResult {
                text: base.text.clone(),
                label: base.label,
                confidence: (base.confidence + boost).min(1.0),
                context,
                fallback: false,
            }),
            Err(e) => {
                tracing::warn!(index = position, error = %e, "augmentation failed; using neutral default");
                results.push(AugmentedResult::fallback(&base.text));
            }
        }
    }

    tracing::info!(count = results.len(), top_k, "augmentation complete");
    results
}

async fn nearest_context<E: Embedder>(
    embedder: &E,
    index: &ContextIndex,
    text: &str,
    top_k: usize,
) -> Result<Vec<String>, SentimentError> {
    let mut vectors = embedder.embed(&[text.to_string()]).await?;
    let query = vectors
        .pop()
        .ok_or_else(|| SentimentError::Embedding("embedder returned no vector".to_string()))?;

    Ok(index
        .search(&query, top_k)?
        .into_iter()
        .map(|m| m.sentence)
        .collect())
}
