//! Sentiment classifiers and the fail-soft batch classification pass.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tweetlens_core::AppConfig;

use crate::error::SentimentError;
use crate::scorer::{classify_score, lexicon_score};
use crate::types::{Classification, SentimentLabel, SentimentResult};

/// Classifies a single text.
pub trait Classifier {
    fn classify(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Classification, SentimentError>> + Send;
}

/// In-process classifier backed by [`lexicon_score`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl Classifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, SentimentError> {
        Ok(classify_score(lexicon_score(text)))
    }
}

/// Client for a TEI server hosting a sequence-classification model.
#[derive(Debug, Clone)]
pub struct TeiClassifier {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    score: f32,
    label: String,
}

impl TeiClassifier {
    /// Create a client for the TEI server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: format!("{}/predict", base_url.trim_end_matches('/')),
        })
    }

    async fn predict(&self, text: &str) -> Result<Classification, SentimentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&PredictRequest { inputs: text })
            .send()
            .await
            .map_err(|e| SentimentError::Tei(format!("TEI request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SentimentError::Tei(format!(
                "TEI returned status {}",
                response.status()
            )));
        }

        let predictions: Vec<Prediction> = response
            .json()
            .await
            .map_err(|e| SentimentError::Tei(format!("TEI response parse error: {e}")))?;

        let best = predictions
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| SentimentError::Classifier("TEI returned no predictions".to_string()))?;

        Ok(Classification {
            label: parse_model_label(&best.label)?,
            confidence: best.score.clamp(0.0, 1.0),
        })
    }
}

impl Classifier for TeiClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, SentimentError> {
        self.predict(text).await
    }
}

/// Map a model label to a [`SentimentLabel`].
///
/// Accepts plain names (`positive`, `NEG`, ...) and the numbered
/// `LABEL_0/1/2` convention, read as negative/neutral/positive.
fn parse_model_label(raw: &str) -> Result<SentimentLabel, SentimentError> {
    match raw.trim().to_lowercase().as_str() {
        "positive" | "pos" | "label_2" => Ok(SentimentLabel::Positive),
        "negative" | "neg" | "label_0" => Ok(SentimentLabel::Negative),
        "neutral" | "neu" | "label_1" => Ok(SentimentLabel::Neutral),
        other => Err(SentimentError::Classifier(format!(
            "unrecognized model label: {other}"
        ))),
    }
}

/// Classifier selected from [`AppConfig`]: TEI when a classify URL is set,
/// otherwise the lexicon.
#[derive(Debug, Clone)]
pub enum ConfiguredClassifier {
    Tei(TeiClassifier),
    Lexicon(LexiconClassifier),
}

impl ConfiguredClassifier {
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the TEI client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SentimentError> {
        match config.tei_classify_url.as_deref() {
            Some(url) => {
                tracing::info!("using TEI classifier");
                let timeout = Duration::from_secs(config.request_timeout_secs);
                Ok(Self::Tei(TeiClassifier::with_base_url(url, timeout)?))
            }
            None => {
                tracing::info!("using lexicon classifier");
                Ok(Self::Lexicon(LexiconClassifier))
            }
        }
    }
}

impl Classifier for ConfiguredClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, SentimentError> {
        match self {
            Self::Tei(tei) => tei.classify(text).await,
            Self::Lexicon(lexicon) => lexicon.classify(text).await,
        }
    }
}

/// Classify each text independently, in order.
///
/// Blank texts are not sent to the classifier. Blank texts and texts whose
/// classification fails get [`SentimentResult::fallback`].
pub async fn classify_texts<C: Classifier>(classifier: &C, texts: &[String]) -> Vec<SentimentResult> {
    let mut results = Vec::with_capacity(texts.len());

    for (index, text) in texts.iter().enumerate() {
        if text.trim().is_empty() {
            results.push(SentimentResult::fallback(text));
            continue;
        }

        match classifier.classify(text).await {
            Ok(c) => results.push(SentimentResult {
                text: text.clone(),
                label: c.label,
                confidence: c.confidence.clamp(0.0, 1.0),
                fallback: false,
            }),
            Err(e) => {
                tracing::warn!(index, error = %e, "classification failed; using neutral default");
                results.push(SentimentResult::fallback(text));
            }
        }
    }

    tracing::info!(count = results.len(), "baseline classification complete");
    results
}
