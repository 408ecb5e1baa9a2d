//! Report types produced by the analyzer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tweetlens_extract::ExtractionInfo;

use crate::types::{AugmentedResult, Explanation, SentimentLabel, SentimentResult};
use crate::word_freq::WordFrequencies;

/// Message carried by reports of datasets without a text column.
pub const NO_TEXT_COLUMNS: &str = "No text columns detected";

/// Percentage of texts per label, rounded to one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LabelDistribution {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl LabelDistribution {
    /// Percentages over `total`. Zero `total` gives all zeros.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_labels<I>(labels: I, total: usize) -> Self
    where
        I: IntoIterator<Item = SentimentLabel>,
    {
        if total == 0 {
            return Self::default();
        }

        let (mut pos, mut neg, mut neu) = (0_usize, 0_usize, 0_usize);
        for label in labels {
            match label {
                SentimentLabel::Positive => pos += 1,
                SentimentLabel::Negative => neg += 1,
                SentimentLabel::Neutral => neu += 1,
            }
        }

        let percent = |count: usize| (count as f64 / total as f64 * 1000.0).round() / 10.0;
        Self {
            positive: percent(pos),
            negative: percent(neg),
            neutral: percent(neu),
        }
    }
}

/// Label distributions before and after augmentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentDistribution {
    pub baseline: LabelDistribution,
    pub augmented: LabelDistribution,
}

impl SentimentDistribution {
    #[must_use]
    pub fn from_results(baseline: &[SentimentResult], augmented: &[AugmentedResult]) -> Self {
        Self {
            baseline: LabelDistribution::from_labels(
                baseline.iter().map(|r| r.label),
                baseline.len(),
            ),
            augmented: LabelDistribution::from_labels(
                augmented.iter().map(|r| r.label),
                augmented.len(),
            ),
        }
    }
}

/// Full analysis of one input file.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub rows: usize,
    pub columns: usize,
    pub missing_values: usize,
    pub preview: Vec<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction: Option<ExtractionInfo>,
    pub text_columns: Vec<String>,
    pub analyzed_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub baseline: Vec<SentimentResult>,
    pub augmented: Vec<AugmentedResult>,
    pub explanations: Vec<Explanation>,
    pub distribution: SentimentDistribution,
    pub word_frequencies: WordFrequencies,
}
