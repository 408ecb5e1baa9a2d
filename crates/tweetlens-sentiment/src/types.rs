use serde::{Deserialize, Serialize};

/// Confidence assigned when a text is not classified (blank input or a
/// classifier failure).
pub const DEFAULT_CONFIDENCE: f32 = 0.5;

/// Predicted sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_lowercase(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        };
        f.pad(name)
    }
}

/// Raw output of a [`crate::Classifier`] for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: SentimentLabel,
    /// In `[0.0, 1.0]`.
    pub confidence: f32,
}

/// Baseline classification of one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub text: String,
    #[serde(rename = "sentiment")]
    pub label: SentimentLabel,
    pub confidence: f32,
    /// `true` when the default neutral result was substituted.
    pub fallback: bool,
}

impl SentimentResult {
    /// The neutral default used for blank texts and classifier failures.
    #[must_use]
    pub fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            label: SentimentLabel::Neutral,
            confidence: DEFAULT_CONFIDENCE,
            fallback: true,
        }
    }
}

/// Classification after knowledge-base augmentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AugmentedResult {
    pub text: String,
    #[serde(rename = "sentiment")]
    pub label: SentimentLabel,
    pub confidence: f32,
    /// Nearest knowledge-base sentences, best match first.
    pub context: Vec<String>,
    pub fallback: bool,
}

impl AugmentedResult {
    #[must_use]
    pub fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            label: SentimentLabel::Neutral,
            confidence: DEFAULT_CONFIDENCE,
            context: Vec::new(),
            fallback: true,
        }
    }
}

/// Keyword-based explanation of one prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub text: String,
    pub explanation: String,
}
