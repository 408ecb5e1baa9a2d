//! Keyword-based explanations for predicted labels.

use crate::types::{AugmentedResult, Explanation, SentimentLabel};

const POSITIVE_KEYWORDS: &[&str] = &[
    "love",
    "amazing",
    "excellent",
    "great",
    "wonderful",
    "fantastic",
    "awesome",
    "perfect",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "hate",
    "terrible",
    "awful",
    "bad",
    "horrible",
    "disappointed",
    "worst",
    "disgusting",
];

/// Keywords are matched as substrings of the lower-cased text, so `lovely`
/// counts as `love`.
fn found_keywords(text_lower: &str, keywords: &[&'static str]) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|kw| text_lower.contains(*kw))
        .collect()
}

/// Explain one prediction.
#[must_use]
pub fn explain(text: &str, label: SentimentLabel) -> String {
    let lower = text.to_lowercase();
    let positive = found_keywords(&lower, POSITIVE_KEYWORDS);
    let negative = found_keywords(&lower, NEGATIVE_KEYWORDS);

    match label {
        SentimentLabel::Positive if !positive.is_empty() => {
            format!("Keywords '{}' indicate positive sentiment", positive.join(", "))
        }
        SentimentLabel::Negative if !negative.is_empty() => {
            format!("Keywords '{}' indicate negative sentiment", negative.join(", "))
        }
        SentimentLabel::Neutral => "Neutral language with no strong emotional indicators".to_string(),
        other => format!(
            "Overall tone and context suggest {} sentiment",
            other.as_lowercase()
        ),
    }
}

/// Explain every augmented result, in order.
#[must_use]
pub fn explain_results(results: &[AugmentedResult]) -> Vec<Explanation> {
    results
        .iter()
        .map(|r| Explanation {
            text: r.text.clone(),
            explanation: explain(&r.text, r.label),
        })
        .collect()
}
