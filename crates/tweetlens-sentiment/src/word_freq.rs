//! Per-sentiment word frequency lists.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{AugmentedResult, SentimentLabel};

/// Maximum number of words kept per sentiment.
pub const TOP_WORDS: usize = 20;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub text: String,
    pub value: usize,
}

/// Top words for each label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordFrequencies {
    pub positive: Vec<WordCount>,
    pub negative: Vec<WordCount>,
    pub neutral: Vec<WordCount>,
}

impl WordFrequencies {
    /// Group non-blank texts by label and count their words.
    #[must_use]
    pub fn from_results(results: &[AugmentedResult]) -> Self {
        let texts_for = |label: SentimentLabel| -> Vec<&str> {
            results
                .iter()
                .filter(|r| r.label == label && !r.text.trim().is_empty())
                .map(|r| r.text.as_str())
                .collect()
        };

        Self {
            positive: top_words(&texts_for(SentimentLabel::Positive), TOP_WORDS),
            negative: top_words(&texts_for(SentimentLabel::Negative), TOP_WORDS),
            neutral: top_words(&texts_for(SentimentLabel::Neutral), TOP_WORDS),
        }
    }
}

/// Count lower-cased words across `texts`, skipping stop words and words of
/// two characters or fewer. Highest counts first; equal counts keep the
/// order of first appearance.
#[must_use]
pub fn top_words(texts: &[&str], limit: usize) -> Vec<WordCount> {
    let mut counts: Vec<WordCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for text in texts {
        let lower = text.to_lowercase();
        for word in WORD.find_iter(&lower).map(|m| m.as_str()) {
            if word.chars().count() <= 2 || STOP_WORDS.contains(&word) {
                continue;
            }
            match positions.get(word) {
                Some(&i) => counts[i].value += 1,
                None => {
                    positions.insert(word.to_string(), counts.len());
                    counts.push(WordCount {
                        text: word.to_string(),
                        value: 1,
                    });
                }
            }
        }
    }

    // stable: ties stay in first-appearance order
    counts.sort_by(|a, b| b.value.cmp(&a.value));
    counts.truncate(limit);
    counts
}
