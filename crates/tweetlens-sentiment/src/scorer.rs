//! Word-weight lexicon scorer for short social-media style statements.

use crate::types::{Classification, SentimentLabel};

/// Word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("love", 0.5),
    ("loved", 0.5),
    ("loving", 0.4),
    ("amazing", 0.5),
    ("excellent", 0.5),
    ("great", 0.4),
    ("wonderful", 0.5),
    ("fantastic", 0.5),
    ("awesome", 0.5),
    ("perfect", 0.5),
    ("perfectly", 0.4),
    ("best", 0.5),
    ("good", 0.3),
    ("nice", 0.3),
    ("happy", 0.4),
    ("fun", 0.3),
    ("recommend", 0.4),
    ("helpful", 0.3),
    ("fast", 0.2),
    ("early", 0.2),
    ("easy", 0.3),
    ("smooth", 0.3),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("impressed", 0.4),
    ("underrated", 0.3),
    ("shoutout", 0.3),
    ("thanks", 0.3),
    ("efficiently", 0.3),
    ("quickly", 0.2),
    ("win", 0.4),
    // Negative signals
    ("hate", -0.6),
    ("hated", -0.6),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("horrible", -0.6),
    ("disgusting", -0.6),
    ("worst", -0.6),
    ("bad", -0.4),
    ("poor", -0.5),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("buggy", -0.4),
    ("broken", -0.5),
    ("slow", -0.3),
    ("late", -0.3),
    ("expensive", -0.3),
    ("overpriced", -0.4),
    ("scam", -0.7),
    ("refund", -0.3),
    ("problem", -0.3),
    ("issue", -0.2),
    ("failed", -0.4),
    ("failure", -0.4),
    ("annoying", -0.4),
    ("useless", -0.5),
    ("rude", -0.5),
    ("never", -0.1),
];

/// Words that flip the weight of the next lexicon word.
const NEGATORS: &[&str] = &[
    "not", "no", "isn't", "wasn't", "aren't", "don't", "doesn't", "didn't", "can't", "won't",
    "hardly",
];

/// How many following tokens a negator can reach.
const NEGATION_WINDOW: u8 = 3;

/// Scores with magnitude below this are neutral.
pub(crate) const NEUTRAL_BAND: f32 = 0.1;

fn weight_of(word: &str) -> Option<f32> {
    LEXICON
        .iter()
        .find(|&&(lex_word, _)| lex_word == word)
        .map(|&(_, weight)| weight)
}

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps the
/// result to `[-1.0, 1.0]`. A negator (`not`, `don't`, ...) flips the sign of
/// the next lexicon word within three tokens. Returns `0.0` for empty or
/// unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    let mut negation: u8 = 0;

    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();

        if NEGATORS.contains(&w.as_str()) {
            negation = NEGATION_WINDOW;
            continue;
        }

        if let Some(weight) = weight_of(&w) {
            score += if negation > 0 { -weight } else { weight };
            negation = 0;
        } else {
            negation = negation.saturating_sub(1);
        }
    }

    score.clamp(-1.0, 1.0)
}

/// Map a lexicon score to a label and confidence.
///
/// Polar labels get `0.5 + |score| / 2`; neutral scores get a confidence in
/// `[0.5, 0.75]` that is highest at exactly zero.
#[must_use]
pub fn classify_score(score: f32) -> Classification {
    let magnitude = score.abs();
    if magnitude < NEUTRAL_BAND {
        return Classification {
            label: SentimentLabel::Neutral,
            confidence: 0.5 + 0.25 * (1.0 - magnitude / NEUTRAL_BAND),
        };
    }

    let label = if score > 0.0 {
        SentimentLabel::Positive
    } else {
        SentimentLabel::Negative
    };
    Classification {
        label,
        confidence: (0.5 + magnitude / 2.0).min(1.0),
    }
}
