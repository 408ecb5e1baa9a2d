//! Sentiment classification and reporting for extracted entries.
//!
//! Texts are classified by a [`Classifier`] (in-process lexicon or a TEI
//! sequence-classification server), then augmented with the nearest
//! knowledge-base sentences found through an [`Embedder`]. Augmentation only
//! adjusts confidence and attaches context; it never changes a label.
//! [`Analyzer`] wires the pieces together and produces an [`AnalysisReport`].

pub mod augment;
pub mod classifier;
pub mod context;
pub mod embeddings;
pub mod error;
pub mod explain;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod types;
pub mod word_freq;

pub use augment::augment_results;
pub use classifier::{
    classify_texts, Classifier, ConfiguredClassifier, LexiconClassifier, TeiClassifier,
};
pub use context::{ContextIndex, ContextMatch};
pub use embeddings::{ConfiguredEmbedder, Embedder, HashingEmbedder, TeiEmbedder};
pub use error::SentimentError;
pub use explain::{explain, explain_results};
pub use pipeline::{Analyzer, AnalyzerSettings, TextAnalysis};
pub use report::{AnalysisReport, LabelDistribution, SentimentDistribution, NO_TEXT_COLUMNS};
pub use scorer::{classify_score, lexicon_score};
pub use types::{
    AugmentedResult, Classification, Explanation, SentimentLabel, SentimentResult,
    DEFAULT_CONFIDENCE,
};
pub use word_freq::{WordCount, WordFrequencies};
