//! Analysis pipeline orchestration.

use std::path::Path;

use tweetlens_core::{load_knowledge_base, AppConfig, KnowledgeBase};
use tweetlens_extract::{build_dataset, load_document};

use crate::augment::augment_results;
use crate::classifier::{classify_texts, Classifier, ConfiguredClassifier};
use crate::context::ContextIndex;
use crate::embeddings::{ConfiguredEmbedder, Embedder};
use crate::error::SentimentError;
use crate::explain::explain_results;
use crate::report::{AnalysisReport, SentimentDistribution, NO_TEXT_COLUMNS};
use crate::types::{AugmentedResult, Explanation, SentimentResult};
use crate::word_freq::WordFrequencies;

/// Tunables for one [`Analyzer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerSettings {
    /// Texts analyzed per file, taken from the top of the text column.
    pub max_texts: usize,
    pub context_top_k: usize,
    pub confidence_boost: f32,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            max_texts: 100,
            context_top_k: 2,
            confidence_boost: 0.05,
        }
    }
}

impl From<&AppConfig> for AnalyzerSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_texts: config.max_texts,
            context_top_k: config.context_top_k,
            confidence_boost: config.confidence_boost,
        }
    }
}

/// Results of analyzing a list of texts.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnalysis {
    pub baseline: Vec<SentimentResult>,
    pub augmented: Vec<AugmentedResult>,
    pub explanations: Vec<Explanation>,
    pub distribution: SentimentDistribution,
    pub word_frequencies: WordFrequencies,
}

/// Classifier, embedder and knowledge-base index, constructed once and
/// read-only afterwards.
#[derive(Debug)]
pub struct Analyzer<C, E> {
    classifier: C,
    embedder: E,
    index: ContextIndex,
    settings: AnalyzerSettings,
}

impl Analyzer<ConfiguredClassifier, ConfiguredEmbedder> {
    /// Build an analyzer from application configuration.
    ///
    /// Uses the knowledge base file when one is configured, otherwise the
    /// built-in sentences.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if a client cannot be built, the knowledge
    /// base cannot be loaded, or embedding the knowledge base fails.
    pub async fn from_config(config: &AppConfig) -> Result<Self, SentimentError> {
        let classifier = ConfiguredClassifier::from_config(config)?;
        let embedder = ConfiguredEmbedder::from_config(config)?;
        let knowledge_base = match &config.knowledge_base_path {
            Some(path) => load_knowledge_base(path)?,
            None => KnowledgeBase::default(),
        };

        Self::new(classifier, embedder, &knowledge_base, AnalyzerSettings::from(config)).await
    }
}

impl<C: Classifier, E: Embedder> Analyzer<C, E> {
    /// Embed the knowledge base and assemble the analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if the knowledge base cannot be embedded.
    pub async fn new(
        classifier: C,
        embedder: E,
        knowledge_base: &KnowledgeBase,
        settings: AnalyzerSettings,
    ) -> Result<Self, SentimentError> {
        let index = ContextIndex::build(&embedder, &knowledge_base.sentences).await?;
        Ok(Self {
            classifier,
            embedder,
            index,
            settings,
        })
    }

    #[must_use]
    pub fn settings(&self) -> AnalyzerSettings {
        self.settings
    }

    /// Classify, augment, explain and summarize `texts`, one at a time.
    ///
    /// Never fails: per-text errors become neutral defaults.
    pub async fn analyze_texts(&self, texts: &[String]) -> TextAnalysis {
        let baseline = classify_texts(&self.classifier, texts).await;
        let augmented = augment_results(
            &self.embedder,
            &self.index,
            &baseline,
            self.settings.context_top_k,
            self.settings.confidence_boost,
        )
        .await;
        let explanations = explain_results(&augmented);
        let word_frequencies = WordFrequencies::from_results(&augmented);
        let distribution = SentimentDistribution::from_results(&baseline, &augmented);

        TextAnalysis {
            baseline,
            augmented,
            explanations,
            distribution,
            word_frequencies,
        }
    }

    /// Load `path`, pick its first text column and analyze up to
    /// `max_texts` of its values.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Extract`] if the file cannot be loaded.
    pub async fn analyze_file(&self, path: &Path) -> Result<AnalysisReport, SentimentError> {
        tracing::info!(path = %path.display(), "starting analysis");

        let prepared = build_dataset(load_document(path)?);
        let dataset = &prepared.dataset;
        tracing::info!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "parsed dataset"
        );
        if let Some(info) = &prepared.extraction {
            tracing::info!(entries = info.total_entries, "numbered entry extraction succeeded");
        }

        let text_columns = dataset.detect_text_columns();
        tracing::info!(?text_columns, "detected text columns");

        let mut report = AnalysisReport {
            source: path.display().to_string(),
            generated_at: chrono::Utc::now(),
            rows: dataset.row_count(),
            columns: dataset.column_count(),
            missing_values: dataset.missing_values(),
            preview: dataset.preview(tweetlens_extract::dataset::PREVIEW_ROWS),
            extraction: prepared.extraction.clone(),
            text_columns: text_columns.clone(),
            analyzed_column: None,
            message: None,
            baseline: Vec::new(),
            augmented: Vec::new(),
            explanations: Vec::new(),
            distribution: SentimentDistribution::default(),
            word_frequencies: WordFrequencies::default(),
        };

        let Some(column) = text_columns.into_iter().next() else {
            tracing::warn!(path = %path.display(), "no text columns detected");
            report.message = Some(NO_TEXT_COLUMNS.to_string());
            return Ok(report);
        };

        let texts = dataset
            .column_texts(&column, self.settings.max_texts)
            .unwrap_or_default();
        let analysis = self.analyze_texts(&texts).await;

        report.analyzed_column = Some(column);
        report.baseline = analysis.baseline;
        report.augmented = analysis.augmented;
        report.explanations = analysis.explanations;
        report.distribution = analysis.distribution;
        report.word_frequencies = analysis.word_frequencies;

        tracing::info!(texts = texts.len(), "analysis complete");
        Ok(report)
    }
}
