//! `analyze` command: run the sentiment pipeline over one file.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use tweetlens_core::AppConfig;
use tweetlens_sentiment::{AnalysisReport, Analyzer, LabelDistribution, WordCount};

/// Words shown per sentiment in the summary.
const SUMMARY_WORDS: usize = 5;
/// Characters of each text shown in the summary.
const SUMMARY_TEXT_CHARS: usize = 60;

/// Analyze `path` and print either a summary or the JSON report.
///
/// # Errors
///
/// Returns an error if the analyzer cannot be built, the file cannot be
/// loaded, or the report cannot be serialized.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    path: &Path,
    json: bool,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(limit) = limit {
        config.max_texts = limit;
    }

    let analyzer = Analyzer::from_config(&config)
        .await
        .map_err(|e| anyhow::anyhow!("failed to build analyzer: {e}"))?;

    let report = analyzer
        .analyze_file(path)
        .await
        .with_context(|| format!("failed to analyze {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_summary(&report));
    }
    Ok(())
}

fn distribution_row(name: &str, d: &LabelDistribution) -> String {
    format!(
        "{name:<11}{:>9.1}{:>10.1}{:>9.1}\n",
        d.positive, d.negative, d.neutral
    )
}

fn word_list(words: &[WordCount]) -> String {
    if words.is_empty() {
        return "\u{2014}".to_string();
    }
    words
        .iter()
        .take(SUMMARY_WORDS)
        .map(|w| format!("{} ({})", w.text, w.value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{head}...")
}

/// Human-readable summary of a report.
pub(crate) fn render_summary(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "source: {}", report.source);
    let _ = writeln!(
        out,
        "rows: {}  columns: {}  missing values: {}",
        report.rows, report.columns, report.missing_values
    );
    if let Some(info) = &report.extraction {
        let _ = writeln!(out, "extracted entries: {}", info.total_entries);
    }

    let Some(column) = &report.analyzed_column else {
        let _ = writeln!(
            out,
            "{}",
            report.message.as_deref().unwrap_or("nothing analyzed")
        );
        return out;
    };

    let _ = writeln!(out, "text columns: {}", report.text_columns.join(", "));
    let _ = writeln!(out, "analyzed column: {column} ({} texts)", report.baseline.len());
    out.push('\n');

    let _ = writeln!(out, "{:<11}{:>9}{:>10}{:>9}", "%", "POSITIVE", "NEGATIVE", "NEUTRAL");
    out.push_str(&distribution_row("baseline", &report.distribution.baseline));
    out.push_str(&distribution_row("augmented", &report.distribution.augmented));
    out.push('\n');

    let freq = &report.word_frequencies;
    let _ = writeln!(out, "top words");
    let _ = writeln!(out, "  positive: {}", word_list(&freq.positive));
    let _ = writeln!(out, "  negative: {}", word_list(&freq.negative));
    let _ = writeln!(out, "  neutral:  {}", word_list(&freq.neutral));
    out.push('\n');

    for (i, (result, explanation)) in report
        .augmented
        .iter()
        .zip(&report.explanations)
        .enumerate()
    {
        let _ = writeln!(
            out,
            "{:>3}. {:<9}{:.2}  {}",
            i + 1,
            result.label,
            result.confidence,
            truncate(&result.text, SUMMARY_TEXT_CHARS)
        );
        let _ = writeln!(out, "     {}", explanation.explanation);
    }

    out
}
