//! End-to-end analysis of files with the offline lexicon classifier and
//! hashing embedder.

use std::io::Write;
use std::path::{Path, PathBuf};

use tweetlens_core::{AppConfig, KnowledgeBase};
use tweetlens_sentiment::{
    Analyzer, AnalyzerSettings, HashingEmbedder, LexiconClassifier, SentimentError,
    SentimentLabel,
};

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

fn write_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    let body: String = paragraphs
        .iter()
        .map(|p| format!(r#"<w:p><w:r><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let path = dir.join(name);
    let file = std::fs::File::create(&path).expect("create docx");
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("word/document.xml", zip::write::FileOptions::default())
        .expect("start part");
    zip.write_all(xml.as_bytes()).expect("write part");
    zip.finish().expect("finish docx");
    path
}

async fn offline_analyzer(settings: AnalyzerSettings) -> Analyzer<LexiconClassifier, HashingEmbedder> {
    Analyzer::new(
        LexiconClassifier,
        HashingEmbedder::new(256).unwrap(),
        &KnowledgeBase::default(),
        settings,
    )
    .await
    .expect("analyzer builds")
}

const REVIEWS_CSV: &str = "\
text,rating,category
\"I love this product! Amazing quality.\",5,electronics
\"Terrible service, very disappointed.\",1,service
\"It's okay, nothing special.\",3,general
\"Excellent customer support team!\",5,service
\"Poor quality for the price.\",2,electronics
";

#[tokio::test]
async fn csv_reviews_produce_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "reviews.csv", REVIEWS_CSV);

    let report = offline_analyzer(AnalyzerSettings::default())
        .await
        .analyze_file(&path)
        .await
        .expect("analysis succeeds");

    assert_eq!(report.rows, 5);
    assert_eq!(report.columns, 3);
    assert_eq!(report.missing_values, 0);
    assert_eq!(report.preview.len(), 5);
    assert!(report.extraction.is_none());
    assert_eq!(report.text_columns, ["text"]);
    assert_eq!(report.analyzed_column.as_deref(), Some("text"));
    assert!(report.message.is_none());

    let labels: Vec<_> = report.augmented.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
            SentimentLabel::Positive,
            SentimentLabel::Negative,
        ]
    );
    assert!(report.augmented.iter().all(|r| r.context.len() == 2));
    assert!((report.distribution.baseline.positive - 40.0).abs() < 1e-9);
    assert!((report.distribution.augmented.neutral - 20.0).abs() < 1e-9);
    assert_eq!(
        report.explanations[0].explanation,
        "Keywords 'love, amazing' indicate positive sentiment"
    );
    assert!(report
        .word_frequencies
        .negative
        .iter()
        .any(|w| w.text == "disappointed"));
}

#[tokio::test]
async fn docx_numbered_entries_are_analyzed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(
        dir.path(),
        "tweets.docx",
        &[
            "Trendora mentions, week 12",
            "1. Trendora honestly makes shopping feel fun again.",
            "Whoever designed the app deserves a raise.",
            "",
            "2. Trendora has potential, but the checkout process is way too buggy.",
            "3. Curious to see how people react (new collection)",
        ],
    );

    let report = offline_analyzer(AnalyzerSettings::default())
        .await
        .analyze_file(&path)
        .await
        .expect("analysis succeeds");

    let info = report.extraction.as_ref().expect("numbered entries found");
    assert_eq!(info.total_entries, 3);
    assert_eq!(
        info.entries.iter().map(|e| e.ordinal).collect::<Vec<_>>(),
        [1, 2, 3]
    );

    assert_eq!(report.rows, 3);
    assert_eq!(report.columns, 1);
    assert_eq!(report.analyzed_column.as_deref(), Some("text"));

    let texts: Vec<&str> = report.baseline.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "Trendora honestly makes shopping feel fun again. Whoever designed the app deserves a raise.",
            "Trendora has potential, but the checkout process is way too buggy.",
            "Curious to see how people react new collection",
        ]
    );

    let labels: Vec<_> = report.augmented.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ]
    );

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["extraction"]["total_entries"], 3);
    assert_eq!(value["extraction"]["entries"][1]["tweet_number"], 2);
}

#[tokio::test]
async fn max_texts_limits_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "reviews.csv", REVIEWS_CSV);

    let settings = AnalyzerSettings {
        max_texts: 2,
        ..AnalyzerSettings::default()
    };
    let report = offline_analyzer(settings)
        .await
        .analyze_file(&path)
        .await
        .unwrap();

    assert_eq!(report.rows, 5);
    assert_eq!(report.baseline.len(), 2);
    assert_eq!(report.augmented.len(), 2);
}

#[tokio::test]
async fn table_without_text_column_reports_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "numbers.csv", "a,b\n1,2\n3,4\n");

    let report = offline_analyzer(AnalyzerSettings::default())
        .await
        .analyze_file(&path)
        .await
        .unwrap();

    assert!(report.text_columns.is_empty());
    assert_eq!(report.message.as_deref(), Some("No text columns detected"));
    assert!(report.baseline.is_empty());
    assert!(report.analyzed_column.is_none());
}

#[tokio::test]
async fn json_string_list_is_analyzed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "tweets.json",
        r#"["Trendora makes shopping feel fun again!", "Checkout is way too buggy, what a terrible update."]"#,
    );

    let report = offline_analyzer(AnalyzerSettings::default())
        .await
        .analyze_file(&path)
        .await
        .unwrap();

    assert_eq!(report.augmented[0].label, SentimentLabel::Positive);
    assert_eq!(report.augmented[1].label, SentimentLabel::Negative);
}

#[tokio::test]
async fn unsupported_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "notes.txt", "1. hello");

    let err = offline_analyzer(AnalyzerSettings::default())
        .await
        .analyze_file(&path)
        .await
        .unwrap_err();
    assert!(matches!(err, SentimentError::Extract(_)), "got {err:?}");
}

#[tokio::test]
async fn configured_analyzer_uses_knowledge_base_file() {
    let dir = tempfile::tempdir().unwrap();
    let kb_path = write_file(
        dir.path(),
        "kb.yaml",
        "sentences:\n  - Shipping delays frustrate online shoppers\n  - Friendly support builds loyalty\n",
    );
    let csv_path = write_file(
        dir.path(),
        "tweets.csv",
        "text\n\"Friendly support team sorted my order quickly\"\n",
    );

    let config = AppConfig {
        knowledge_base_path: Some(kb_path),
        ..AppConfig::default()
    };
    let analyzer = Analyzer::from_config(&config).await.expect("analyzer builds");
    let report = analyzer.analyze_file(&csv_path).await.unwrap();

    let context = &report.augmented[0].context;
    assert_eq!(context.len(), 2);
    assert_eq!(context[0], "Friendly support builds loyalty");
}

#[tokio::test]
async fn report_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "reviews.csv", REVIEWS_CSV);

    let report = offline_analyzer(AnalyzerSettings::default())
        .await
        .analyze_file(&path)
        .await
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["augmented"][0]["sentiment"], "POSITIVE");
    assert!(value.get("extraction").is_none());
    assert!(value["word_frequencies"]["positive"].is_array());
}
