//! End-to-end checks of the analysis pipeline without network access

use lexilens_api::{
    AnalysisReport, Analyzer, BooksTransport, CollectingSink, Config, CredentialSource,
    HttpResponse, Input, Notice, NoticeLevel, Pipeline, SearchError,
};
use lexilens_core::{EmotionLabel, EmotionThresholds, Lexicon};
use std::fs;
use std::sync::Arc;

const LEXICON: &str = "\
lovely\t2.8\t0.6\t[3, 3, 2, 3, 3, 3, 2, 3, 3, 3]
cruel\t-2.8\t0.6\t[-3, -3, -2, -3, -3, -3, -2, -3, -3, -3]
";

const PASSAGE: &str = "Emma Woodhouse, handsome, clever, and rich, seemed to unite some of \
the best blessings of existence. She had lived nearly twenty-one years in the world with very \
little to distress or vex her. Her mother had died too long ago for her to have more than an \
indistinct remembrance of her caresses.";

struct NotFound;

impl BooksTransport for NotFound {
    fn get(&self, _url: &str, _query: &[(&str, &str)]) -> Result<HttpResponse, SearchError> {
        Ok(HttpResponse {
            status: 404,
            body: String::new(),
        })
    }
}

struct Found;

impl BooksTransport for Found {
    fn get(&self, _url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, SearchError> {
        assert_eq!(query[0].0, "q");
        assert_eq!(query[1], ("key", "test-key"));
        Ok(HttpResponse {
            status: 200,
            body: r#"{"items": [
                {"volumeInfo": {"title": "Emma", "authors": ["Jane Austen"]}},
                {"volumeInfo": {"title": "Emma: Annotated"}},
                {"volumeInfo": {}},
                {"volumeInfo": {"title": "Dropped"}}
            ]}"#
            .to_string(),
        })
    }
}

fn lexicon() -> Arc<Lexicon> {
    Arc::new(Lexicon::parse(LEXICON).unwrap())
}

fn keyed_config() -> Config {
    Config::builder()
        .credential_source(CredentialSource::input("test-key"))
        .build()
        .unwrap()
}

#[test]
fn test_books_not_found_reports_error_and_continues() {
    let analyzer = Analyzer::with_components(keyed_config(), lexicon(), Box::new(NotFound)).unwrap();
    let mut pipeline = Pipeline::new(analyzer, CollectingSink::default());

    let report = pipeline.run(PASSAGE).unwrap().unwrap();
    assert!(report.books.is_empty());
    assert_eq!(report.notices, vec![Notice::error("Error: 404")]);
    assert!(!report.summary.is_empty());

    let sink = pipeline.into_sink();
    assert_eq!(sink.reports.len(), 1);
    assert_eq!(sink.notices.len(), 1);
}

#[test]
fn test_three_candidates_with_placeholders() {
    let analyzer = Analyzer::with_components(keyed_config(), lexicon(), Box::new(Found)).unwrap();
    let report = analyzer.analyze(PASSAGE).unwrap();

    let titles: Vec<&str> = report.books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Emma", "Emma: Annotated", "No title found"]);
    assert_eq!(report.books[1].authors, vec!["No authors found"]);
}

#[test]
fn test_summary_length_follows_config() {
    for n in 1..=3 {
        let config = Config::builder()
            .search_books(false)
            .summary_sentences(n)
            .build()
            .unwrap();
        let analyzer = Analyzer::with_components(config, lexicon(), Box::new(NotFound)).unwrap();
        let report = analyzer.analyze(PASSAGE).unwrap();

        assert_eq!(report.summary_sentences, n);
        assert!(report.summary.matches(". ").count() < n);
    }
}

#[test]
fn test_summary_never_exceeds_sentence_count_of_passage() {
    let config = Config::builder()
        .search_books(false)
        .summary_sentences(5)
        .build()
        .unwrap();
    let analyzer = Analyzer::with_components(config, lexicon(), Box::new(NotFound)).unwrap();
    let report = analyzer
        .analyze("A cruel wind blew. The house stood alone.")
        .unwrap();

    assert_eq!(report.summary, "A cruel wind blew. The house stood alone.");
    assert_eq!(report.emotion, EmotionLabel::Sadness);
}

#[test]
fn test_lenient_thresholds_change_nothing_for_clear_sentiment() {
    let config = Config::builder()
        .search_books(false)
        .emotion_thresholds(EmotionThresholds::lenient())
        .build()
        .unwrap();
    let analyzer = Analyzer::with_components(config, lexicon(), Box::new(NotFound)).unwrap();
    let report = analyzer.analyze("What a lovely morning.").unwrap();
    assert_eq!(report.emotion, EmotionLabel::Joy);
}

#[test]
fn test_credential_file_missing_warns() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::builder()
        .credential_source(CredentialSource::file(dir.path().join("missing.toml")))
        .build()
        .unwrap();
    let analyzer = Analyzer::with_components(config, lexicon(), Box::new(Found)).unwrap();

    let report = analyzer.analyze(PASSAGE).unwrap();
    assert!(!report.books_searched);
    assert_eq!(report.notices.len(), 1);
    assert_eq!(report.notices[0].level, NoticeLevel::Warning);
    assert!(report.notices[0].message.contains("missing.toml"));
}

#[test]
fn test_with_config_uses_cached_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("data");
    fs::create_dir_all(&cache).unwrap();
    fs::write(cache.join("vader_lexicon.txt"), LEXICON).unwrap();

    let config = Config::builder()
        .cache_dir(&cache)
        .lexicon_url("http://127.0.0.1:9/never-fetched")
        .search_books(false)
        .build()
        .unwrap();
    let analyzer = Analyzer::with_config(config).unwrap();

    let report = analyzer.analyze("Such a lovely garden.").unwrap();
    assert!(report.sentiment.compound > 0.0);
}

#[test]
fn test_run_input_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("passage.txt");
    fs::write(&path, PASSAGE).unwrap();

    let config = Config::builder().search_books(false).build().unwrap();
    let analyzer = Analyzer::with_components(config, lexicon(), Box::new(NotFound)).unwrap();

    let mut emotions = Vec::new();
    let mut pipeline = Pipeline::new(analyzer, |report: &AnalysisReport| {
        emotions.push(report.emotion)
    });
    assert!(pipeline.run_input(Input::from_file(&path)).unwrap().is_some());
    drop(pipeline);
    assert_eq!(emotions.len(), 1);
}

#[test]
fn test_report_serializes_to_json() {
    let config = Config::builder().search_books(false).build().unwrap();
    let analyzer = Analyzer::with_components(config, lexicon(), Box::new(NotFound)).unwrap();
    let report = analyzer.analyze("What a lovely morning.").unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.to_json(true).unwrap()).unwrap();
    assert_eq!(json["emotion"], "joy");
    assert_eq!(json["books_searched"], false);
    assert_eq!(json["summary"], "What a lovely morning.");
}
