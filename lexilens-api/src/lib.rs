//! Passage analysis pipeline
//!
//! Wires the text algorithms of `lexilens-core` together with the parts that
//! touch the outside world: the books search service, the downloaded VADER
//! lexicon and the credential source. One [`Analyzer`] serves any number of
//! passages; a [`Pipeline`] pushes its results into a [`ReportSink`].
//!
//! ```no_run
//! use lexilens_api::{AnalysisReport, Analyzer, Config, CredentialSource, Pipeline};
//!
//! let config = Config::builder()
//!     .credential_source(CredentialSource::file(".lexilens/credentials.toml"))
//!     .summary_sentences(2)
//!     .build()?;
//!
//! let analyzer = Analyzer::with_config(config)?;
//! let mut pipeline = Pipeline::new(analyzer, |report: &AnalysisReport| {
//!     println!("Predominant emotion: {}", report.emotion);
//! });
//! pipeline.run("It is a truth universally acknowledged.")?;
//! # Ok::<(), lexilens_api::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod books;
pub mod config;
pub mod credentials;
pub mod dto;
pub mod error;
pub mod resources;
pub mod sink;

use error::Result;
use lexilens_core::{
    EmotionClassifier, Lexicon, LsaSummarizer, SentimentAnalyzer, Summarizer,
    WordCounter,
};
use std::sync::Arc;

// Re-export key types
pub use books::{BookSearchClient, BooksTransport, HttpResponse, ReqwestTransport};
pub use config::{Config, ConfigBuilder};
pub use credentials::CredentialSource;
pub use dto::{AnalysisReport, BookCandidate, Input, Notice, NoticeLevel};
pub use error::{ApiError, CredentialError, SearchError};
pub use resources::{ResourceFetcher, ResourceStore};
pub use sink::{CollectingSink, ReportSink};

/// Message raised for an empty passage
pub const EMPTY_PASSAGE_MESSAGE: &str = "Please provide the passage.";

/// Runs every analysis step on a passage
pub struct Analyzer {
    config: Config,
    counter: WordCounter,
    sentiment: SentimentAnalyzer,
    classifier: EmotionClassifier,
    summarizer: Box<dyn Summarizer>,
    books: BookSearchClient,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Analyzer with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Analyzer backed by the resource store and the network
    ///
    /// Downloads the lexicon into the cache directory on first use.
    pub fn with_config(config: Config) -> Result<Self> {
        let store = ResourceStore::new(&config.cache_dir, &config.lexicon_url);
        let downloaded = store.ensure()?;
        if !downloaded.is_empty() {
            log::info!("Fetched resources: {}", downloaded.join(", "));
        }

        let lexicon = Lexicon::load_shared(&store.lexicon_path())?;
        let transport = ReqwestTransport::new().map_err(|e| ApiError::Config(e.to_string()))?;
        Self::with_components(config, lexicon, Box::new(transport))
    }

    /// Analyzer over an already loaded lexicon and a given transport
    pub fn with_components(
        config: Config,
        lexicon: Arc<Lexicon>,
        transport: Box<dyn BooksTransport>,
    ) -> Result<Self> {
        let classifier = EmotionClassifier::with_thresholds(config.emotion_thresholds)?;
        let books = BookSearchClient::new(transport)
            .with_endpoint(config.books_endpoint.clone())
            .with_max_results(config.max_books);

        log::debug!("Lexicon holds {} entries", lexicon.len());
        Ok(Self {
            counter: WordCounter::new(),
            sentiment: SentimentAnalyzer::new(lexicon),
            classifier,
            summarizer: Box::new(LsaSummarizer::new()),
            books,
            config,
        })
    }

    /// Replace the summarizer
    pub fn with_summarizer(mut self, summarizer: Box<dyn Summarizer>) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyse a passage
    ///
    /// Fails with [`ApiError::EmptyPassage`] for empty or blank passages.
    /// Credential and search problems become notices in the report.
    pub fn analyze(&self, passage: &str) -> Result<AnalysisReport> {
        if passage.trim().is_empty() {
            return Err(ApiError::EmptyPassage);
        }

        let word_counts = self.counter.counts(passage);
        log::debug!(
            "Counted {} words ({} without stopwords)",
            word_counts.total,
            word_counts.without_stopwords
        );

        let sentiment = self.sentiment.polarity_scores(passage);
        let emotion = self.classifier.classify(&sentiment);
        log::debug!("Sentiment {sentiment:?} classified as {emotion}");

        let mut notices = Vec::new();
        let (books, books_searched) = self.find_books(passage, &mut notices);

        let summary = self
            .summarizer
            .summarize(passage, self.config.summary_sentences);

        Ok(AnalysisReport {
            word_counts,
            sentiment,
            emotion,
            books,
            books_searched,
            summary,
            summary_sentences: self.config.summary_sentences,
            notices,
        })
    }

    /// Analyse the passage behind an [`Input`]
    pub fn analyze_input(&self, input: Input) -> Result<AnalysisReport> {
        let passage = input.read_text()?;
        self.analyze(&passage)
    }

    fn find_books(&self, passage: &str, notices: &mut Vec<Notice>) -> (Vec<BookCandidate>, bool) {
        if !self.config.search_books {
            return (Vec::new(), false);
        }

        let key = match &self.config.credential_source {
            None => Err(CredentialError::NotConfigured),
            Some(source) => source.resolve(),
        };
        let key = match key {
            Ok(key) => key,
            Err(e) => {
                notices.push(Notice::warning(e.to_string()));
                return (Vec::new(), false);
            }
        };

        match self.books.search(passage, &key) {
            Ok(books) => (books, true),
            Err(e) => {
                notices.push(Notice::error(e.to_string()));
                (Vec::new(), true)
            }
        }
    }
}

/// An [`Analyzer`] feeding a [`ReportSink`]
#[derive(Debug)]
pub struct Pipeline<S: ReportSink> {
    analyzer: Analyzer,
    sink: S,
}

impl<S: ReportSink> Pipeline<S> {
    /// Create a pipeline
    pub fn new(analyzer: Analyzer, sink: S) -> Self {
        Self { analyzer, sink }
    }

    /// Analyse a passage and hand the outcome to the sink
    ///
    /// An empty passage produces a warning notice and `Ok(None)`; nothing is
    /// reported for it.
    pub fn run(&mut self, passage: &str) -> Result<Option<AnalysisReport>> {
        let report = match self.analyzer.analyze(passage) {
            Ok(report) => report,
            Err(ApiError::EmptyPassage) => {
                self.sink.notice(&Notice::warning(EMPTY_PASSAGE_MESSAGE))?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        for notice in &report.notices {
            self.sink.notice(notice)?;
        }
        self.sink.report(&report)?;
        Ok(Some(report))
    }

    /// Read an [`Input`] and run it
    pub fn run_input(&mut self, input: Input) -> Result<Option<AnalysisReport>> {
        let passage = input.read_text()?;
        self.run(&passage)
    }

    /// The analyzer
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// The sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Take the sink back
    pub fn into_sink(self) -> S {
        self.sink
    }
}
