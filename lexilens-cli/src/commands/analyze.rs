//! Analyze command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::collect_passages;
use crate::output::{FormatterSink, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use lexilens_api::{Analyzer, Config, CredentialSource, Pipeline};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Passage to analyse (default: read from stdin)
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Number of summary sentences
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub sentences: Option<u8>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Books API key
    #[arg(long, value_name = "KEY", env = "LEXILENS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// TOML file holding `[general] api_key`
    #[arg(long, value_name = "FILE")]
    pub credentials: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the book search
    #[arg(long)]
    pub no_books: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    ///
    /// Returns `Ok(false)` when at least one passage was empty.
    pub fn execute(&self) -> Result<bool> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting passage analysis");
        log::debug!("Arguments: {:?}", self.redacted());

        let file_config = CliConfig::load_or_default(self.config.as_deref())?;
        let config = self.analysis_config(&file_config)?;
        let format = self.output_format(&file_config)?;

        let passages = collect_passages(self.text.as_deref(), &self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start("Loading language resources");
        let analyzer = Analyzer::with_config(config).context("Failed to prepare the analyzer")?;

        let writer = self.open_output()?;
        let formatter = format.formatter(writer, file_config.output.pretty_json);
        let mut pipeline = Pipeline::new(analyzer, FormatterSink::new(formatter, progress.clone()));

        let mut all_analysed = true;
        for passage in &passages {
            let label = passage.source.as_deref().unwrap_or("passage");
            progress.stage(&format!("Analysing {label}"));
            pipeline.sink_mut().set_source(passage.source.clone());

            let report = pipeline
                .run(&passage.text)
                .with_context(|| format!("Failed to analyse {label}"))?;
            all_analysed &= report.is_some();
        }

        pipeline.sink_mut().finish()?;
        progress.finish();

        log::info!("Analysed {} passage(s)", passages.len());
        Ok(all_analysed)
    }

    /// Merge the config file and the flags into a pipeline configuration
    pub fn analysis_config(&self, file: &CliConfig) -> Result<Config> {
        let mut builder = Config::builder()
            .summary_sentences(
                self.sentences
                    .map(usize::from)
                    .unwrap_or(file.analysis.summary_sentences),
            )
            .emotion_thresholds(file.emotion.thresholds())
            .search_books(file.analysis.search_books && !self.no_books)
            .books_endpoint(file.analysis.books_endpoint.clone())
            .max_books(file.analysis.max_books)
            .cache_dir(file.resources.cache_dir.clone())
            .lexicon_url(file.resources.lexicon_url.clone());

        if let Some(source) = self.credential_source(file) {
            builder = builder.credential_source(source);
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Flags first, then the config file
    fn credential_source(&self, file: &CliConfig) -> Option<CredentialSource> {
        if let Some(key) = &self.api_key {
            return Some(CredentialSource::input(key.clone()));
        }
        if let Some(path) = &self.credentials {
            return Some(CredentialSource::file(path));
        }
        if let Some(key) = &file.general.api_key {
            return Some(CredentialSource::input(key.clone()));
        }
        file.general.credentials_file.as_ref().map(CredentialSource::file)
    }

    fn output_format(&self, file: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&file.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                file.output.default_format
            ))
            .into()
        })
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Arguments safe to log
    fn redacted(&self) -> String {
        format!(
            "text={:?} input={:?} sentences={:?} format={:?} output={:?} api_key={} credentials={:?} config={:?} no_books={}",
            self.text.as_ref().map(|t| t.len()),
            self.input,
            self.sentences,
            self.format,
            self.output,
            if self.api_key.is_some() { "<set>" } else { "<unset>" },
            self.credentials,
            self.config,
            self.no_books
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            text: Some("A passage.".to_string()),
            input: vec![],
            sentences: None,
            format: None,
            output: None,
            api_key: None,
            credentials: None,
            config: None,
            no_books: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        let config = args().analysis_config(&CliConfig::default()).unwrap();
        assert_eq!(config.summary_sentences, 3);
        assert!(config.search_books);
        assert!(config.credential_source.is_none());
    }

    #[test]
    fn test_flags_override_file() {
        let file = CliConfig::parse(
            "[general]\napi_key = \"from-file\"\n[analysis]\nsummary_sentences = 4\n",
        )
        .unwrap();

        let mut args = args();
        args.sentences = Some(1);
        args.api_key = Some("from-flag".to_string());
        args.no_books = true;

        let config = args.analysis_config(&file).unwrap();
        assert_eq!(config.summary_sentences, 1);
        assert!(!config.search_books);
        assert_eq!(
            config.credential_source,
            Some(CredentialSource::Input("from-flag".to_string()))
        );
    }

    #[test]
    fn test_credential_precedence() {
        let file = CliConfig::parse(
            "[general]\napi_key = \"from-file\"\ncredentials_file = \"keys.toml\"\n",
        )
        .unwrap();

        let mut args = args();
        args.credentials = Some(PathBuf::from("flag.toml"));
        assert_eq!(
            args.credential_source(&file),
            Some(CredentialSource::File(PathBuf::from("flag.toml")))
        );

        args.credentials = None;
        assert_eq!(
            args.credential_source(&file),
            Some(CredentialSource::Input("from-file".to_string()))
        );

        let file = CliConfig::parse("[general]\ncredentials_file = \"keys.toml\"\n").unwrap();
        assert_eq!(
            args.credential_source(&file),
            Some(CredentialSource::File(Path::new("keys.toml").to_path_buf()))
        );
    }

    #[test]
    fn test_file_summary_length_validated() {
        let file = CliConfig::parse("[analysis]\nsummary_sentences = 9\n").unwrap();
        let err = args().analysis_config(&file).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_output_format_from_file() {
        let file = CliConfig::parse("[output]\ndefault_format = \"Markdown\"\n").unwrap();
        assert_eq!(args().output_format(&file).unwrap(), OutputFormat::Markdown);

        let mut flagged = args();
        flagged.format = Some(OutputFormat::Json);
        assert_eq!(flagged.output_format(&file).unwrap(), OutputFormat::Json);

        let file = CliConfig::parse("[output]\ndefault_format = \"yaml\"\n").unwrap();
        assert!(args().output_format(&file).is_err());
    }

    #[test]
    fn test_redacted_hides_key() {
        let mut args = args();
        args.api_key = Some("super-secret".to_string());
        let logged = args.redacted();
        assert!(!logged.contains("super-secret"));
        assert!(logged.contains("api_key=<set>"));
    }
}
