//! Command-line arguments.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use newsrec_core::config::CorpusFormat;
use newsrec_core::NewsrecConfig;

#[derive(Debug, Parser)]
#[command(name = "newsrec")]
#[command(about = "Interactive news recommendations by bag-of-words similarity")]
#[command(version)]
pub struct Cli {
    /// Corpus file (CSV with a header row, or a JSON array)
    pub corpus: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Corpus format (inferred from the extension by default)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Load a random sample of this many articles
    #[arg(long)]
    pub sample: Option<usize>,

    /// Recommendations per round
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for CorpusFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => CorpusFormat::Csv,
            FormatArg::Json => CorpusFormat::Json,
        }
    }
}

impl Cli {
    /// Load the config file, if any, then apply command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<NewsrecConfig> {
        let mut config = match &self.config {
            Some(path) => NewsrecConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => NewsrecConfig::default(),
        };

        if let Some(corpus) = &self.corpus {
            config.corpus.path = Some(corpus.display().to_string());
        }
        if let Some(format) = self.format {
            config.corpus.format = Some(format.into());
        }
        if self.sample.is_some() {
            config.corpus.sample = self.sample;
        }
        if let Some(count) = self.count {
            config.session.recommendation_count = count;
        }
        if self.seed.is_some() {
            config.session.seed = self.seed;
        }
        if self.log_json {
            config.observability.json = true;
        }

        config.validate()?;
        Ok(config)
    }
}
