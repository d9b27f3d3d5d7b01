//! CorpusLoader: file and in-memory corpus loading.

use std::io::Read;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use newsrec_core::config::{CorpusConfig, CorpusFormat};
use newsrec_core::errors::{CorpusError, NewsrecResult};
use newsrec_core::{Article, Corpus};
use newsrec_observability::load_span;

use crate::dedup::TextDeduplicator;
use crate::record::RawArticle;

/// Loads a [`Corpus`] according to a [`CorpusConfig`].
#[derive(Debug, Clone, Default)]
pub struct CorpusLoader {
    config: CorpusConfig,
    seed: Option<u64>,
}

impl CorpusLoader {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config, seed: None }
    }

    /// Seed for the sampling shuffle. Entropy-seeded when unset.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// Load the corpus at `path`.
    ///
    /// # Errors
    /// `UnsupportedFormat` when neither the config nor the extension names a
    /// known format, `Io` when the file cannot be read, `Parse` or
    /// `MissingText` for malformed records.
    pub fn load(&self, path: impl AsRef<Path>) -> NewsrecResult<Corpus> {
        let path = path.as_ref();
        let _span = load_span!(path.display()).entered();

        let format = self.format_for(path)?;
        let io_err = |e: std::io::Error| CorpusError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        };
        let source_name = path.display().to_string();

        match format {
            CorpusFormat::Csv => {
                let file = std::fs::File::open(path).map_err(io_err)?;
                self.finish(parse_csv(file, &source_name)?)
            }
            CorpusFormat::Json => {
                let content = std::fs::read_to_string(path).map_err(io_err)?;
                self.finish(parse_json(&content, &source_name)?)
            }
        }
    }

    /// Load a CSV corpus with a header row from any reader.
    pub fn load_csv_from_reader<R: Read>(&self, reader: R) -> NewsrecResult<Corpus> {
        self.finish(parse_csv(reader, "<reader>")?)
    }

    /// Load a JSON array of article objects.
    pub fn load_json_from_str(&self, content: &str) -> NewsrecResult<Corpus> {
        self.finish(parse_json(content, "<string>")?)
    }

    fn format_for(&self, path: &Path) -> NewsrecResult<CorpusFormat> {
        if let Some(format) = self.config.format {
            return Ok(format);
        }
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        CorpusFormat::from_extension(extension).ok_or_else(|| {
            CorpusError::UnsupportedFormat {
                extension: extension.to_string(),
            }
            .into()
        })
    }

    /// Validate, dedup and sample raw records.
    fn finish(&self, raws: Vec<RawArticle>) -> NewsrecResult<Corpus> {
        let records = raws.len();
        let articles = raws
            .into_iter()
            .enumerate()
            .map(|(record, raw)| raw.into_article(record, self.config.title_fallback_chars))
            .collect::<NewsrecResult<Vec<Article>>>()?;

        let mut dedup = TextDeduplicator::new();
        let mut articles = dedup.filter(articles);
        debug!(records, duplicates = dedup.dropped(), "deduplicated corpus");

        if let Some(sample) = self.config.sample {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            articles.shuffle(&mut rng);
            articles.truncate(sample);
        }

        info!(articles = articles.len(), "articles loaded");
        Corpus::new(articles)
    }
}

/// Load a CSV corpus with default settings.
pub fn load_csv_from_reader<R: Read>(reader: R) -> NewsrecResult<Corpus> {
    CorpusLoader::default().load_csv_from_reader(reader)
}

/// Load a JSON corpus with default settings.
pub fn load_json_from_str(content: &str) -> NewsrecResult<Corpus> {
    CorpusLoader::default().load_json_from_str(content)
}

fn parse_csv<R: Read>(reader: R, source_name: &str) -> NewsrecResult<Vec<RawArticle>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut raws = Vec::new();
    for row in reader.deserialize::<RawArticle>() {
        let raw = row.map_err(|e| CorpusError::Parse {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;
        raws.push(raw);
    }
    Ok(raws)
}

fn parse_json(content: &str, source_name: &str) -> NewsrecResult<Vec<RawArticle>> {
    serde_json::from_str(content).map_err(|e| {
        CorpusError::Parse {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
