use serde::{Deserialize, Serialize};

use super::defaults;

/// On-disk corpus format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusFormat {
    Csv,
    Json,
}

impl CorpusFormat {
    /// Infer the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Corpus loading configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path of the corpus file.
    pub path: Option<String>,
    /// Explicit format. Inferred from the extension when unset.
    pub format: Option<CorpusFormat>,
    /// Keep a random sample of this many articles after dedup.
    pub sample: Option<usize>,
    /// Characters of text used as the title when a record has none.
    pub title_fallback_chars: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: None,
            sample: None,
            title_fallback_chars: defaults::DEFAULT_TITLE_FALLBACK_CHARS,
        }
    }
}
