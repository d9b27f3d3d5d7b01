pub mod defaults;

mod corpus_config;
mod observability_config;
mod ranking_config;
mod selection_config;
mod session_config;
mod vectorizer_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use corpus_config::{CorpusConfig, CorpusFormat};
pub use observability_config::ObservabilityConfig;
pub use ranking_config::{RankingConfig, SimilarityMetric};
pub use selection_config::SelectionConfig;
pub use session_config::SessionConfig;
pub use vectorizer_config::VectorizerConfig;

use crate::errors::{NewsrecError, NewsrecResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsrecConfig {
    pub vectorizer: VectorizerConfig,
    pub ranking: RankingConfig,
    pub selection: SelectionConfig,
    pub session: SessionConfig,
    pub corpus: CorpusConfig,
    pub observability: ObservabilityConfig,
}

impl NewsrecConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> NewsrecResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> NewsrecResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| config_error(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> NewsrecResult<()> {
        let v = &self.vectorizer;
        if v.token_pattern.trim().is_empty() {
            return Err(config_error("vectorizer.token_pattern must not be empty"));
        }
        if v.min_df == 0 {
            return Err(config_error("vectorizer.min_df must be at least 1"));
        }
        if !(v.max_df > 0.0 && v.max_df <= 1.0) {
            return Err(config_error(format!(
                "vectorizer.max_df must be in (0, 1], got {}",
                v.max_df
            )));
        }
        Ok(())
    }
}

fn config_error(reason: impl Into<String>) -> NewsrecError {
    NewsrecError::ConfigError {
        reason: reason.into(),
    }
}
