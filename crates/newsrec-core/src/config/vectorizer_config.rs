use serde::{Deserialize, Serialize};

use super::defaults;

/// Vocabulary fitting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Regex a token must match.
    pub token_pattern: String,
    /// Lowercase text before tokenizing. When false, tokens are case-sensitive.
    pub lowercase: bool,
    /// Minimum number of documents a token must appear in (inclusive).
    pub min_df: usize,
    /// Fraction of documents a token must stay below (exclusive). 1.0 disables the ceiling.
    pub max_df: f64,
}

impl VectorizerConfig {
    /// No document-frequency pruning. Suited to tiny corpora.
    pub fn unpruned() -> Self {
        Self {
            min_df: 1,
            max_df: 1.0,
            ..Self::default()
        }
    }
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            token_pattern: defaults::DEFAULT_TOKEN_PATTERN.to_string(),
            lowercase: defaults::DEFAULT_LOWERCASE,
            min_df: defaults::DEFAULT_MIN_DF,
            max_df: defaults::DEFAULT_MAX_DF,
        }
    }
}
