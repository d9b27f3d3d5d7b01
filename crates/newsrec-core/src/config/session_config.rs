use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Articles offered per round.
    pub recommendation_count: usize,
    /// RNG seed for reproducible sampling. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            recommendation_count: defaults::DEFAULT_RECOMMENDATION_COUNT,
            seed: None,
        }
    }
}
