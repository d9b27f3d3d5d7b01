use serde::{Deserialize, Serialize};

/// Vector similarity used to order the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    /// Normalized dot product.
    #[default]
    Cosine,
    /// `1 / (1 + distance)`, so closer vectors still score higher.
    Euclidean,
}

/// Ranking configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub metric: SimilarityMetric,
}
