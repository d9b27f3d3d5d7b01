//! SimilarityRanker: score every row, then sort into one total order.

use rayon::prelude::*;
use tracing::debug;

use newsrec_core::config::{RankingConfig, SimilarityMetric};
use newsrec_core::models::{RankedArticle, Ranking, SparseVector, VectorMatrix};
use newsrec_core::traits::IRanker;
use newsrec_vectorize::VocabModel;

use crate::similarity::{cosine_similarity, euclidean_similarity};

/// Ranks corpus rows by similarity to a reference vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityRanker {
    metric: SimilarityMetric,
}

impl SimilarityRanker {
    pub fn new(metric: SimilarityMetric) -> Self {
        Self { metric }
    }

    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new(config.metric)
    }

    pub fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    /// Score one pair of vectors under the configured metric.
    pub fn score(&self, a: &SparseVector, b: &SparseVector) -> f64 {
        match self.metric {
            SimilarityMetric::Cosine => cosine_similarity(a, b),
            SimilarityMetric::Euclidean => euclidean_similarity(a, b),
        }
    }

    /// Rank every row of `matrix` against `reference`. Inputs are not modified.
    ///
    /// Scoring is a parallel map collected in row order; the sort that
    /// follows is the only ordering step, so output is identical across runs.
    pub fn rank(&self, reference: &SparseVector, matrix: &VectorMatrix) -> Ranking {
        let scored: Vec<RankedArticle> = matrix
            .rows()
            .par_iter()
            .enumerate()
            .map(|(index, row)| RankedArticle {
                index,
                score: self.score(reference, row),
            })
            .collect();

        let ranking = Ranking::from_scores(scored);
        debug!(
            rows = ranking.len(),
            metric = ?self.metric,
            top = ?ranking.first().map(|r| r.index),
            "ranked corpus"
        );
        ranking
    }
}

impl IRanker for SimilarityRanker {
    fn rank(&self, reference: &SparseVector, matrix: &VectorMatrix) -> Ranking {
        SimilarityRanker::rank(self, reference, matrix)
    }

    fn name(&self) -> &str {
        match self.metric {
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::Euclidean => "euclidean",
        }
    }
}

/// Cosine ranking of `matrix` against `reference`.
pub fn rank(reference: &SparseVector, matrix: &VectorMatrix) -> Ranking {
    SimilarityRanker::default().rank(reference, matrix)
}

/// Vectorize free text with `model`, then cosine-rank it against `matrix`.
pub fn rank_text(text: &str, model: &VocabModel, matrix: &VectorMatrix) -> Ranking {
    rank(&model.transform(text), matrix)
}
