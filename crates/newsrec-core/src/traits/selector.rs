use crate::article::Corpus;
use crate::errors::NewsrecResult;
use crate::models::{Ranking, RecommendationSet};

/// Picks a recommendation set out of a similarity ranking.
pub trait ISelector: Send + Sync {
    /// Select `count` articles for the round following a pick of `reference`.
    fn select(
        &self,
        ranking: &Ranking,
        corpus: &Corpus,
        reference: usize,
        count: usize,
    ) -> NewsrecResult<RecommendationSet>;
}
