//! DiversifiedSelector: a forward walk from the head of the ranking for the
//! near side, then a backward walk from the tail for the far side.

use tracing::debug;

use newsrec_core::config::SelectionConfig;
use newsrec_core::errors::{NewsrecResult, SelectionError};
use newsrec_core::models::{RankedArticle, Ranking, RecommendationSet, SelectionSide};
use newsrec_core::traits::ISelector;
use newsrec_core::Corpus;

use crate::budget::SelectionBudget;
use crate::guard::TitleGuard;

/// Builds title-unique near/far recommendation sets from a ranking.
#[derive(Debug, Clone, Copy)]
pub struct DiversifiedSelector {
    exclude_reference_title: bool,
}

impl DiversifiedSelector {
    /// `exclude_reference_title` also turns away articles that share the
    /// reference article's title, not just the reference itself.
    pub fn new(exclude_reference_title: bool) -> Self {
        Self {
            exclude_reference_title,
        }
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self::new(config.exclude_reference_title)
    }

    /// Select `count` articles for the round that follows a pick of `reference`.
    ///
    /// The reference index is skipped wherever it sits in the ranking. Each
    /// walk only moves forward and never revisits a rejected candidate.
    ///
    /// # Errors
    /// - `RankingMismatch` if the ranking and corpus differ in length.
    /// - `ArticleNotFound` if `reference` is outside the corpus.
    /// - `InsufficientCandidates` if a walk runs off the ranking before its
    ///   budget is filled.
    pub fn select(
        &self,
        ranking: &Ranking,
        corpus: &Corpus,
        reference: usize,
        count: usize,
    ) -> NewsrecResult<RecommendationSet> {
        if count == 0 {
            return Ok(RecommendationSet::empty());
        }
        if ranking.len() != corpus.len() {
            return Err(SelectionError::RankingMismatch {
                ranking: ranking.len(),
                corpus: corpus.len(),
            }
            .into());
        }
        let reference_article = corpus.article(reference)?;
        let budget = SelectionBudget::split(count);

        let mut guard = TitleGuard::new();
        guard.block_index(reference);
        if self.exclude_reference_title {
            guard.block_title(&reference_article.title);
        }

        let near = walk(
            ranking.iter(),
            corpus,
            &mut guard,
            budget.near,
            SelectionSide::Near,
        )?;
        let far = walk(
            ranking.iter().rev(),
            corpus,
            &mut guard,
            budget.far,
            SelectionSide::Far,
        )?;

        debug!(
            reference,
            near = near.len(),
            far = far.len(),
            rejected = guard.rejected(),
            "selected recommendations"
        );

        Ok(RecommendationSet::new(near, far))
    }
}

impl Default for DiversifiedSelector {
    fn default() -> Self {
        Self::from_config(&SelectionConfig::default())
    }
}

impl ISelector for DiversifiedSelector {
    fn select(
        &self,
        ranking: &Ranking,
        corpus: &Corpus,
        reference: usize,
        count: usize,
    ) -> NewsrecResult<RecommendationSet> {
        DiversifiedSelector::select(self, ranking, corpus, reference, count)
    }
}

/// Take the first `budget` admissible candidates from `candidates`.
fn walk<'a, 'r>(
    candidates: impl Iterator<Item = &'r RankedArticle>,
    corpus: &'a Corpus,
    guard: &mut TitleGuard<'a>,
    budget: usize,
    side: SelectionSide,
) -> NewsrecResult<Vec<usize>> {
    let (available, _) = candidates.size_hint();
    let mut picks = Vec::with_capacity(budget.min(available));
    if budget == 0 {
        return Ok(picks);
    }
    for candidate in candidates {
        let article = corpus.article(candidate.index)?;
        if guard.admit(candidate.index, &article.title) {
            picks.push(candidate.index);
            if picks.len() == budget {
                return Ok(picks);
            }
        }
    }
    Err(SelectionError::InsufficientCandidates {
        side,
        requested: budget,
        selected: picks.len(),
    }
    .into())
}

/// Select with the default policy (reference title excluded).
pub fn select(
    ranking: &Ranking,
    corpus: &Corpus,
    reference: usize,
    count: usize,
) -> NewsrecResult<RecommendationSet> {
    DiversifiedSelector::default().select(ranking, corpus, reference, count)
}
