//! RecommendationSession: fit once, then serve one round per user pick.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use newsrec_core::errors::{NewsrecResult, SessionError};
use newsrec_core::models::{Ranking, RecommendationSet, VectorMatrix};
use newsrec_core::traits::{IRanker, ISelector};
use newsrec_core::{Article, Corpus, NewsrecConfig};
use newsrec_observability::{fit_span, rank_span, round_span, select_span};
use newsrec_ranking::SimilarityRanker;
use newsrec_selection::{DiversifiedSelector, TitleGuard};
use newsrec_vectorize::{CountVectorizer, VocabModel};

/// One user's run over a fixed corpus.
///
/// The corpus, vocabulary and matrix are read-only after construction.
/// Rounds run one at a time to completion.
pub struct RecommendationSession {
    session_id: String,
    corpus: Corpus,
    model: VocabModel,
    matrix: VectorMatrix,
    ranker: Box<dyn IRanker>,
    selector: Box<dyn ISelector>,
    rng: StdRng,
    recommendation_count: usize,
    rounds: u64,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl RecommendationSession {
    /// Fit the vocabulary on `corpus` and vectorize every article once.
    ///
    /// # Errors
    /// Config validation errors, or a `VectorizeError` when the corpus is
    /// empty or pruning leaves no vocabulary.
    pub fn new(corpus: Corpus, config: &NewsrecConfig) -> NewsrecResult<Self> {
        config.validate()?;

        let (model, matrix) = {
            let _span = fit_span!(corpus.len()).entered();
            CountVectorizer::new(config.vectorizer.clone()).fit_transform(&corpus.texts())?
        };

        let rng = match config.session.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let now = Utc::now();
        let session_id = uuid::Uuid::new_v4().to_string();

        info!(
            session_id = %session_id,
            articles = corpus.len(),
            vocabulary = model.vocabulary().len(),
            "session ready"
        );

        Ok(Self {
            session_id,
            corpus,
            model,
            matrix,
            ranker: Box::new(SimilarityRanker::from_config(&config.ranking)),
            selector: Box::new(DiversifiedSelector::from_config(&config.selection)),
            rng,
            recommendation_count: config.session.recommendation_count,
            rounds: 0,
            created_at: now,
            last_activity: now,
        })
    }

    /// Replace the ranking strategy.
    pub fn with_ranker(mut self, ranker: Box<dyn IRanker>) -> Self {
        self.ranker = ranker;
        self
    }

    /// Replace the selection strategy.
    pub fn with_selector(mut self, selector: Box<dyn ISelector>) -> Self {
        self.selector = selector;
        self
    }

    /// `count` distinct random articles, no two sharing a title.
    ///
    /// # Errors
    /// `SampleTooLarge` when the corpus holds fewer than `count` distinct titles.
    pub fn initial(&mut self, count: usize) -> NewsrecResult<RecommendationSet> {
        let available = self.corpus.count_unique_titles();
        if count > available {
            return Err(SessionError::SampleTooLarge {
                requested: count,
                available,
            }
            .into());
        }

        let mut order: Vec<usize> = (0..self.corpus.len()).collect();
        order.shuffle(&mut self.rng);

        let mut guard = TitleGuard::new();
        let mut picks = Vec::with_capacity(count);
        for index in order {
            if picks.len() == count {
                break;
            }
            let article = self.corpus.article(index)?;
            if guard.admit(index, &article.title) {
                picks.push(index);
            }
        }

        self.last_activity = Utc::now();
        debug!(session_id = %self.session_id, count, "initial recommendations");
        Ok(RecommendationSet::unpartitioned(picks))
    }

    /// Recommendations following a pick of `last_choice`.
    ///
    /// The reference vector is the cached matrix row of `last_choice`; the
    /// article text is not vectorized again.
    ///
    /// # Errors
    /// `ArticleNotFound` for an out-of-range pick, or a `SelectionError` when
    /// the corpus cannot fill `count` title-unique slots.
    pub fn next(&mut self, last_choice: usize, count: usize) -> NewsrecResult<RecommendationSet> {
        let round = self.rounds + 1;
        let _round = round_span!(self.session_id, round).entered();

        let reference = self.matrix.row(last_choice)?;
        let ranking = {
            let _span = rank_span!(self.ranker.name(), self.matrix.len()).entered();
            self.ranker.rank(reference, &self.matrix)
        };
        let set = {
            let _span = select_span!(last_choice, count).entered();
            self.selector
                .select(&ranking, &self.corpus, last_choice, count)?
        };

        self.rounds = round;
        self.last_activity = Utc::now();
        info!(
            last_choice,
            near = set.near().len(),
            far = set.far().len(),
            "round complete"
        );
        Ok(set)
    }

    /// Rank free text against the corpus.
    pub fn rank_query(&self, text: &str) -> Ranking {
        self.ranker.rank(&self.model.transform(text), &self.matrix)
    }

    pub fn article(&self, index: usize) -> Option<&Article> {
        self.corpus.get(index)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn model(&self) -> &VocabModel {
        &self.model
    }

    pub fn matrix(&self) -> &VectorMatrix {
        &self.matrix
    }

    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary().len()
    }

    /// Configured articles per round.
    pub fn recommendation_count(&self) -> usize {
        self.recommendation_count
    }

    /// Completed `next` rounds.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }
}
