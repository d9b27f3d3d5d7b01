//! Similarity ranking: a total order over corpus indices.

use serde::{Deserialize, Serialize};

/// One corpus index with its similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedArticle {
    pub index: usize,
    pub score: f64,
}

/// Corpus indices ordered from most to least similar.
/// Equal scores keep ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    entries: Vec<RankedArticle>,
}

impl Ranking {
    /// Sort scored entries into ranking order: score descending, then index ascending.
    pub fn from_scores(mut entries: Vec<RankedArticle>) -> Self {
        entries.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&RankedArticle> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&RankedArticle> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[RankedArticle] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedArticle> {
        self.entries.iter()
    }

    /// Indices in ranking order.
    pub fn indices(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.index).collect()
    }

    /// Score for a given corpus index.
    pub fn score_of(&self, index: usize) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.index == index)
            .map(|e| e.score)
    }

    /// Position of a corpus index in the ranking.
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.entries.iter().position(|e| e.index == index)
    }
}
