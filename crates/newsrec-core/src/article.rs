//! Articles and the immutable, index-addressed corpus.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::{CorpusError, NewsrecError, NewsrecResult};

/// A single article. The title doubles as the dedup key for recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub text: String,
}

impl Article {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Ordered article collection. An article's position is its identity across
/// the vector matrix, rankings and recommendation sets.
///
/// Invariant: no two articles share the exact same `text`.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    articles: Vec<Article>,
}

impl Corpus {
    /// Build a corpus, rejecting exact-duplicate texts.
    ///
    /// # Errors
    /// Returns `CorpusError::DuplicateText` naming the first repeated position.
    pub fn new(articles: Vec<Article>) -> NewsrecResult<Self> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(articles.len());
        for (index, article) in articles.iter().enumerate() {
            if let Some(&first) = seen.get(article.text.as_str()) {
                return Err(CorpusError::DuplicateText { index, first }.into());
            }
            seen.insert(article.text.as_str(), index);
        }
        Ok(Self { articles })
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }

    /// Fetch an article or fail with `ArticleNotFound`.
    pub fn article(&self, index: usize) -> NewsrecResult<&Article> {
        self.articles
            .get(index)
            .ok_or(NewsrecError::ArticleNotFound {
                index,
                len: self.articles.len(),
            })
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.articles.get(index).map(|a| a.title.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Article)> {
        self.articles.iter().enumerate()
    }

    /// Article texts in corpus order, ready for vectorization.
    pub fn texts(&self) -> Vec<&str> {
        self.articles.iter().map(|a| a.text.as_str()).collect()
    }

    /// Number of distinct titles, i.e. the most items one recommendation set can hold.
    pub fn count_unique_titles(&self) -> usize {
        self.articles
            .iter()
            .map(|a| a.title.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }
}
