//! Exact-text deduplication keyed by blake3 fingerprints.

use std::collections::HashSet;

use newsrec_core::Article;

/// blake3 hex digest of an article text.
pub fn fingerprint(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Keeps the first article for every distinct text.
#[derive(Debug, Default)]
pub struct TextDeduplicator {
    seen: HashSet<String>,
    dropped: usize,
}

impl TextDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if an article with the same text was already accepted.
    pub fn accept(&mut self, article: &Article) -> bool {
        if self.seen.insert(fingerprint(&article.text)) {
            true
        } else {
            self.dropped += 1;
            false
        }
    }

    /// Number of duplicates turned away.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn filter(&mut self, articles: Vec<Article>) -> Vec<Article> {
        articles.into_iter().filter(|a| self.accept(a)).collect()
    }
}
