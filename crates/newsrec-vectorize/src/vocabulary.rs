//! Vocabulary construction with document-frequency pruning.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Fixed, lexicographically sorted token set. A term's id is its position.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    ids: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from terms. Terms are sorted and deduplicated.
    pub fn from_terms(terms: impl IntoIterator<Item = String>) -> Self {
        let mut terms: Vec<String> = terms.into_iter().collect();
        terms.sort();
        terms.dedup();
        let ids = terms
            .iter()
            .enumerate()
            .map(|(id, term)| (term.clone(), id))
            .collect();
        Self { terms, ids }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn id(&self, term: &str) -> Option<usize> {
        self.ids.get(term).copied()
    }

    pub fn term(&self, id: usize) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.ids.contains_key(term)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Number of documents each token appears in, counted once per document.
pub fn document_frequencies(tokenized: &[Vec<String>]) -> BTreeMap<&str, usize> {
    let mut df: BTreeMap<&str, usize> = BTreeMap::new();
    for tokens in tokenized {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in unique {
            *df.entry(token).or_insert(0) += 1;
        }
    }
    df
}

/// Whether a token with document frequency `df` survives pruning.
///
/// The floor is inclusive (`df >= min_df`). The ceiling is exclusive
/// (`df < max_df * documents`) and is disabled when `max_df >= 1.0`.
pub fn within_document_frequency(df: usize, documents: usize, min_df: usize, max_df: f64) -> bool {
    if df < min_df {
        return false;
    }
    max_df >= 1.0 || (df as f64) < max_df * documents as f64
}

/// Tally of a pruning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    pub candidates: usize,
    pub too_rare: usize,
    pub too_common: usize,
}

/// Keep tokens inside the document-frequency window.
pub fn prune(
    df: &BTreeMap<&str, usize>,
    documents: usize,
    min_df: usize,
    max_df: f64,
) -> (Vocabulary, PruneStats) {
    let mut stats = PruneStats {
        candidates: df.len(),
        ..PruneStats::default()
    };
    let mut kept = Vec::new();
    for (&term, &count) in df {
        if within_document_frequency(count, documents, min_df, max_df) {
            kept.push(term.to_string());
        } else if count < min_df {
            stats.too_rare += 1;
        } else {
            stats.too_common += 1;
        }
    }
    (Vocabulary::from_terms(kept), stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_is_inclusive() {
        assert!(!within_document_frequency(1, 10, 2, 0.3));
        assert!(within_document_frequency(2, 10, 2, 0.3));
    }

    #[test]
    fn ceiling_is_exclusive() {
        assert!(!within_document_frequency(3, 10, 2, 0.3));
        assert!(!within_document_frequency(4, 10, 2, 0.3));
    }

    #[test]
    fn full_max_df_disables_ceiling() {
        assert!(within_document_frequency(10, 10, 1, 1.0));
    }

    #[test]
    fn vocabulary_is_sorted() {
        let vocab = Vocabulary::from_terms(vec!["tavern".into(), "magic".into(), "tavern".into()]);
        assert_eq!(vocab.terms(), &["magic".to_string(), "tavern".to_string()]);
        assert_eq!(vocab.id("tavern"), Some(1));
        assert_eq!(vocab.term(0), Some("magic"));
        assert!(!vocab.contains("pins"));
    }

    #[test]
    fn document_frequency_counts_once_per_document() {
        let docs = vec![
            vec!["pins".to_string(), "pins".to_string()],
            vec!["pins".to_string(), "magic".to_string()],
        ];
        let df = document_frequencies(&docs);
        assert_eq!(df.get("pins"), Some(&2));
        assert_eq!(df.get("magic"), Some(&1));
    }

    #[test]
    fn prune_reports_rare_and_common() {
        let docs: Vec<Vec<String>> = (0..10)
            .map(|i| {
                let mut tokens = vec!["everywhere".to_string(), format!("only{i}")];
                if i < 2 {
                    tokens.push("pair".to_string());
                }
                tokens
            })
            .collect();
        let df = document_frequencies(&docs);
        let (vocab, stats) = prune(&df, docs.len(), 2, 0.3);
        assert_eq!(vocab.terms(), &["pair".to_string()]);
        assert_eq!(stats.candidates, 12);
        assert_eq!(stats.too_rare, 10);
        assert_eq!(stats.too_common, 1);
    }
}
