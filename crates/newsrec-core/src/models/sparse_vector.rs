//! Sparse bag-of-words count vector.

use serde::{Deserialize, Serialize};

/// Term-frequency vector stored as `(term_id, count)` pairs sorted by term id.
/// Zero counts are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(usize, u32)>,
}

impl SparseVector {
    /// The all-zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from arbitrary `(term_id, count)` pairs. Duplicate ids are summed.
    pub fn from_counts(counts: impl IntoIterator<Item = (usize, u32)>) -> Self {
        let mut entries: Vec<(usize, u32)> = counts.into_iter().filter(|(_, c)| *c > 0).collect();
        entries.sort_unstable_by_key(|(term, _)| *term);
        entries.dedup_by(|next, kept| {
            if next.0 == kept.0 {
                kept.1 += next.1;
                true
            } else {
                false
            }
        });
        Self { entries }
    }

    /// Number of non-zero dimensions.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count stored for `term`, or 0.
    pub fn get(&self, term: usize) -> u32 {
        self.entries
            .binary_search_by_key(&term, |(t, _)| *t)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[(usize, u32)] {
        &self.entries
    }

    /// Largest term id present, if any.
    pub fn max_term(&self) -> Option<usize> {
        self.entries.last().map(|(t, _)| *t)
    }

    /// Dot product via a merge over the two sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f64;
        while i < self.entries.len() && j < other.entries.len() {
            let (ta, ca) = self.entries[i];
            let (tb, cb) = other.entries[j];
            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += ca as f64 * cb as f64;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Sum of squared counts. Exact for any realistic document length.
    pub fn norm_squared(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, c)| (*c as f64) * (*c as f64))
            .sum()
    }

    /// Euclidean (L2) norm.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Squared Euclidean distance, computed as ‖a‖² + ‖b‖² − 2·a·b.
    pub fn squared_distance(&self, other: &SparseVector) -> f64 {
        (self.norm_squared() + other.norm_squared() - 2.0 * self.dot(other)).max(0.0)
    }
}
