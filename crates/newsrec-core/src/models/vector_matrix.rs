//! Index-aligned matrix of corpus vectors.

use crate::errors::{NewsrecError, NewsrecResult, VectorizeError};
use crate::models::SparseVector;

/// One sparse row per corpus article, aligned by index. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct VectorMatrix {
    dimensions: usize,
    rows: Vec<SparseVector>,
}

impl VectorMatrix {
    /// Build a matrix, checking every row fits inside `dimensions`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if a row references a term id past `dimensions`.
    pub fn new(dimensions: usize, rows: Vec<SparseVector>) -> NewsrecResult<Self> {
        if let Some(max) = rows.iter().filter_map(SparseVector::max_term).max() {
            if max >= dimensions {
                return Err(VectorizeError::DimensionMismatch {
                    expected: dimensions,
                    actual: max + 1,
                }
                .into());
            }
        }
        Ok(Self { dimensions, rows })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    /// Row for `index`, or `ArticleNotFound`.
    pub fn row(&self, index: usize) -> NewsrecResult<&SparseVector> {
        self.rows.get(index).ok_or(NewsrecError::ArticleNotFound {
            index,
            len: self.rows.len(),
        })
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &SparseVector)> {
        self.rows.iter().enumerate()
    }
}
