use crate::models::{Ranking, SparseVector, VectorMatrix};

/// Orders every matrix row by similarity to a reference vector.
pub trait IRanker: Send + Sync {
    /// Rank all rows, most similar first. Must be a pure function of its inputs.
    fn rank(&self, reference: &SparseVector, matrix: &VectorMatrix) -> Ranking;

    /// Human-readable metric name.
    fn name(&self) -> &str;
}
