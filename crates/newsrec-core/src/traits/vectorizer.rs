use crate::models::SparseVector;

/// Converts text into a count vector over a fixed vocabulary.
pub trait IVectorizer: Send + Sync {
    /// Vectorize a single text. Text sharing no vocabulary term yields the zero vector.
    fn transform(&self, text: &str) -> SparseVector;

    /// Vocabulary size, i.e. the dimensionality of every produced vector.
    fn dimensions(&self) -> usize;
}
