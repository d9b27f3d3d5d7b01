/// Vocabulary fitting and vectorization errors.
#[derive(Debug, thiserror::Error)]
pub enum VectorizeError {
    #[error("cannot fit a vocabulary on an empty corpus")]
    EmptyCorpus,

    #[error("vocabulary empty after pruning {documents} documents (min_df {min_df}, max_df {max_df})")]
    EmptyVocabulary {
        documents: usize,
        min_df: usize,
        max_df: f64,
    },

    #[error("invalid token pattern {pattern:?}: {reason}")]
    InvalidTokenPattern { pattern: String, reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
