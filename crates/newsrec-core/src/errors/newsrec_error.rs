use super::{CorpusError, SelectionError, SessionError, VectorizeError};

/// Top-level error type for the newsrec workspace.
#[derive(Debug, thiserror::Error)]
pub enum NewsrecError {
    #[error("article not found: index {index} outside corpus of {len}")]
    ArticleNotFound { index: usize, len: usize },

    #[error("invalid configuration: {reason}")]
    ConfigError { reason: String },

    #[error("vectorize error: {0}")]
    VectorizeError(#[from] VectorizeError),

    #[error("selection error: {0}")]
    SelectionError(#[from] SelectionError),

    #[error("corpus error: {0}")]
    CorpusError(#[from] CorpusError),

    #[error("session error: {0}")]
    SessionError(#[from] SessionError),

    #[error("config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Convenience alias used throughout the workspace.
pub type NewsrecResult<T> = Result<T, NewsrecError>;
