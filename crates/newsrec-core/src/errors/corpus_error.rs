/// Corpus construction and loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    #[error("record {record} has no text")]
    MissingText { record: usize },

    #[error("unsupported corpus format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("article {index} repeats the text of article {first}")]
    DuplicateText { index: usize, first: usize },
}
