/// Recommendation session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("cannot sample {requested} articles with distinct titles from {available}")]
    SampleTooLarge { requested: usize, available: usize },
}
