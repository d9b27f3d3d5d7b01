//! Span definitions per operation: fit, rank, select, round, load.
//!
//! Each span carries its inputs as fields via the `tracing` crate.

/// Create a vocabulary-fit span.
#[macro_export]
macro_rules! fit_span {
    ($documents:expr) => {
        tracing::info_span!("newsrec.fit", documents = $documents)
    };
}

/// Create a ranking span.
#[macro_export]
macro_rules! rank_span {
    ($metric:expr, $rows:expr) => {
        tracing::debug_span!("newsrec.rank", metric = %$metric, rows = $rows)
    };
}

/// Create a selection span.
#[macro_export]
macro_rules! select_span {
    ($reference:expr, $count:expr) => {
        tracing::debug_span!("newsrec.select", reference = $reference, count = $count)
    };
}

/// Create a recommendation-round span.
#[macro_export]
macro_rules! round_span {
    ($session_id:expr, $round:expr) => {
        tracing::info_span!("newsrec.round", session_id = %$session_id, round = $round)
    };
}

/// Create a corpus-load span.
#[macro_export]
macro_rules! load_span {
    ($path:expr) => {
        tracing::info_span!("newsrec.load", path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const FIT: &str = "newsrec.fit";
    pub const RANK: &str = "newsrec.rank";
    pub const SELECT: &str = "newsrec.select";
    pub const ROUND: &str = "newsrec.round";
    pub const LOAD: &str = "newsrec.load";
}
