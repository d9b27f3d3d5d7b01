//! # newsrec-ranking
//!
//! Scores every corpus vector against a reference vector and produces a
//! deterministic total order: score descending, ties by index ascending.

pub mod ranker;
pub mod similarity;

pub use ranker::{rank, rank_text, SimilarityRanker};
pub use similarity::{cosine_similarity, euclidean_distance, euclidean_similarity};
