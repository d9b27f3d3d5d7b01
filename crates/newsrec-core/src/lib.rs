//! # newsrec-core
//!
//! Foundation crate for the newsrec article recommender.
//! Defines the corpus, vector, ranking and recommendation types together with
//! the traits, errors, config, and constants shared by every other crate.

pub mod article;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use article::{Article, Corpus};
pub use config::NewsrecConfig;
pub use errors::{NewsrecError, NewsrecResult};
pub use models::{
    RankedArticle, Ranking, RecommendationSet, SelectionSide, SparseVector, VectorMatrix,
};
