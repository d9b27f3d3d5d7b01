//! # newsrec-session
//!
//! [`RecommendationSession`] holds the corpus, the fitted vocabulary and the
//! cached vector matrix for one run, and serves recommendation rounds.

pub mod session;

pub use session::RecommendationSession;
