//! # newsrec-vectorize
//!
//! Fits a fixed vocabulary on a corpus and turns text into sparse
//! term-count vectors over it.
//!
//! Tokens are matched by a configurable regex (two-letter-or-longer words and
//! four-digit years by default) after optional lowercasing. The vocabulary
//! keeps only tokens whose document frequency is at least `min_df` and below
//! `max_df` of the corpus.

pub mod tokenizer;
pub mod vectorizer;
pub mod vocabulary;

use newsrec_core::config::VectorizerConfig;
use newsrec_core::errors::NewsrecResult;
use newsrec_core::models::SparseVector;

pub use tokenizer::Tokenizer;
pub use vectorizer::{CountVectorizer, VocabModel};
pub use vocabulary::Vocabulary;

/// Fit a vocabulary model on `documents`.
pub fn fit<S: AsRef<str> + Sync>(
    documents: &[S],
    config: &VectorizerConfig,
) -> NewsrecResult<VocabModel> {
    CountVectorizer::new(config.clone()).fit(documents)
}

/// Vectorize one text against a fitted model.
pub fn transform(text: &str, model: &VocabModel) -> SparseVector {
    model.transform(text)
}
