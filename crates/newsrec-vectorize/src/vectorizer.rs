//! Count vectorizer: fit once, transform many.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, info};

use newsrec_core::config::VectorizerConfig;
use newsrec_core::errors::{NewsrecResult, VectorizeError};
use newsrec_core::models::{SparseVector, VectorMatrix};
use newsrec_core::traits::IVectorizer;

use crate::tokenizer::Tokenizer;
use crate::vocabulary::{self, Vocabulary};

/// Fits [`VocabModel`]s according to a [`VectorizerConfig`].
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    config: VectorizerConfig,
}

impl CountVectorizer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Build the vocabulary from `documents`.
    ///
    /// # Errors
    /// - `EmptyCorpus` when `documents` is empty.
    /// - `EmptyVocabulary` when pruning removes every token.
    /// - `InvalidTokenPattern` when the configured pattern does not compile.
    pub fn fit<S: AsRef<str> + Sync>(&self, documents: &[S]) -> NewsrecResult<VocabModel> {
        if documents.is_empty() {
            return Err(VectorizeError::EmptyCorpus.into());
        }
        let tokenizer = Tokenizer::from_config(&self.config)?;

        let tokenized: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| tokenizer.tokenize(doc.as_ref()))
            .collect();

        let df = vocabulary::document_frequencies(&tokenized);
        let (vocabulary, stats) = vocabulary::prune(
            &df,
            documents.len(),
            self.config.min_df,
            self.config.max_df,
        );

        debug!(
            candidates = stats.candidates,
            too_rare = stats.too_rare,
            too_common = stats.too_common,
            "pruned vocabulary"
        );

        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary {
                documents: documents.len(),
                min_df: self.config.min_df,
                max_df: self.config.max_df,
            }
            .into());
        }

        info!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            lowercase = tokenizer.lowercase(),
            "fitted vocabulary"
        );

        Ok(VocabModel {
            tokenizer,
            vocabulary,
            documents: documents.len(),
        })
    }

    /// Fit on `documents` and vectorize them in one pass.
    pub fn fit_transform<S: AsRef<str> + Sync>(
        &self,
        documents: &[S],
    ) -> NewsrecResult<(VocabModel, VectorMatrix)> {
        let model = self.fit(documents)?;
        let matrix = model.transform_all(documents)?;
        Ok((model, matrix))
    }
}

/// A fitted vocabulary plus the tokenizer that produced it. Immutable.
#[derive(Debug, Clone)]
pub struct VocabModel {
    tokenizer: Tokenizer,
    vocabulary: Vocabulary,
    documents: usize,
}

impl VocabModel {
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Number of documents the model was fitted on.
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Count vector of `text`. Out-of-vocabulary tokens are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in self.tokenizer.tokenize(text) {
            if let Some(id) = self.vocabulary.id(&token) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        SparseVector::from_counts(counts)
    }

    /// Vectorize every document, keeping input order.
    pub fn transform_all<S: AsRef<str> + Sync>(&self, documents: &[S]) -> NewsrecResult<VectorMatrix> {
        let rows: Vec<SparseVector> = documents
            .par_iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect();
        VectorMatrix::new(self.vocabulary.len(), rows)
    }
}

impl IVectorizer for VocabModel {
    fn transform(&self, text: &str) -> SparseVector {
        VocabModel::transform(self, text)
    }

    fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }
}
