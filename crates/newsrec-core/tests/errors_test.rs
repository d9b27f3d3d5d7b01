use newsrec_core::errors::*;
use newsrec_core::SelectionSide;

#[test]
fn article_not_found_carries_index_and_len() {
    let err = NewsrecError::ArticleNotFound { index: 12, len: 4 };
    let msg = err.to_string();
    assert!(msg.contains("12"));
    assert!(msg.contains("4"));
}

#[test]
fn insufficient_candidates_carries_side_and_counts() {
    let err = SelectionError::InsufficientCandidates {
        side: SelectionSide::Far,
        requested: 21,
        selected: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("far"));
    assert!(msg.contains("21"));
    assert!(msg.contains("3"));
}

#[test]
fn empty_vocabulary_carries_pruning_bounds() {
    let err = VectorizeError::EmptyVocabulary {
        documents: 4,
        min_df: 2,
        max_df: 0.3,
    };
    let msg = err.to_string();
    assert!(msg.contains("4 documents"));
    assert!(msg.contains("0.3"));
}

// --- From impls ---

#[test]
fn vectorize_error_converts_to_newsrec_error() {
    let err: NewsrecError = VectorizeError::EmptyCorpus.into();
    assert!(matches!(err, NewsrecError::VectorizeError(_)));
}

#[test]
fn selection_error_converts_to_newsrec_error() {
    let err: NewsrecError = SelectionError::RankingMismatch {
        ranking: 3,
        corpus: 5,
    }
    .into();
    assert!(matches!(err, NewsrecError::SelectionError(_)));
}

#[test]
fn corpus_error_converts_to_newsrec_error() {
    let err: NewsrecError = CorpusError::UnsupportedFormat {
        extension: "xml".into(),
    }
    .into();
    assert!(matches!(err, NewsrecError::CorpusError(_)));
    assert!(err.to_string().contains("xml"));
}

#[test]
fn session_error_converts_to_newsrec_error() {
    let err: NewsrecError = SessionError::SampleTooLarge {
        requested: 10,
        available: 2,
    }
    .into();
    assert!(matches!(err, NewsrecError::SessionError(_)));
}
