use newsrec_core::config::VectorizerConfig;
use newsrec_vectorize::CountVectorizer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn rows_stay_inside_vocabulary(docs in proptest::collection::vec("[a-z ]{0,60}", 1..20)) {
        let vectorizer = CountVectorizer::new(VectorizerConfig::unpruned());
        if let Ok((model, matrix)) = vectorizer.fit_transform(&docs) {
            prop_assert_eq!(matrix.len(), docs.len());
            for row in matrix.rows() {
                if let Some(max) = row.max_term() {
                    prop_assert!(max < model.vocabulary().len());
                }
            }
        }
    }

    #[test]
    fn transform_is_deterministic(docs in proptest::collection::vec("[a-z ]{1,40}", 1..10), query in "[a-z ]{0,40}") {
        let vectorizer = CountVectorizer::new(VectorizerConfig::unpruned());
        if let Ok(model) = vectorizer.fit(&docs) {
            prop_assert_eq!(model.transform(&query), model.transform(&query));
        }
    }

    #[test]
    fn unpruned_fit_covers_every_document_token(docs in proptest::collection::vec("[a-z]{2,8}( [a-z]{2,8}){0,5}", 1..10)) {
        let vectorizer = CountVectorizer::new(VectorizerConfig::unpruned());
        let (_, matrix) = vectorizer.fit_transform(&docs).unwrap();
        for row in matrix.rows() {
            prop_assert!(!row.is_zero());
        }
    }
}
