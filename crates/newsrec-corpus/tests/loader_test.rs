use std::io::Cursor;

use newsrec_core::config::{CorpusConfig, CorpusFormat};
use newsrec_core::errors::{CorpusError, NewsrecError};
use newsrec_corpus::{load_csv_from_reader, load_json_from_str, CorpusLoader};
use test_fixtures::{fixture_path, load_fixture_text};

#[test]
fn csv_fixture_drops_exact_duplicate_text() {
    let corpus = CorpusLoader::default()
        .load(fixture_path("corpora/headlines.csv"))
        .unwrap();
    assert_eq!(corpus.len(), 5);
    assert_eq!(corpus.title(0), Some("Markets rally"));
    assert_eq!(corpus.title(1), Some("Markets rally"));
    assert_eq!(corpus.title(4), Some("Cinema returns"));
}

#[test]
fn csv_blank_title_falls_back_to_text_prefix() {
    let corpus = CorpusLoader::default()
        .load(fixture_path("corpora/headlines.csv"))
        .unwrap();
    assert_eq!(corpus.title(3), Some("A short story about rugby fans"));
}

#[test]
fn json_fixture_fills_null_missing_and_blank_titles() {
    let corpus = CorpusLoader::default()
        .load(fixture_path("corpora/headlines.json"))
        .unwrap();
    let titles: Vec<&str> = corpus.iter().map(|(_, a)| a.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Vaccine rollout",
            "Football clubs in Wales agreed",
            "Housing prices in Brussels cli",
            "Software firms in Ohio hired m",
        ]
    );
}

#[test]
fn fallback_length_is_configurable() {
    let loader = CorpusLoader::new(CorpusConfig {
        title_fallback_chars: 8,
        ..CorpusConfig::default()
    });
    let corpus = loader
        .load_json_from_str(&load_fixture_text("corpora/headlines.json"))
        .unwrap();
    assert_eq!(corpus.title(1), Some("Football"));
}

#[test]
fn unknown_extension_is_unsupported() {
    let err = CorpusLoader::default().load("news.xml").unwrap_err();
    assert!(matches!(
        err,
        NewsrecError::CorpusError(CorpusError::UnsupportedFormat { ref extension }) if extension == "xml"
    ));
}

#[test]
fn explicit_format_reads_any_extension() {
    let loader = CorpusLoader::new(CorpusConfig {
        format: Some(CorpusFormat::Csv),
        ..CorpusConfig::default()
    });
    let err = loader.load("does/not/exist.data").unwrap_err();
    assert!(matches!(err, NewsrecError::CorpusError(CorpusError::Io { .. })));
}

#[test]
fn missing_text_names_the_record() {
    let err = load_json_from_str(r#"[{"title": "a", "text": "b"}, {"title": "only"}]"#).unwrap_err();
    assert!(matches!(
        err,
        NewsrecError::CorpusError(CorpusError::MissingText { record: 1 })
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = load_json_from_str("{ not json").unwrap_err();
    assert!(matches!(err, NewsrecError::CorpusError(CorpusError::Parse { .. })));
}

#[test]
fn csv_without_text_column_is_missing_text() {
    let err = load_csv_from_reader(Cursor::new("title,body\nA,B\n")).unwrap_err();
    assert!(matches!(
        err,
        NewsrecError::CorpusError(CorpusError::MissingText { record: 0 })
    ));
}

#[test]
fn extra_columns_are_ignored() {
    let csv = "id,title,text,category\n1,First,Body one,tech\n2,Second,Body two,sport\n";
    let corpus = load_csv_from_reader(Cursor::new(csv)).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.article(1).unwrap().text, "Body two");
}

#[test]
fn sample_is_reproducible_under_a_seed() {
    let config = CorpusConfig {
        sample: Some(3),
        ..CorpusConfig::default()
    };
    let load = |seed| {
        CorpusLoader::new(config.clone())
            .with_seed(Some(seed))
            .load(fixture_path("corpora/headlines.csv"))
            .unwrap()
            .into_articles()
    };
    let first = load(17);
    assert_eq!(first.len(), 3);
    assert_eq!(first, load(17));
}

#[test]
fn sample_larger_than_corpus_keeps_everything() {
    let loader = CorpusLoader::new(CorpusConfig {
        sample: Some(50),
        ..CorpusConfig::default()
    })
    .with_seed(Some(1));
    let corpus = loader.load(fixture_path("corpora/headlines.json")).unwrap();
    assert_eq!(corpus.len(), 4);
}
