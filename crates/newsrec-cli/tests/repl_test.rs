use std::io::Cursor;

use newsrec_cli::{run, LoopExit};
use newsrec_core::{Article, Corpus, NewsrecConfig};
use newsrec_session::RecommendationSession;
use test_fixtures::synthetic_corpus;

fn session() -> RecommendationSession {
    let corpus = Corpus::new(
        synthetic_corpus(200)
            .into_iter()
            .map(|(title, text)| Article::new(title, text))
            .collect(),
    )
    .unwrap();
    let mut config = NewsrecConfig::default();
    config.session.seed = Some(21);
    RecommendationSession::new(corpus, &config).unwrap()
}

fn drive(session: &mut RecommendationSession, count: usize, input: &str) -> (LoopExit, String) {
    let mut output = Vec::new();
    let exit = run(session, count, &mut Cursor::new(input), &mut output).unwrap();
    (exit, String::from_utf8(output).unwrap())
}

#[test]
fn pick_then_invalid_choice_says_goodbye() {
    let mut session = session();
    let (exit, out) = drive(&mut session, 10, "1\n\n999\n");

    assert_eq!(exit, LoopExit::InvalidChoice);
    assert_eq!(session.rounds(), 1);
    assert!(out.contains("Press Enter"));
    assert!(out.contains("And some other news:"));
    assert!(out.contains("10. Story"));
    assert!(out.trim_end().ends_with("Invalid Choice. Goodbye!"));
}

#[test]
fn initial_round_has_no_far_section() {
    let mut session = session();
    let (exit, out) = drive(&mut session, 10, "0\n");

    assert_eq!(exit, LoopExit::InvalidChoice);
    assert!(!out.contains("And some other news:"));
    assert_eq!(session.rounds(), 0);
}

#[test]
fn unparsable_choice_ends_normally() {
    let mut session = session();
    let (exit, _) = drive(&mut session, 5, "first\n");
    assert_eq!(exit, LoopExit::InvalidChoice);
}

#[test]
fn closed_input_ends_the_loop() {
    let mut session = session();
    assert_eq!(drive(&mut session, 5, "").0, LoopExit::EndOfInput);

    let (exit, out) = drive(&mut session, 5, "2\n");
    assert_eq!(exit, LoopExit::EndOfInput);
    assert!(out.contains("article "));
    assert_eq!(session.rounds(), 0);
}

#[test]
fn several_rounds_follow_each_pick() {
    let mut session = session();
    let (exit, out) = drive(&mut session, 10, "3\n\n9\n\n1\n\nquit\n");

    assert_eq!(exit, LoopExit::InvalidChoice);
    assert_eq!(session.rounds(), 3);
    assert_eq!(out.matches("Here are some new recommendations").count(), 4);
}

#[test]
fn count_beyond_distinct_titles_is_an_error() {
    let mut session = session();
    let mut output = Vec::new();
    assert!(run(&mut session, 500, &mut Cursor::new("1\n"), &mut output).is_err());
}
