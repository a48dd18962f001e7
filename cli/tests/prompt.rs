mod common;

use common::TestApp;
use sixdegrees::DisplayOptions;
use sixdegrees::colors::ColorScheme;
use sixdegrees::prompt::{prompt_for_actor, run_interactive};
use sixdegrees_core::SearchConfig;
use std::io::Cursor;

fn run_session(input: &str) -> String {
    let test_app = TestApp::create();
    let colors = ColorScheme::new(false);
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();

    run_interactive(
        &test_app.app,
        &SearchConfig::default(),
        &DisplayOptions::default(),
        &colors,
        &mut input,
        &mut output,
    )
    .unwrap();

    String::from_utf8(output).unwrap()
}

#[test]
fn test_prompt_accepts_known_actor() {
    let test_app = TestApp::create();
    let mut input = Cursor::new(b"Bob\n".to_vec());
    let mut output = Vec::new();

    let name = prompt_for_actor("Actor or actress", &test_app.app, &mut input, &mut output).unwrap();

    assert_eq!(name, Some("Bob".to_string()));
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Actor or actress [or <enter> to quit]: "
    );
}

#[test]
fn test_prompt_retries_unknown_actor() {
    let test_app = TestApp::create();
    let mut input = Cursor::new(b"bob\r\nBob\r\n".to_vec());
    let mut output = Vec::new();

    let name = prompt_for_actor("Actor or actress", &test_app.app, &mut input, &mut output).unwrap();
    let transcript = String::from_utf8(output).unwrap();

    assert_eq!(name, Some("Bob".to_string()));
    assert!(transcript.contains(r#"We couldn't find "bob" in the movie database. Please try again."#));
    assert!(transcript.contains("Did you mean: Bob?"));
}

#[test]
fn test_prompt_stops_on_empty_line_or_eof() {
    let test_app = TestApp::create();
    let mut output = Vec::new();

    let mut empty_line = Cursor::new(b"\n".to_vec());
    assert_eq!(
        prompt_for_actor("Actor", &test_app.app, &mut empty_line, &mut output).unwrap(),
        None
    );

    let mut eof = Cursor::new(Vec::new());
    assert_eq!(
        prompt_for_actor("Actor", &test_app.app, &mut eof, &mut output).unwrap(),
        None
    );
}

#[test]
fn test_session_finds_path() {
    let transcript = run_session("Alice\nCarol\n\n");

    assert!(transcript.contains(r#"1.  Alice was in "Movie1" (2000) with Bob."#));
    assert!(transcript.contains(r#"2.  Bob was in "Movie2" (2001) with Carol."#));
    assert!(transcript.ends_with("Thanks for playing!\n"));
}

#[test]
fn test_session_same_actor_twice() {
    let transcript = run_session("Alice\nAlice\n\n");

    assert!(transcript.contains("Good one. This is only interesting if you specify two different people."));
    assert!(!transcript.contains("was in"));
}

#[test]
fn test_session_reports_missing_path() {
    let transcript = run_session("Alice\nDave\nCarol\nBob\n");

    assert!(transcript.contains(r#"No path found between "Alice" and "Dave""#));
    assert!(transcript.contains(r#"Carol was in "Movie2" (2001) with Bob."#));
    assert!(transcript.ends_with("Thanks for playing!\n"));
}
