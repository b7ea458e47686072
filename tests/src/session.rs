use pretty_assertions::assert_eq;
use regex_tester_compiler::*;
use regex_tester_runtime::MatchReport;

fn pattern(source: &str, flags: &str) -> Event {
    Event::PatternChanged(PatternSpec::new(source, flags))
}

fn subject(text: &str) -> Event {
    Event::SubjectChanged(text.to_string())
}

#[test]
fn should_follow_keystroke_by_keystroke_edits() {
    let mut session = Session::new();
    session.apply(subject("ac abc"));

    // typing `a(b)?(c)` one character at a time passes through invalid
    // intermediate patterns.
    let typed = "a(b)?(c)";
    let states = (1..=typed.len())
        .map(|len| {
            session.apply(pattern(&typed[..len], ""));
            session.state()
        })
        .collect::<Vec<_>>();

    assert_eq!(
        vec![
            State::Matched,  // a
            State::Failed,   // a(
            State::Failed,   // a(b
            State::Matched,  // a(b)
            State::Matched,  // a(b)?
            State::Failed,   // a(b)?(
            State::Failed,   // a(b)?(c
            State::Matched,  // a(b)?(c)
        ],
        states
    );
    assert_eq!("ac\n2. c\n\nabc\n1. b\n2. c", session.capture_listing());
}

#[test]
fn should_never_match_a_stale_pattern() {
    let mut session = Session::new();
    session.apply(subject("ab"));
    session.apply(pattern("ab", ""));
    assert_eq!(State::Matched, session.state());

    // the valid matcher is replaced by the failure, not kept around.
    session.apply(pattern("ab(", ""));
    let update = session.apply(subject("ab ab"));

    assert_eq!(Update::default(), update);
    assert_eq!(State::Failed, session.state());
    assert!(session
        .compile_result()
        .map_or(false, |result| result.matcher().is_none()));
}

#[test]
fn should_match_new_subject_against_last_compiled_pattern() {
    let mut session = Session::new();
    session.apply(pattern("x", "i"));

    session.apply(subject("xX"));
    assert_eq!(vec![0..1, 1..2], highlights(&session));

    session.apply(subject("y"));
    assert_eq!(State::NoMatches, session.state());
    assert_eq!("No matches.", session.result_text());
}

#[test]
fn should_echo_effective_pattern() {
    let mut session = Session::new();

    session.apply(pattern("He said \"hi\"", ""));
    assert_eq!("He said \\\"hi\\\"", session.quoted());

    session.apply(pattern("\\t", "i"));
    assert_eq!("(?i)\\\\t", session.quoted());
}

fn highlights(session: &Session) -> Vec<std::ops::Range<usize>> {
    match session.outcome() {
        Outcome::Matched(report) => report.highlights(),
        _ => MatchReport::NoMatches.highlights(),
    }
}
