use pretty_assertions::assert_eq;
use regex_tester_compiler::*;
use regex_tester_runtime::*;

fn report_for(source: &str, flags: &str, subject: &str) -> MatchReport {
    let matcher = compile(&PatternSpec::new(source, flags))
        .into_result()
        .expect("pattern must compile");

    run(&matcher, subject).expect("matching must succeed")
}

fn summary(report: &MatchReport) -> Vec<(usize, usize, String, Vec<Option<String>>)> {
    report
        .matches()
        .iter()
        .map(|m| (m.start, m.end, m.text.clone(), m.groups.clone()))
        .collect()
}

#[test]
fn should_produce_one_empty_match_per_position() {
    let report = report_for("", "", "ab");

    assert_eq!(vec![0..0, 1..1, 2..2], report.highlights());
    assert_eq!("", report.capture_listing());
}

#[test]
fn should_report_absent_trailing_group() {
    let report = report_for("a(b)(c)?", "", "ab ac");

    assert_eq!(
        vec![(0, 2, "ab".to_string(), vec![Some("b".to_string()), None])],
        summary(&report)
    );
}

#[test]
fn should_resume_scan_at_previous_match_end() {
    let report = report_for("a(b)?(c)", "", "ac abc");

    assert_eq!(
        vec![
            (0, 2, "ac".to_string(), vec![None, Some("c".to_string())]),
            (
                3,
                6,
                "abc".to_string(),
                vec![Some("b".to_string()), Some("c".to_string())]
            ),
        ],
        summary(&report)
    );
}

#[test]
fn should_return_no_matches_sentinel() {
    let report = report_for("xyz", "", "no match here");

    assert_eq!(MatchReport::NoMatches, report);
    assert_eq!("", report.capture_listing());
    assert_eq!("No matches.", report.result_text("no match here"));
}

#[test]
fn should_honour_inline_flags() {
    let input_output = vec![
        ("^b", "m", "a\nb", vec![2..3]),
        ("^b", "", "a\nb", vec![]),
        ("a.b", "s", "a\nb", vec![0..3]),
        ("a.b", "", "a\nb", vec![]),
        ("a b # comment", "x", "ab a b", vec![0..2]),
        ("AB", "i", "ab Ab", vec![0..2, 3..5]),
    ];

    for (test_id, (source, flags, subject, expected)) in input_output.into_iter().enumerate() {
        assert_eq!(
            (test_id, expected),
            (test_id, report_for(source, flags, subject).highlights())
        )
    }
}

#[test]
fn should_support_backtracking_constructs() {
    let report = report_for(r"(\w+) \1", "", "hey hey you you me");

    assert_eq!(
        vec!["hey hey", "you you"],
        report
            .matches()
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
    );
    assert_eq!("hey hey\n1. hey\n\nyou you\n1. you", report.capture_listing());
}

#[test]
fn should_include_empty_match_after_non_empty_match() {
    // resuming at the end of "aa" finds the empty match before "b".
    let report = report_for("a*", "", "aab");

    assert_eq!(vec![0..2, 2..2, 3..3], report.highlights());
}

#[test]
fn should_reject_invalid_patterns_and_flags() {
    let inputs = vec![("a(b", ""), ("(?<name", ""), ("ab", "z"), ("a{2,1}", "")];

    for (test_id, (source, flags)) in inputs.into_iter().enumerate() {
        let result = compile(&PatternSpec::new(source, flags));
        assert!(!result.is_compiled(), "{}", test_id);
    }
}
