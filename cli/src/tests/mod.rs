use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn cli_run_highlights_matches_and_lists_captures() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("run")
        .arg("a(b)?(c)")
        .arg("ac abc")
        .assert()
        .success()
        .stdout("regex: a(b)?(c)\n[ac] [abc]\n\nac\n2. c\n\nabc\n1. b\n2. c\n");
}

#[test]
fn cli_run_applies_flags() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("run")
        .arg("--flags=i")
        .arg("ab")
        .arg("AB ab")
        .assert()
        .success()
        .stdout("regex: (?i)ab\n[AB] [ab]\n\nAB\n\nab\n");
}

#[test]
fn cli_run_no_matches() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("run")
        .arg("xyz")
        .arg("no match here")
        .assert()
        .success()
        .stdout("regex: xyz\nNo matches.\n");
}

#[test]
fn cli_run_quotes_pattern() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("run")
        .arg(r#""(\w+)""#)
        .arg(r#"say "hi""#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"regex: \"(\\w+)\""#));
}

#[test]
fn cli_run_invalid_pattern() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("run")
        .arg("a(b")
        .arg("ab")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("regex: a(b\n"))
        .stderr(predicate::str::contains("error: pattern failed to compile"));
}

#[test]
fn cli_run_points_at_compile_error() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("run")
        .arg("a)b")
        .arg("ab")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("regex: a)b\n        ^\n"));
}

#[test]
fn cli_run_reads_subject_from_file() {
    let subject = config_file("first line\nsecond line\n");

    Command::cargo_bin("retest")
        .unwrap()
        .arg("run")
        .arg("(?m)^(\\w+)")
        .arg("--input")
        .arg(subject.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("first\n1. first\n\nsecond\n1. second\n"));
}

#[test]
fn cli_run_reads_subject_from_stdin() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("run")
        .arg("b+")
        .write_stdin("abba")
        .assert()
        .success()
        .stdout("regex: b+\na[bb]a\n\nbb\n");
}

#[test]
fn cli_run_backtrack_limit() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("run")
        .arg("--flags=i")
        .arg("--backtrack-limit=100000")
        .arg("(a|b|ab)*(?=c)")
        .arg("abababababababababababababababababababababababababababab")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: matching stopped"));
}

#[test]
fn cli_run_uses_config_flags() {
    let config = config_file("flags = \"i\"\n");

    Command::cargo_bin("retest")
        .unwrap()
        .arg("--config")
        .arg(config.path())
        .arg("run")
        .arg("ab")
        .arg("AB")
        .assert()
        .success()
        .stdout("regex: (?i)ab\n[AB]\n\nAB\n");
}

#[test]
fn cli_invalid_config() {
    let config = config_file("unknown_option = 1\n");

    Command::cargo_bin("retest")
        .unwrap()
        .arg("--config")
        .arg(config.path())
        .arg("run")
        .arg("ab")
        .arg("ab")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: can not load config file"));
}

#[test]
fn cli_repl_applies_each_edit() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("repl")
        .write_stdin("ab ac\n/a(b)/\n:flags i\nAB\n:quit\nnever read\n")
        .assert()
        .success()
        .stdout(
            "regex: \n\
             regex: a(b)\n[ab] ac\n\nab\n1. b\n\
             regex: (?i)a(b)\n[ab] ac\n\nab\n1. b\n\
             regex: (?i)a(b)\n[AB]\n\nAB\n1. B\n",
        );
}

#[test]
fn cli_repl_applies_default_flags_to_blank_literal_flags() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("repl")
        .arg("--flags=i")
        .write_stdin("AB\n/ab/ \n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("regex: (?i)ab\n[AB]\n\nAB\n"));
}

#[test]
fn cli_repl_keeps_compile_error_across_subject_edits() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("repl")
        .write_stdin("/a(b/\nab\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches.").not())
        .stdout(predicate::str::contains("[ab]").not());
}

#[test]
fn cli_repl_reports_bad_input_and_continues() {
    Command::cargo_bin("retest")
        .unwrap()
        .arg("repl")
        .write_stdin("/ab\n:nope\n/ab/\nab\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("missing its closing '/'"))
        .stderr(predicate::str::contains("unknown command `:nope`"))
        .stdout(predicate::str::ends_with("regex: ab\n[ab]\n\nab\n"));
}
