use regex_tester_compiler::{quote, CompileError, Outcome, Session};
use regex_tester_runtime::{MatchReport, Segment};
use yansi::Color::{Black, Red, Yellow};
use yansi::Paint;

const OPEN_MARKER: &str = "[";
const CLOSE_MARKER: &str = "]";
const ECHO_PREFIX: &str = "regex: ";

/// Renders the subject with every non-empty match highlighted, either with
/// colors or wrapped in brackets.
pub fn highlighted(report: &MatchReport, subject: &str, color: bool) -> String {
    report
        .segments(subject)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.to_string(),
            Segment::Highlighted(text) if color => text.fg(Black).bg(Yellow).to_string(),
            Segment::Highlighted(text) => format!("{}{}{}", OPEN_MARKER, text, CLOSE_MARKER),
        })
        .collect()
}

/// Renders the three views of a session: the quoted pattern, the result
/// text and the capture listing. A compile error that carries a position is
/// pointed at with a caret under the quoted pattern.
pub fn session(session: &Session, color: bool) -> String {
    let mut out = format!("{}{}\n", ECHO_PREFIX, session.quoted());

    match session.outcome() {
        Outcome::Idle => {}
        Outcome::CompileFailed(err) => {
            if let Some(column) = caret_column(err) {
                let caret = paint_error("^", color);
                out.push_str(&format!("{}{}\n", " ".repeat(column), caret));
            }
            out.push_str(&format!("{}\n", paint_error(err.message(), color)));
        }
        Outcome::MatchFailed(err) => {
            out.push_str(&format!("{}\n", paint_error(err.message(), color)));
        }
        Outcome::Matched(report @ MatchReport::NoMatches) => {
            out.push_str(&format!("{}\n", report.result_text(session.subject())));
        }
        Outcome::Matched(report) => {
            out.push_str(&format!(
                "{}\n\n{}\n",
                highlighted(report, session.subject(), color),
                report.capture_listing()
            ));
        }
    }

    out
}

/// Maps the byte position of a compile error in the effective pattern onto
/// a column of the echo line, accounting for inserted escapes.
fn caret_column(err: &CompileError) -> Option<usize> {
    let position = err.position()?;
    let prefix = err.pattern().get(..position)?;

    Some(ECHO_PREFIX.len() + quote(prefix).chars().count())
}

fn paint_error(message: &str, color: bool) -> String {
    if color {
        message.paint(Red).to_string()
    } else {
        message.to_string()
    }
}
