//! Provides the match engine: running a compiled [Matcher] against a subject
//! string and collecting every non-overlapping match, left to right, into a
//! [MatchReport].
//!
//! # Example
//!
//! ```rust
//! use regex_tester_runtime::{run, Matcher, MatchReport};
//!
//! // Matchers are normally produced by `regex_tester_compiler::compile`. Any
//! // `fancy_regex::Regex` can be wrapped directly.
//! let matcher = Matcher::from(fancy_regex::Regex::new("a(b)?(c)").unwrap());
//!
//! let report = run(&matcher, "ac abc").expect("matching failed");
//!
//! // Spans are half-open character offsets into the subject. Groups that did
//! // not participate in a match are reported as `None`.
//! let spans = report.highlights();
//! assert_eq!(vec![0..2, 3..6], spans);
//! assert_eq!(
//!     vec![None, Some("c".to_string())],
//!     report.matches()[0].groups
//! );
//!
//! let report = run(&matcher, "xyz").expect("matching failed");
//! assert_eq!(MatchReport::NoMatches, report);
//! ```

mod report;

pub use report::{MatchRecord, MatchReport, Segment, NO_MATCHES};

use std::fmt::{Debug, Display};
use std::sync::Arc;

/// An opaque, ready-to-run compiled pattern. Clones share the underlying
/// engine program.
#[derive(Clone)]
pub struct Matcher {
    regex: Arc<fancy_regex::Regex>,
}

impl Matcher {
    /// The pattern string the matcher was compiled from, including any
    /// inline flags group.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the number of capture groups in the pattern, not counting the
    /// implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }
}

impl From<fancy_regex::Regex> for Matcher {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self {
            regex: Arc::new(regex),
        }
    }
}

impl Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Matcher").field(&self.regex.as_str()).finish()
    }
}

/// A failure raised by the engine while iterating matches, such as exceeding
/// the backtracking limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchError {
    message: String,
}

impl MatchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The engine's diagnostic text, unmodified.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for MatchError {}

/// Translates monotonically increasing byte offsets into character offsets
/// without rescanning the subject from the start.
struct CharOffsets<'a> {
    subject: &'a str,
    byte_offset: usize,
    char_offset: usize,
}

impl<'a> CharOffsets<'a> {
    fn new(subject: &'a str) -> Self {
        Self {
            subject,
            byte_offset: 0,
            char_offset: 0,
        }
    }

    fn char_offset_of(&mut self, byte_offset: usize) -> usize {
        if byte_offset < self.byte_offset {
            // restart the count for a backwards step.
            self.byte_offset = 0;
            self.char_offset = 0;
        }

        self.char_offset += self.subject[self.byte_offset..byte_offset].chars().count();
        self.byte_offset = byte_offset;
        self.char_offset
    }
}

/// Executes a matcher against a subject, collecting all non-overlapping
/// matches from left to right.
///
/// The first search begins at offset 0. After a non-empty match the next
/// search begins at that match's end; after an empty match it begins one
/// character further, so the scan always makes forward progress. An empty
/// match at the end of the subject terminates the scan.
///
/// When no match is found the [MatchReport::NoMatches] sentinel is returned.
pub fn run(matcher: &Matcher, subject: &str) -> Result<MatchReport, MatchError> {
    let group_count = matcher.group_count();
    let subject_len = subject.len();

    let mut offsets = CharOffsets::new(subject);
    let mut records = vec![];
    let mut search_start = 0;

    while search_start <= subject_len {
        let captures = match matcher.regex.captures_from_pos(subject, search_start) {
            Ok(Some(captures)) => captures,
            Ok(None) => break,
            Err(e) => {
                log::debug!("search from byte {} failed: {}", search_start, e);
                return Err(MatchError::new(e.to_string()));
            }
        };

        // group 0 always participates in a successful match.
        let whole = match captures.get(0) {
            Some(whole) => whole,
            None => break,
        };
        let (byte_start, byte_end) = (whole.start(), whole.end());

        let groups = (1..=group_count)
            .map(|idx| captures.get(idx).map(|group| group.as_str().to_string()))
            .collect();

        let start = offsets.char_offset_of(byte_start);
        let end = offsets.char_offset_of(byte_end);
        log::trace!("match [{}, {}) {:?}", start, end, whole.as_str());

        records.push(MatchRecord {
            start,
            end,
            bytes: byte_start..byte_end,
            text: whole.as_str().to_string(),
            groups,
        });

        search_start = if byte_end > byte_start {
            byte_end
        } else {
            match subject[byte_end..].chars().next() {
                Some(next) => byte_end + next.len_utf8(),
                None => break,
            }
        };
    }

    Ok(MatchReport::from_records(records))
}
