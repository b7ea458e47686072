use std::fmt::Display;
use std::ops::Range;

/// The result text displayed in place of the subject when a pattern finds
/// nothing.
pub const NO_MATCHES: &str = "No matches.";

/// A single match found while scanning a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Character offset of the first matched character.
    pub start: usize,
    /// Character offset one past the last matched character.
    pub end: usize,
    /// The same span expressed as byte offsets into the subject.
    pub bytes: Range<usize>,
    /// The text of the whole match.
    pub text: String,
    /// Text captured by groups `1..=n`. `None` marks a group that did not
    /// participate in this match, as opposed to one that captured `""`.
    pub groups: Vec<Option<String>>,
}

impl MatchRecord {
    /// Returns the capture for a 1-based group index, `None` if the group
    /// does not exist or did not participate.
    pub fn group(&self, idx: usize) -> Option<&str> {
        idx.checked_sub(1)
            .and_then(|idx| self.groups.get(idx))
            .and_then(|group| group.as_deref())
    }

    /// Returns true for a zero-width match.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Renders the whole-match text followed by one `"<index>. <text>"` line per
/// participating group.
impl Display for MatchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)?;

        for (idx, group) in self.groups.iter().enumerate() {
            if let Some(text) = group {
                write!(f, "\n{}. {}", idx + 1, text)?;
            }
        }

        Ok(())
    }
}

/// The outcome of a full scan of a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReport {
    /// The scan completed without finding a single match.
    NoMatches,
    /// One or more matches, in subject order. Never empty.
    Matches(Vec<MatchRecord>),
}

impl MatchReport {
    /// Builds a report, collapsing an empty record list into the
    /// [MatchReport::NoMatches] sentinel.
    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        if records.is_empty() {
            Self::NoMatches
        } else {
            Self::Matches(records)
        }
    }

    pub fn matches(&self) -> &[MatchRecord] {
        match self {
            Self::NoMatches => &[],
            Self::Matches(records) => records,
        }
    }

    pub fn is_no_matches(&self) -> bool {
        matches!(self, Self::NoMatches)
    }

    /// Half-open character spans to highlight over the subject, one per
    /// match.
    pub fn highlights(&self) -> Vec<Range<usize>> {
        self.matches().iter().map(|m| m.start..m.end).collect()
    }

    /// The text shown in the result area: the subject itself when anything
    /// matched, [NO_MATCHES] otherwise.
    pub fn result_text<'a>(&self, subject: &'a str) -> &'a str {
        match self {
            Self::NoMatches => NO_MATCHES,
            Self::Matches(_) => subject,
        }
    }

    /// Lists every match and its participating groups, with a blank line
    /// between matches. Surrounding whitespace is trimmed from the listing.
    pub fn capture_listing(&self) -> String {
        self.matches()
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
            .trim()
            .to_string()
    }

    /// Splits the subject into alternating plain and highlighted segments.
    /// Empty matches produce no highlighted segment.
    pub fn segments<'a>(&self, subject: &'a str) -> Vec<Segment<'a>> {
        let mut segments = vec![];
        let mut last = 0;

        for Range { start, end } in self
            .matches()
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| m.bytes.clone())
        {
            if start > last {
                segments.push(Segment::Plain(&subject[last..start]));
            }
            segments.push(Segment::Highlighted(&subject[start..end]));
            last = end;
        }

        if last < subject.len() {
            segments.push(Segment::Plain(&subject[last..]));
        }

        segments
    }
}

impl Display for MatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.capture_listing())
    }
}

/// A slice of the subject, tagged by whether it falls inside a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Highlighted(&'a str),
}
