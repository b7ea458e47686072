//! Parses pattern literals of the form `/source/flags` into a [PatternSpec].
//!
//! Inside the source, `\/` stands for a literal delimiter and has its
//! backslash removed. Every other escape sequence is passed through untouched
//! for the regex engine to interpret. Everything following the closing
//! delimiter is taken as the flags.
use parcel::parsers::character::expect_character;
use parcel::prelude::v1::*;

use super::pattern::PatternSpec;

const DELIMITER: char = '/';
const ESCAPE: char = '\\';

#[derive(PartialEq)]
pub enum ParseErr {
    MissingOpeningDelimiter,
    UnterminatedPattern,
    Undefined(String),
}

impl std::fmt::Debug for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOpeningDelimiter => {
                write!(f, "pattern literal must start with '{}'", DELIMITER)
            }
            Self::UnterminatedPattern => {
                write!(f, "pattern literal is missing its closing '{}'", DELIMITER)
            }
            Self::Undefined(err) => write!(f, "undefined parse error: {}", err),
        }
    }
}

impl std::fmt::Display for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ParseErr {}

/// Parses a `/source/flags` literal.
///
/// # Example
///
/// ```
/// use regex_tester_compiler::{parse_literal, PatternSpec};
///
/// assert_eq!(
///     Ok(PatternSpec::new(r"a/(\d+)", "i")),
///     parse_literal(r"/a\/(\d+)/i")
/// );
/// ```
pub fn parse_literal(input: &str) -> Result<PatternSpec, ParseErr> {
    let input = input.chars().enumerate().collect::<Vec<(usize, char)>>();

    if input.first().map(|(_, c)| *c) != Some(DELIMITER) {
        return Err(ParseErr::MissingOpeningDelimiter);
    }

    literal()
        .parse(&input)
        .map_err(|err| ParseErr::Undefined(format!("unspecified parse error occured: {}", err)))
        .and_then(|ms| match ms {
            MatchStatus::Match { inner, .. } => Ok(inner),
            MatchStatus::NoMatch(..) => Err(ParseErr::UnterminatedPattern),
        })
}

fn literal<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], PatternSpec> {
    parcel::join(
        parcel::right(parcel::join(
            expect_character(DELIMITER),
            parcel::zero_or_more(source_fragment()),
        )),
        parcel::right(parcel::join(
            expect_character(DELIMITER),
            parcel::zero_or_more(any_character()),
        )),
    )
    .map(|(source, flags)| {
        PatternSpec::new(
            source.concat(),
            flags.into_iter().collect::<String>(),
        )
    })
}

/// Matches one unit of pattern source: an escaped delimiter, any other
/// escape pair kept verbatim, or a single non-delimiter character.
fn source_fragment<'a>() -> impl Parser<'a, &'a [(usize, char)], String> {
    move |input: &'a [(usize, char)]| match input.get(0..2) {
        Some(&[(escape_pos, ESCAPE), (escaped_pos, escaped)]) => {
            let fragment = match escaped {
                DELIMITER => DELIMITER.to_string(),
                other => [ESCAPE, other].iter().collect(),
            };

            Ok(MatchStatus::Match {
                span: escape_pos..escaped_pos + 1,
                remainder: &input[2..],
                inner: fragment,
            })
        }
        _ => match input.first() {
            Some(&(_, DELIMITER)) | None => Ok(MatchStatus::NoMatch(input)),
            Some(&(pos, next)) => Ok(MatchStatus::Match {
                span: pos..pos + 1,
                remainder: &input[1..],
                inner: next.to_string(),
            }),
        },
    }
}

fn any_character<'a>() -> impl Parser<'a, &'a [(usize, char)], char> {
    move |input: &'a [(usize, char)]| match input.first() {
        Some(&(pos, next)) => Ok(MatchStatus::Match {
            span: pos..pos + 1,
            remainder: &input[1..],
            inner: next,
        }),
        None => Ok(MatchStatus::NoMatch(input)),
    }
}
