//! An interactive testing session: the single owner of the current compile
//! result and match report, driven by pattern and subject edits.
//!
//! Every [Event] is processed synchronously to completion. A pattern edit
//! always recompiles before anything is matched, so a report is never built
//! from a stale matcher. A subject edit only re-runs matching, and only when
//! the last compile succeeded.
//!
//! # Example
//!
//! ```
//! use regex_tester_compiler::{Event, Outcome, PatternSpec, Session};
//!
//! let mut session = Session::new();
//! session.apply(Event::SubjectChanged("ab ac".to_string()));
//! session.apply(Event::PatternChanged(PatternSpec::unflagged("a(b)")));
//!
//! match session.outcome() {
//!     Outcome::Matched(report) => assert_eq!("ab\n1. b", report.capture_listing()),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
use std::fmt::Display;

use regex_tester_runtime::{run, MatchError, MatchReport};

use super::compiler::{compile_with, CompileError, CompileOptions, CompileResult};
use super::pattern::PatternSpec;
use super::quote::quote;

/// An edit delivered by the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The pattern source or its flags changed.
    PatternChanged(PatternSpec),
    /// The subject text changed.
    SubjectChanged(String),
}

/// What the result area should currently display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No pattern has been entered yet.
    Idle,
    /// The current pattern failed to compile.
    CompileFailed(CompileError),
    /// The current pattern was run against the current subject.
    Matched(MatchReport),
    /// The engine failed while scanning the current subject.
    MatchFailed(MatchError),
}

/// The externally visible state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Failed,
    Matched,
    NoMatches,
    MatchFailed,
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            State::Idle => "idle",
            State::Failed => "failed",
            State::Matched => "matched",
            State::NoMatches => "no matches",
            State::MatchFailed => "match failed",
        };

        write!(f, "{}", repr)
    }
}

/// Records which stages ran while applying an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Update {
    pub recompiled: bool,
    pub rematched: bool,
}

#[derive(Debug)]
pub struct Session {
    options: CompileOptions,
    spec: Option<PatternSpec>,
    compiled: Option<CompileResult>,
    subject: String,
    quoted: String,
    outcome: Outcome,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_options(CompileOptions::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            options,
            spec: None,
            compiled: None,
            subject: String::new(),
            quoted: String::new(),
            outcome: Outcome::Idle,
        }
    }

    /// Applies a single edit, running every affected stage before returning.
    pub fn apply(&mut self, event: Event) -> Update {
        let update = match event {
            Event::PatternChanged(spec) => self.pattern_changed(spec),
            Event::SubjectChanged(subject) => self.subject_changed(subject),
        };

        log::debug!("session {} after {:?}", self.state(), update);
        update
    }

    fn pattern_changed(&mut self, spec: PatternSpec) -> Update {
        self.quoted = quote(&spec.effective_pattern());

        let compiled = compile_with(&spec, &self.options);
        self.spec = Some(spec);

        let rematched = match &compiled {
            CompileResult::Compiled(_) => true,
            CompileResult::Failed(err) => {
                self.outcome = Outcome::CompileFailed(err.clone());
                false
            }
        };

        // the previous matcher is dropped here, before any match runs.
        self.compiled = Some(compiled);
        if rematched {
            self.rematch();
        }

        Update {
            recompiled: true,
            rematched,
        }
    }

    fn subject_changed(&mut self, subject: String) -> Update {
        self.subject = subject;

        let rematched = self
            .compiled
            .as_ref()
            .map_or(false, CompileResult::is_compiled);
        if rematched {
            self.rematch();
        }

        Update {
            recompiled: false,
            rematched,
        }
    }

    fn rematch(&mut self) {
        if let Some(matcher) = self.compiled.as_ref().and_then(CompileResult::matcher) {
            self.outcome = match run(matcher, &self.subject) {
                Ok(report) => Outcome::Matched(report),
                Err(err) => Outcome::MatchFailed(err),
            };
        }
    }

    pub fn state(&self) -> State {
        match &self.outcome {
            Outcome::Idle => State::Idle,
            Outcome::CompileFailed(_) => State::Failed,
            Outcome::Matched(MatchReport::NoMatches) => State::NoMatches,
            Outcome::Matched(MatchReport::Matches(_)) => State::Matched,
            Outcome::MatchFailed(_) => State::MatchFailed,
        }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The result of the most recent compile, `None` before the first
    /// pattern edit.
    pub fn compile_result(&self) -> Option<&CompileResult> {
        self.compiled.as_ref()
    }

    pub fn spec(&self) -> Option<&PatternSpec> {
        self.spec.as_ref()
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The quoted echo of the current effective pattern.
    pub fn quoted(&self) -> &str {
        &self.quoted
    }

    /// The text for the result area: the compile or match error message,
    /// [regex_tester_runtime::NO_MATCHES], or the subject itself.
    pub fn result_text(&self) -> &str {
        match &self.outcome {
            Outcome::Idle => "",
            Outcome::CompileFailed(err) => err.message(),
            Outcome::MatchFailed(err) => err.message(),
            Outcome::Matched(report) => report.result_text(&self.subject),
        }
    }

    /// The capture listing for the current report, empty in any other state.
    pub fn capture_listing(&self) -> String {
        match &self.outcome {
            Outcome::Matched(report) => report.capture_listing(),
            _ => String::new(),
        }
    }
}
