//! Provides the compilation of a [PatternSpec] into a runnable [Matcher].
//!
//! # Example
//!
//! ```
//! use regex_tester_compiler::{compile, CompileResult, PatternSpec};
//!
//! let result = compile(&PatternSpec::new("a(b)", "i"));
//! assert!(result.is_compiled());
//!
//! // engine diagnostics are reported, never raised.
//! match compile(&PatternSpec::unflagged("a(b")) {
//!     CompileResult::Failed(err) => assert!(!err.message().is_empty()),
//!     CompileResult::Compiled(_) => unreachable!(),
//! }
//! ```
use std::fmt::Display;

use regex_tester_runtime::Matcher;

use super::pattern::PatternSpec;

/// Engine settings applied while compiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Upper bound on backtracking steps for a single search. `None` keeps
    /// the engine's default.
    pub backtrack_limit: Option<usize>,
}

impl CompileOptions {
    pub fn with_backtrack_limit(self, backtrack_limit: usize) -> Self {
        Self {
            backtrack_limit: Some(backtrack_limit),
        }
    }
}

/// A pattern the engine refused to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pattern: String,
    message: String,
    position: Option<usize>,
}

impl CompileError {
    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            message: message.into(),
            position: None,
        }
    }

    pub fn with_position(self, position: usize) -> Self {
        Self {
            position: Some(position),
            ..self
        }
    }

    /// The effective pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The engine's diagnostic text, unmodified.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the effective pattern at which parsing failed, when
    /// the engine reports one.
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CompileError {}

impl From<(&str, fancy_regex::Error)> for CompileError {
    fn from((pattern, err): (&str, fancy_regex::Error)) -> Self {
        let compile_err = CompileError::new(pattern, err.to_string());

        match err {
            fancy_regex::Error::ParseError(position, _) => compile_err.with_position(position),
            _ => compile_err,
        }
    }
}

/// The outcome of compiling a pattern. Exactly one of a ready matcher or a
/// compile error.
#[derive(Debug, Clone)]
pub enum CompileResult {
    Compiled(Matcher),
    Failed(CompileError),
}

impl CompileResult {
    pub fn is_compiled(&self) -> bool {
        matches!(self, Self::Compiled(_))
    }

    pub fn matcher(&self) -> Option<&Matcher> {
        match self {
            Self::Compiled(matcher) => Some(matcher),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&CompileError> {
        match self {
            Self::Compiled(_) => None,
            Self::Failed(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<Matcher, CompileError> {
        match self {
            Self::Compiled(matcher) => Ok(matcher),
            Self::Failed(err) => Err(err),
        }
    }
}

impl From<Result<Matcher, CompileError>> for CompileResult {
    fn from(src: Result<Matcher, CompileError>) -> Self {
        match src {
            Ok(matcher) => Self::Compiled(matcher),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Compiles a pattern with the engine's default settings.
pub fn compile(spec: &PatternSpec) -> CompileResult {
    compile_with(spec, &CompileOptions::default())
}

/// Compiles the effective pattern of `spec`. Any engine failure, whether a
/// syntax error, an unknown flag or an unsupported construct, is returned as
/// [CompileResult::Failed] carrying the engine's own message.
pub fn compile_with(spec: &PatternSpec, options: &CompileOptions) -> CompileResult {
    let pattern = spec.effective_pattern();

    let mut builder = fancy_regex::RegexBuilder::new(&pattern);
    if let Some(limit) = options.backtrack_limit {
        builder.backtrack_limit(limit);
    }

    let result = builder
        .build()
        .map(Matcher::from)
        .map_err(|err| CompileError::from((pattern.as_str(), err)));

    match &result {
        Ok(matcher) => log::debug!(
            "compiled {:?} with {} group(s)",
            pattern,
            matcher.group_count()
        ),
        Err(err) => log::debug!("failed to compile {:?}: {}", pattern, err),
    }

    CompileResult::from(result)
}
