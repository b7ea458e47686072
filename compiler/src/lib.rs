//! Provides the compilation of user-entered patterns and the session that
//! keeps a compiled pattern and its match report up to date as the pattern
//! and subject are edited.
//!
//! # Example
//!
//! ```rust
//! // A pattern and its flags are compiled by a single function exposed in
//! // the `regex_tester_compiler` crate.
//! use regex_tester_compiler::{compile, PatternSpec};
//!
//! // Running a compiled pattern over a subject is accomplished via a single
//! // exposed function in the `regex_tester_runtime` crate.
//! use regex_tester_runtime::run;
//!
//! // Flags are applied as an inline flags group, `(?i)` in this case.
//! let spec = PatternSpec::new("a(b)?(c)", "i");
//!
//! let matcher = compile(&spec)
//!     .into_result()
//!     .expect("failed to compile");
//!
//! let report = run(&matcher, "AC abc").expect("failed to match");
//!
//! // Every match is listed followed by its participating groups. The first
//! // match has no group 1, so only group 2 is listed for it.
//! assert_eq!("AC\n2. C\n\nabc\n1. b\n2. c", report.capture_listing());
//! ```

pub mod compiler;
pub mod parser;
pub mod pattern;
mod quote;
pub mod session;

pub use compiler::{compile, compile_with, CompileError, CompileOptions, CompileResult};
pub use parser::{parse_literal, ParseErr};
pub use pattern::PatternSpec;
pub use quote::quote;
pub use session::{Event, Outcome, Session, State, Update};
