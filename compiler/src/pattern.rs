//! The user-facing pattern: raw source plus a string of inline mode flags.

/// A pattern as entered by the user. Neither field is validated; `source`
/// may be syntactically invalid and `flags` may contain letters the engine
/// rejects. Both are only checked when compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PatternSpec {
    pub source: String,
    pub flags: String,
}

impl PatternSpec {
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// A pattern with no flags set.
    pub fn unflagged(source: impl Into<String>) -> Self {
        Self::new(source, "")
    }

    /// Returns a copy of the pattern with its flags replaced.
    pub fn with_flags(self, flags: impl Into<String>) -> Self {
        Self {
            source: self.source,
            flags: flags.into(),
        }
    }

    /// Builds the pattern string actually handed to the engine. Flags,
    /// trimmed of surrounding whitespace, are prefixed as an inline flags
    /// group. Without flags the source is returned verbatim.
    ///
    /// # Example
    ///
    /// ```
    /// use regex_tester_compiler::PatternSpec;
    ///
    /// assert_eq!("(?i)ab", PatternSpec::new("ab", "i").effective_pattern());
    /// assert_eq!("ab", PatternSpec::new("ab", "").effective_pattern());
    /// ```
    pub fn effective_pattern(&self) -> String {
        match self.flags.trim() {
            "" => self.source.clone(),
            flags => format!("(?{}){}", flags, self.source),
        }
    }
}
