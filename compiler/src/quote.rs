/// Characters preceded by a backslash in a quoted echo: backspace, tab,
/// newline, form feed, carriage return, both quote characters and the
/// backslash itself.
const CHARS_TO_QUOTE: [char; 8] = ['\u{8}', '\t', '\n', '\u{c}', '\r', '"', '\'', '\\'];

/// Escapes a pattern for display as a string literal by inserting a
/// backslash before every character in [CHARS_TO_QUOTE].
///
/// The input is scanned from the last character to the first, so a
/// backslash inserted for one character is never itself revisited.
///
/// # Example
///
/// ```
/// use regex_tester_compiler::quote;
///
/// assert_eq!(r#"He said \"hi\""#, quote(r#"He said "hi""#));
/// assert_eq!(r"\\d+", quote(r"\d+"));
/// ```
pub fn quote(text: &str) -> String {
    let mut reversed = Vec::with_capacity(text.len());

    for c in text.chars().rev() {
        reversed.push(c);
        if CHARS_TO_QUOTE.contains(&c) {
            reversed.push('\\');
        }
    }

    reversed.into_iter().rev().collect()
}
