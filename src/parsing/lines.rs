//! Line splitting for transcript text.
//!
//! Exports from different devices end lines differently: `\n`, `\r\n`, a
//! lone `\r`, or one of the Unicode separators. [`split_lines`] treats all of
//! them as line boundaries.

/// Returns `true` for characters that end a line.
///
/// `\r\n` is a single boundary; see [`split_lines`].
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits `text` into lines without their terminators.
///
/// A terminator at the very end does not produce a trailing empty line, and
/// empty input produces no lines.
///
/// # Example
///
/// ```rust
/// use chatsift::parsing::split_lines;
///
/// let lines: Vec<&str> = split_lines("a\r\nb\rc\u{2028}d\n").collect();
/// assert_eq!(lines, ["a", "b", "c", "d"]);
/// ```
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some((i, c)) = self.rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..i];
        let mut end = i + c.len_utf8();
        if c == '\r' && self.rest[end..].starts_with('\n') {
            end += 1;
        }
        self.rest = &self.rest[end..];
        Some(line)
    }
}
