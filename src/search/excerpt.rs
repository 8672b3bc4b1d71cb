//! Context windows around keyword occurrences.

use super::matcher::KeywordMatcher;

/// Marker added where an excerpt cuts the text.
pub const ELLIPSIS: &str = "...";

/// Returns the part of `text` around the first case-insensitive occurrence
/// of `phrase`, with `context` characters on each side.
///
/// A leading [`ELLIPSIS`] marks a window that does not start at the
/// beginning of the text, a trailing one a window that stops before its end.
/// If `phrase` does not occur, the first `2 * context` characters are
/// returned instead. All positions are counted in characters.
///
/// # Example
///
/// ```rust
/// use chatsift::search::excerpt;
///
/// assert_eq!(excerpt("hello world foo", "world", 3), "...lo world fo...");
/// assert_eq!(excerpt("hi there", "THERE", 50), "hi there");
/// assert_eq!(excerpt("abcdefgh", "zzz", 2), "abcd...");
/// ```
pub fn excerpt(text: &str, phrase: &str, context: usize) -> String {
    let anchor = KeywordMatcher::new(phrase)
        .ok()
        .and_then(|matcher| matcher.find_char_index(text));
    excerpt_at(text, anchor, phrase.chars().count(), context)
}

/// Builds an excerpt from an already located anchor (a character index).
pub(crate) fn excerpt_at(
    text: &str,
    anchor: Option<usize>,
    phrase_len: usize,
    context: usize,
) -> String {
    let len = text.chars().count();

    let Some(idx) = anchor else {
        let head = take_chars(text, 0, context.saturating_mul(2));
        return if len > context.saturating_mul(2) {
            format!("{head}{ELLIPSIS}")
        } else {
            head.to_string()
        };
    };

    let start = idx.saturating_sub(context);
    let end = len.min(idx.saturating_add(phrase_len).saturating_add(context));

    let mut out = String::new();
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(take_chars(text, start, end));
    if end < len {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Slices `text` by character positions `[start, end)`.
fn take_chars(text: &str, start: usize, end: usize) -> &str {
    let byte_at = |pos: usize| {
        text.char_indices()
            .nth(pos)
            .map_or(text.len(), |(offset, _)| offset)
    };
    let from = byte_at(start);
    let to = byte_at(end).max(from);
    &text[from..to]
}
