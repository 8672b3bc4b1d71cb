//! Case-insensitive literal keyword matching.

use std::borrow::Cow;

use regex::{Captures, Regex, RegexBuilder};

use crate::error::ChatsiftError;

/// A compiled, case-insensitive literal matcher for one keyword.
///
/// Regex metacharacters in the keyword are escaped, so `"c++"` matches the
/// text `C++` and nothing else. There are no word boundaries: `"art"` matches
/// inside `"party"`.
///
/// # Example
///
/// ```rust
/// use chatsift::search::KeywordMatcher;
///
/// let matcher = KeywordMatcher::new("c++")?;
/// assert!(matcher.is_match("I write C++ daily"));
/// assert!(!matcher.is_match("I write C daily"));
/// # Ok::<(), chatsift::ChatsiftError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
    regex: Regex,
}

impl KeywordMatcher {
    /// Compiles a matcher for `keyword`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::Pattern`] if the escaped keyword cannot be
    /// compiled, e.g. because it exceeds the regex size limit.
    pub fn new(keyword: impl Into<String>) -> Result<Self, ChatsiftError> {
        let keyword = keyword.into();
        let regex = RegexBuilder::new(&regex::escape(&keyword))
            .case_insensitive(true)
            .build()
            .map_err(|e| ChatsiftError::pattern(keyword.clone(), e))?;
        Ok(Self { keyword, regex })
    }

    /// The keyword as given.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns `true` if the keyword occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Character index of the first occurrence in `text`.
    pub fn find_char_index(&self, text: &str) -> Option<usize> {
        self.regex
            .find(text)
            .map(|m| text[..m.start()].chars().count())
    }

    /// Wraps every occurrence in `open`/`close`, keeping the original casing.
    pub fn wrap<'t>(&self, text: &'t str, open: &str, close: &str) -> Cow<'t, str> {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| format!("{open}{}{close}", &caps[0]))
    }
}
