//! Annotated transcript rendering.
//!
//! Every message is rendered with each keyword occurrence wrapped in markers
//! and line breaks replaced, ready to drop into an HTML page.
//!
//! Keywords are applied one after another to the already-marked text, so a
//! later keyword can match inside the markers an earlier one inserted (for
//! example the keyword `mark` with the default HTML markers). Overlapping
//! occurrences are not merged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::config::HighlightConfig;

use super::matcher::KeywordMatcher;

/// One message of the highlighted transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedLine {
    pub id: u64,
    #[serde(default, alias = "date")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: String,
    pub html: String,
}

/// Highlights `keywords` in every message with the default HTML markers.
///
/// # Example
///
/// ```rust
/// use chatsift::Message;
/// use chatsift::search::highlight;
///
/// let messages = vec![Message::new(1, "Ana", "Hello\nworld")];
/// let lines = highlight(&messages, &["hello"]);
///
/// assert_eq!(lines[0].html, "<mark>Hello</mark><br>world");
/// ```
pub fn highlight<S: AsRef<str>>(messages: &[Message], keywords: &[S]) -> Vec<HighlightedLine> {
    highlight_with(messages, keywords, &HighlightConfig::default())
}

/// Highlights `keywords` in every message with custom markers.
///
/// Produces exactly one line per message, in order. A keyword that cannot
/// be compiled into a matcher is skipped.
pub fn highlight_with<S: AsRef<str>>(
    messages: &[Message],
    keywords: &[S],
    config: &HighlightConfig,
) -> Vec<HighlightedLine> {
    let matchers: Vec<KeywordMatcher> = keywords
        .iter()
        .filter_map(|kw| match KeywordMatcher::new(kw.as_ref()) {
            Ok(matcher) => Some(matcher),
            Err(e) => {
                tracing::warn!(error = %e, "skipping keyword in highlight");
                None
            }
        })
        .collect();

    messages
        .iter()
        .map(|message| {
            let mut html = message.text.clone();
            for matcher in &matchers {
                html = matcher
                    .wrap(&html, &config.open, &config.close)
                    .into_owned();
            }
            HighlightedLine {
                id: message.id,
                timestamp: message.timestamp,
                author: message.author.clone(),
                html: html.replace('\n', &config.line_break),
            }
        })
        .collect()
}
