//! Keyword search over parsed messages.
//!
//! For every keyword (in the order given, duplicates included) every message
//! is tested:
//!
//! 1. **Exact**: case-insensitive literal substring. A hit scores `100` and
//!    fuzzy scoring is skipped.
//! 2. **Fuzzy** (only when the threshold is above zero): [`partial_ratio`] of
//!    the lowercased keyword against the lowercased text. A hit scores
//!    between `ceil(threshold * 100)` and `99`.
//!
//! A score of `100` therefore always means an exact match.
//!
//! # Example
//!
//! ```rust
//! use chatsift::{parse, search::search};
//!
//! let messages = parse([
//!     "04/12/2023 11:12 - Ana: Hello there",
//!     "04/12/2023 11:13 - Bia: nothing here",
//!     "04/12/2023 11:14 - Ana: say HELLO again",
//! ]);
//!
//! let report = search(&messages, &["hello"], 0.0);
//! assert_eq!(report[0].count, 2);
//! assert!(report[0].matches.iter().all(|m| m.score == 100));
//! ```

mod excerpt;
mod fuzzy;
mod highlight;
mod matcher;

pub use excerpt::{ELLIPSIS, excerpt};
pub use fuzzy::partial_ratio;
pub use highlight::{HighlightedLine, highlight, highlight_with};
pub use matcher::KeywordMatcher;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::Message;
use crate::config::{DEFAULT_CONTEXT, SearchConfig};
use crate::parsing::split_lines;

use excerpt::excerpt_at;

/// Score recorded for exact matches.
pub const EXACT_SCORE: u8 = 100;

/// Highest score a fuzzy match can record.
pub const MAX_FUZZY_SCORE: u8 = 99;

/// One message that matched a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Id of the matching message
    pub id: u64,

    /// Timestamp of the matching message
    #[serde(default, alias = "date")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Author of the matching message
    #[serde(default)]
    pub author: String,

    /// Text around the match
    #[serde(alias = "text_excerpt")]
    pub excerpt: String,

    /// 100 for exact matches, otherwise the fuzzy similarity
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8,
}

impl MatchRecord {
    /// Returns `true` for exact (score 100) matches.
    pub fn is_exact(&self) -> bool {
        self.score == EXACT_SCORE
    }
}

/// All matches of one keyword, in message order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// The keyword as given
    #[serde(alias = "word")]
    pub keyword: String,

    /// Number of matches; always `matches.len()`
    pub count: usize,

    pub matches: Vec<MatchRecord>,
}

impl KeywordReport {
    fn new(keyword: impl Into<String>, matches: Vec<MatchRecord>) -> Self {
        Self {
            keyword: keyword.into(),
            count: matches.len(),
            matches,
        }
    }
}

/// Keyword search with a fixed configuration.
///
/// # Example
///
/// ```rust
/// use chatsift::config::SearchConfig;
/// use chatsift::search::SearchEngine;
/// use chatsift::Message;
///
/// let engine = SearchEngine::new(SearchConfig::new().with_fuzzy_threshold(0.8)?);
/// let messages = vec![Message::new(1, "Ana", "the meeting is tomorow")];
///
/// let report = engine.search(&messages, &["tomorrow"]);
/// assert_eq!(report[0].count, 1);
/// assert!(!report[0].matches[0].is_exact());
/// # Ok::<(), chatsift::ChatsiftError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches `messages` for every keyword, producing one report per
    /// keyword in input order.
    pub fn search<S: AsRef<str>>(&self, messages: &[Message], keywords: &[S]) -> Vec<KeywordReport> {
        let reports: Vec<KeywordReport> = keywords
            .iter()
            .map(|kw| self.search_keyword(messages, kw.as_ref()))
            .collect();

        tracing::debug!(
            messages = messages.len(),
            keywords = reports.len(),
            matches = reports.iter().map(|r| r.count).sum::<usize>(),
            fuzzy = self.config.is_fuzzy(),
            "search complete"
        );
        reports
    }

    /// Searches `messages` for a single keyword.
    pub fn search_keyword(&self, messages: &[Message], keyword: &str) -> KeywordReport {
        let matcher = match KeywordMatcher::new(keyword) {
            Ok(matcher) => Some(matcher),
            Err(e) => {
                tracing::warn!(error = %e, "keyword treated as having no exact matches");
                None
            }
        };
        let keyword_lower = keyword.to_lowercase();

        let matches = messages
            .iter()
            .filter_map(|message| self.score(message, keyword, &keyword_lower, matcher.as_ref()))
            .collect();

        KeywordReport::new(keyword, matches)
    }

    fn score(
        &self,
        message: &Message,
        keyword: &str,
        keyword_lower: &str,
        matcher: Option<&KeywordMatcher>,
    ) -> Option<MatchRecord> {
        let phrase_len = keyword.chars().count();

        if let Some(idx) = matcher.and_then(|m| m.find_char_index(&message.text)) {
            return Some(record(
                message,
                excerpt_at(&message.text, Some(idx), phrase_len, self.config.context),
                EXACT_SCORE,
            ));
        }

        if !self.config.is_fuzzy() {
            return None;
        }

        let raw = partial_ratio(keyword_lower, &message.text.to_lowercase());
        let score = fuzzy_score(raw, self.config.fuzzy_threshold)?;
        Some(record(
            message,
            excerpt_at(&message.text, None, phrase_len, self.config.context),
            score,
        ))
    }
}

/// Searches with the default excerpt context.
///
/// A `fuzzy_threshold` that is not above zero (including NaN) disables fuzzy
/// matching. Unlike [`SearchConfig::with_fuzzy_threshold`] the value is not
/// validated; a threshold above `0.99` simply never accepts a fuzzy match.
pub fn search<S: AsRef<str>>(
    messages: &[Message],
    keywords: &[S],
    fuzzy_threshold: f64,
) -> Vec<KeywordReport> {
    let config = SearchConfig {
        fuzzy_threshold,
        context: DEFAULT_CONTEXT,
    };
    SearchEngine::new(config).search(messages, keywords)
}

/// Splits a newline-separated keyword list, trimming entries and dropping
/// empty ones.
///
/// ```rust
/// use chatsift::search::keywords_from_lines;
///
/// assert_eq!(keywords_from_lines(" oi \n\n tudo bem\r\n"), ["oi", "tudo bem"]);
/// ```
pub fn keywords_from_lines(raw: &str) -> Vec<String> {
    split_lines(raw)
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}

/// Converts a raw fuzzy similarity into a recorded score.
///
/// The raw value is rounded up and capped below [`EXACT_SCORE`]; the
/// recorded score must still reach the threshold.
fn fuzzy_score(raw: f64, threshold: f64) -> Option<u8> {
    let floor = threshold * 100.0;
    if raw < floor {
        return None;
    }
    let score = raw.ceil().min(f64::from(MAX_FUZZY_SCORE));
    if score < floor {
        return None;
    }
    let score = score as u8;
    Some(score)
}

fn record(message: &Message, excerpt: String, score: u8) -> MatchRecord {
    MatchRecord {
        id: message.id,
        timestamp: message.timestamp,
        author: message.author.clone(),
        excerpt,
        score,
    }
}

/// Accepts integer or fractional scores, as produced by other exporters.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || !(0.0..=100.0).contains(&raw) {
        return Err(serde::de::Error::custom(format!(
            "score {raw} is outside 0..=100"
        )));
    }
    let score = raw.round() as u8;
    Ok(score)
}
