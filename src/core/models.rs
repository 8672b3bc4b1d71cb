//! Flattened report rows and output settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search::KeywordReport;

/// One match, with its keyword's name and total repeated on every row.
///
/// This is the tabular shape used by CSV and JSON Lines exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub keyword: String,
    pub count: usize,
    pub id: u64,
    pub timestamp: Option<DateTime<Utc>>,
    pub author: String,
    pub excerpt: String,
    pub score: u8,
}

/// Flattens a report into one row per match.
///
/// Keywords without matches contribute no rows.
///
/// # Example
///
/// ```rust
/// use chatsift::Message;
/// use chatsift::core::flatten_report;
/// use chatsift::search::search;
///
/// let messages = vec![Message::new(1, "Ana", "oi"), Message::new(2, "Bia", "oi oi")];
/// let report = search(&messages, &["oi", "tchau"], 0.0);
///
/// let rows = flatten_report(&report);
/// assert_eq!(rows.len(), 2);
/// assert!(rows.iter().all(|row| row.keyword == "oi" && row.count == 2));
/// ```
pub fn flatten_report(report: &[KeywordReport]) -> Vec<ReportRow> {
    report
        .iter()
        .flat_map(|entry| {
            entry.matches.iter().map(move |m| ReportRow {
                keyword: entry.keyword.clone(),
                count: entry.count,
                id: m.id,
                timestamp: m.timestamp,
                author: m.author.clone(),
                excerpt: m.excerpt.clone(),
                score: m.score,
            })
        })
        .collect()
}

/// Settings for tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// CSV field delimiter (default: `,`)
    pub delimiter: u8,
    /// Prefix CSV output with a UTF-8 byte-order mark, for spreadsheet tools
    pub include_bom: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_bom: false,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_bom(mut self) -> Self {
        self.include_bom = true;
        self
    }
}
