//! Message record reconstructed from a transcript.
//!
//! A [`Message`] is one logical unit of a chat export: a header line
//! (`date time - author: text`) plus any continuation lines that follow it.
//!
//! # Examples
//!
//! ```
//! use chatsift::Message;
//!
//! let msg = Message::new(1, "Ana", "oi");
//! assert_eq!(msg.author(), "Ana");
//! assert_eq!(msg.text(), "oi");
//! assert!(msg.timestamp().is_none());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatsift::Message;
//!
//! let msg = Message::new(7, "Bob", "ok");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message reconstructed by the transcript parser.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `u64` | 1-based position in parse order |
/// | `timestamp` | `Option<DateTime<Utc>>` | Header date and time, if it parsed |
/// | `author` | `String` | Trimmed author name, empty for leading orphan text |
/// | `text` | `String` | First-line text plus continuation lines, `\n`-joined |
///
/// Ids are assigned by the parser and form a gapless `1..=N` sequence for a
/// single parse run. They are not stable across runs.
///
/// The export's wall-clock time is stored as UTC without any time-zone
/// conversion; transcripts carry no zone information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Position of the message in the transcript, starting at 1.
    pub id: u64,

    /// When the message was sent.
    ///
    /// `None` when the header's date did not match any supported format,
    /// and for text that appears before the first header.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Author name as written in the header.
    #[serde(default)]
    pub author: String,

    /// Message body. Continuation lines are appended verbatim after `\n`.
    pub text: String,
}

impl Message {
    /// Creates a message without a timestamp.
    pub fn new(id: u64, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            timestamp: None,
            author: author.into(),
            text: text.into(),
        }
    }

    /// Builder method to set the timestamp.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsift::Message;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let ts = Utc.with_ymd_and_hms(2024, 12, 1, 14, 22, 0).unwrap();
    /// let msg = Message::new(1, "Bob", "ok").with_timestamp(ts);
    /// assert_eq!(msg.timestamp(), Some(ts));
    /// ```
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the message id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the timestamp, if available.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` for text that preceded any recognizable header.
    pub fn is_orphan(&self) -> bool {
        self.author.is_empty() && self.timestamp.is_none()
    }

    /// Appends a continuation line.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }
}
