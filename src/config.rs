//! Configuration types for parsing, searching and highlighting.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - transcript reading settings
//! - [`SearchConfig`] - fuzzy threshold and excerpt window
//! - [`HighlightConfig`] - markers used in the highlighted transcript
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::SearchConfig;
//! use chatsift::search::SearchEngine;
//!
//! let config = SearchConfig::new()
//!     .with_fuzzy_threshold(0.8)?
//!     .with_context(30);
//!
//! let engine = SearchEngine::new(config);
//! # Ok::<(), chatsift::ChatsiftError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatsiftError;

/// Default number of characters kept on each side of a match in excerpts.
pub const DEFAULT_CONTEXT: usize = 50;

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatsift::config::ParserConfig;
///
/// let config = ParserConfig::new().with_buffer_size(256 * 1024);
/// assert_eq!(config.buffer_size, 256 * 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Read buffer size used when streaming from a reader (default: 64KB)
    pub buffer_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the read buffer size for streaming.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

/// Configuration for keyword search.
///
/// A `fuzzy_threshold` of `0.0` disables fuzzy matching: only exact
/// (case-insensitive substring) matches are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum fuzzy similarity as a fraction of 100 (default: 0.0, disabled)
    pub fuzzy_threshold: f64,

    /// Characters of context on each side of a match (default: 50)
    pub context: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.0,
            context: DEFAULT_CONTEXT,
        }
    }
}

impl SearchConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fuzzy threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidThreshold`] unless `threshold` is a
    /// finite number in `[0, 1]`.
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Result<Self, ChatsiftError> {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ChatsiftError::invalid_threshold(threshold));
        }
        self.fuzzy_threshold = threshold;
        Ok(self)
    }

    /// Sets the excerpt context width.
    #[must_use]
    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    /// Returns `true` if fuzzy matching is enabled.
    pub fn is_fuzzy(&self) -> bool {
        self.fuzzy_threshold > 0.0
    }
}

/// Markers inserted by the highlighter.
///
/// Defaults produce an HTML fragment: `<mark>…</mark>` around matches and
/// `<br>` for line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Inserted before each match
    pub open: String,

    /// Inserted after each match
    pub close: String,

    /// Replaces every `\n` in the message text
    pub line_break: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
            line_break: "<br>".to_string(),
        }
    }
}

impl HighlightConfig {
    /// Creates a new configuration with HTML markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the opening and closing match markers.
    #[must_use]
    pub fn with_markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    /// Sets the line-break marker.
    #[must_use]
    pub fn with_line_break(mut self, line_break: impl Into<String>) -> Self {
        self.line_break = line_break.into();
        self
    }
}
