//! Unified error types for chatsift.
//!
//! This module provides a single [`ChatsiftError`] enum that covers all error
//! cases in the library.
//!
//! # What can fail
//!
//! Parsing a transcript never fails on content: a line that is not a message
//! header is a continuation line. Errors come from the edges of the pipeline:
//! reading input, invalid caller arguments, and writing exports.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input transcript doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The data doesn't match the expected structure.
    ///
    /// Used for unknown output extensions and malformed export payloads.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Fuzzy threshold outside `[0, 1]` or not a finite number.
    #[error("Invalid fuzzy threshold {value}. Expected a number between 0 and 1")]
    InvalidThreshold {
        /// The rejected value
        value: f64,
    },

    /// A required input was not supplied.
    #[error("Missing input: {what}")]
    MissingInput {
        /// What the caller forgot to provide
        what: &'static str,
    },

    /// An export payload did not contain a report.
    #[error("Export payload has no report")]
    MissingReport,

    /// A keyword could not be turned into a matcher.
    ///
    /// The search engine never returns this; it logs the error and treats
    /// the keyword as having no exact matches.
    #[error("Cannot build matcher for keyword '{keyword}': {source}")]
    Pattern {
        /// The keyword that was rejected
        keyword: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when an output buffer is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatsiftError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatsiftError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid threshold error.
    pub fn invalid_threshold(value: f64) -> Self {
        ChatsiftError::InvalidThreshold { value }
    }

    /// Creates a missing input error.
    pub fn missing_input(what: &'static str) -> Self {
        ChatsiftError::MissingInput { what }
    }

    /// Creates a matcher construction error for a keyword.
    pub fn pattern(keyword: impl Into<String>, source: regex::Error) -> Self {
        ChatsiftError::Pattern {
            keyword: keyword.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatsiftError::InvalidFormat { .. })
    }

    /// Returns `true` if the caller passed an unusable threshold.
    pub fn is_invalid_threshold(&self) -> bool {
        matches!(self, ChatsiftError::InvalidThreshold { .. })
    }

    /// Returns `true` if a required input or the export report was missing.
    ///
    /// These are the caller-contract violations a front end reports as a bad
    /// request rather than an internal failure.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            ChatsiftError::MissingInput { .. } | ChatsiftError::MissingReport
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
