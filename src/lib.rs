//! # Chatsift
//!
//! A Rust library for searching chat transcripts for keywords, with exact
//! and fuzzy matching, and exporting the matches.
//!
//! ## Overview
//!
//! Chatsift works on line-oriented text exports such as WhatsApp's
//! "export chat" files, where each message starts with a header:
//!
//! ```text
//! 04/12/2023 11:12 - Ana: are we still on for friday?
//! 01/12/2024, 14:22 - Bob: yes
//! and I'll bring the slides
//! ```
//!
//! The pipeline is:
//! 1. **Parse** the transcript into ordered [`Message`]s
//! 2. **Search** them for keywords, producing one
//!    [`KeywordReport`](search::KeywordReport) per keyword
//! 3. **Render** a highlighted transcript, a per-day timeline, or export the
//!    report as CSV, JSON or JSON Lines
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsift::prelude::*;
//!
//! let transcript = "\
//! 04/12/2023 11:12 - Ana: are we still on for friday?
//! 01/12/2024, 14:22 - Bob: yes
//! and I'll bring the slides";
//!
//! let messages = TranscriptParser::new().parse_str(transcript);
//! assert_eq!(messages.len(), 2);
//!
//! let report = search(&messages, &["friday", "slides"], 0.0);
//! assert_eq!(report[1].matches[0].author, "Bob");
//!
//! let html = highlight(&messages, &["slides"]);
//! assert_eq!(html[1].html, "yes<br>and I'll bring the <mark>slides</mark>");
//! ```
//!
//! ## Fuzzy Matching
//!
//! ```rust
//! use chatsift::prelude::*;
//!
//! let engine = SearchEngine::new(SearchConfig::new().with_fuzzy_threshold(0.8)?);
//! let messages = parse(["04/12/2023 11:12 - Ana: see you tomorow"]);
//!
//! let report = engine.search(&messages, &["tomorrow"]);
//! assert!(report[0].matches[0].score < 100);
//! # Ok::<(), chatsift::ChatsiftError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and [`parse`]
//! - [`parsing`] - header grammar and the message assembler
//! - [`streaming`] - [`TranscriptStream`](streaming::TranscriptStream) for large files
//! - [`search`] - keyword search, excerpts, highlighting
//! - [`core`] - flattened rows, timeline, stats, output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`config`] - parser, search and highlight configuration
//! - [`error`] - [`ChatsiftError`] and [`Result`]
//! - [`cli`], [`logging`] - command-line support (feature `cli`)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod search;
pub mod streaming;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsiftError, Result};
pub use message::Message;
pub use parser::parse;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatsiftError, Result};

    // Parsing
    pub use crate::parser::{TranscriptParser, parse};

    // Search
    pub use crate::search::{
        HighlightedLine, KeywordReport, MatchRecord, SearchEngine, highlight, keywords_from_lines,
        search,
    };

    pub use crate::config::{HighlightConfig, ParserConfig, SearchConfig};

    // Reports
    pub use crate::core::models::{OutputConfig, ReportRow, flatten_report};
    pub use crate::core::{DateCount, SearchStats, matches_by_date};
    pub use crate::format::{OutputFormat, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{report_from_json, to_json, to_jsonl, write_json, write_jsonl};
}
