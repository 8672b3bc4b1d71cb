//! Shared transcript parsing building blocks.
//!
//! This module contains the header grammar, the line splitter and the
//! message assembler used by
//! both the in-memory [`TranscriptParser`](crate::parser::TranscriptParser)
//! and the streaming [`TranscriptStream`](crate::streaming::TranscriptStream).

pub mod assembler;
pub mod header;
pub mod lines;

pub use assembler::MessageAssembler;
pub use header::{Header, HeaderGrammar, parse_timestamp};
pub use lines::{SplitLines, is_line_break, split_lines};
