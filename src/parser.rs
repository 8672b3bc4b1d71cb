//! Transcript parser: raw text to ordered messages.
//!
//! The parser makes a single left-to-right pass over the lines, keeping at
//! most one message open. It never fails on content: a line that is not a
//! message header is a continuation of the open message.
//!
//! # Example
//!
//! ```rust
//! use chatsift::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//! let messages = parser.parse_str("04/12/2023 11:12 - Ana: oi\ntudo bem?");
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].author, "Ana");
//! assert_eq!(messages[0].text, "oi\ntudo bem?");
//! ```
//!
//! # Input decoding
//!
//! [`TranscriptParser::parse_bytes`] and [`TranscriptParser::parse_file`]
//! replace invalid UTF-8 sequences with U+FFFD instead of rejecting the input.
//! A leading byte-order mark is dropped.

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::ChatsiftError;
use crate::parsing::{HeaderGrammar, MessageAssembler, split_lines};
use crate::streaming::TranscriptStream;

/// Parses already-decoded lines into messages.
///
/// Shorthand for [`TranscriptParser::parse_lines`] with a fresh parser.
///
/// # Example
///
/// ```rust
/// let messages = chatsift::parse(["01/12/2024, 14:22 - Bob: ok"]);
/// assert_eq!(messages[0].author, "Bob");
/// ```
pub fn parse<I, S>(lines: I) -> Vec<Message>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TranscriptParser::new().parse_lines(lines)
}

/// Parser for line-oriented chat transcripts.
///
/// Holds the compiled header grammar, so one instance can be reused across
/// many transcripts and shared between threads.
#[derive(Debug, Clone)]
pub struct TranscriptParser {
    config: ParserConfig,
    grammar: HeaderGrammar,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            grammar: HeaderGrammar::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a sequence of lines (without line terminators).
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<Message>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assembler = MessageAssembler::with_grammar(self.grammar.clone());
        let mut messages = Vec::new();
        let mut line_count = 0usize;

        for line in lines {
            line_count += 1;
            if let Some(done) = assembler.push_line(line.as_ref()) {
                messages.push(done);
            }
        }
        messages.extend(assembler.finish());

        tracing::debug!(
            lines = line_count,
            messages = messages.len(),
            "parsed transcript"
        );
        messages
    }

    /// Parses transcript text.
    ///
    /// Lines may end with `\n`, `\r\n`, a lone `\r` or any other break
    /// accepted by [`split_lines`].
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        self.parse_lines(split_lines(content))
    }

    /// Parses raw bytes, replacing invalid UTF-8 rather than failing.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Vec<Message> {
        self.parse_str(&String::from_utf8_lossy(bytes))
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::Io`] if the file cannot be read. Content
    /// never causes an error.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Message>, ChatsiftError> {
        let bytes = fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read transcript");
        Ok(self.parse_bytes(&bytes))
    }

    /// Streams messages from a reader, one at a time.
    ///
    /// Produces the same messages as [`parse_bytes`](Self::parse_bytes) on
    /// the full content, without holding the whole transcript in memory.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsift::parser::TranscriptParser;
    ///
    /// let input = "01/12/2024, 14:22 - Bob: ok\n01/12/2024, 14:23 - Ana: oi\n";
    /// let parser = TranscriptParser::new();
    /// let authors: Vec<String> = parser
    ///     .stream(input.as_bytes())
    ///     .filter_map(Result::ok)
    ///     .map(|m| m.author)
    ///     .collect();
    ///
    /// assert_eq!(authors, ["Bob", "Ana"]);
    /// ```
    pub fn stream<R: Read>(&self, reader: R) -> TranscriptStream<BufReader<R>> {
        let reader = BufReader::with_capacity(self.config.buffer_size, reader);
        TranscriptStream::new(
            reader,
            MessageAssembler::with_grammar(self.grammar.clone()),
        )
    }

    /// Opens a file and streams its messages.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::Io`] if the file cannot be opened.
    pub fn stream_file(
        &self,
        path: &Path,
    ) -> Result<TranscriptStream<BufReader<fs::File>>, ChatsiftError> {
        let file = fs::File::open(path)?;
        Ok(self.stream(file))
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}
