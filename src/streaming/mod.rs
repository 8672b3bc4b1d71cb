//! Streaming transcript parsing for large exports.
//!
//! [`TranscriptStream`] reads one line at a time and yields messages as soon
//! as the next header closes them, so memory use is bounded by the longest
//! message rather than the file size.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use chatsift::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//!
//! for result in parser.stream_file(Path::new("chat.txt"))? {
//!     match result {
//!         Ok(message) => println!("{}: {}", message.author, message.text),
//!         Err(e) => eprintln!("read failed: {e}"),
//!     }
//! }
//! # Ok::<(), chatsift::ChatsiftError>(())
//! ```

use std::collections::VecDeque;
use std::io::BufRead;

use crate::Message;
use crate::error::ChatsiftError;
use crate::parsing::{MessageAssembler, split_lines};

/// Iterator over the messages of a transcript read from `R`.
///
/// Lines are decoded lossily and split exactly like
/// [`TranscriptParser::parse_bytes`](crate::parser::TranscriptParser::parse_bytes).
/// The reader is consumed in `\n`-terminated chunks; each chunk is then
/// split on every other line break, so lone `\r` endings and Unicode
/// separators are honored too. An I/O error is yielded once, after which the stream is finished.
#[derive(Debug)]
pub struct TranscriptStream<R: BufRead> {
    reader: R,
    assembler: MessageAssembler,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    bytes_read: u64,
    lines_read: u64,
    finished: bool,
}

impl<R: BufRead> TranscriptStream<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R, assembler: MessageAssembler) -> Self {
        Self {
            reader,
            assembler,
            buf: Vec::with_capacity(4096),
            pending: VecDeque::new(),
            bytes_read: 0,
            lines_read: 0,
            finished: false,
        }
    }

    /// Returns the number of bytes consumed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Returns the number of lines consumed so far.
    pub fn lines_processed(&self) -> u64 {
        self.lines_read
    }

    /// Reads the next `\n`-terminated chunk and queues its lines.
    ///
    /// Returns `false` at end of input.
    fn read_chunk(&mut self) -> std::io::Result<bool> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(false);
        }

        let mut bytes = self.buf.as_slice();
        if self.bytes_read == 0 {
            if let Some(rest) = bytes.strip_prefix("\u{feff}".as_bytes()) {
                bytes = rest;
            }
        }
        self.bytes_read += n as u64;

        // A chunk always ends on a complete line break, so splitting it
        // agrees with splitting the whole text.
        let text = String::from_utf8_lossy(bytes);
        self.pending.extend(split_lines(&text).map(str::to_string));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for TranscriptStream<R> {
    type Item = Result<Message, ChatsiftError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if let Some(line) = self.pending.pop_front() {
                self.lines_read += 1;
                if let Some(message) = self.assembler.push_line(&line) {
                    return Some(Ok(message));
                }
                continue;
            }

            match self.read_chunk() {
                Ok(true) => {}
                Ok(false) => {
                    self.finished = true;
                    tracing::debug!(
                        lines = self.lines_read,
                        bytes = self.bytes_read,
                        messages = self.assembler.count(),
                        "transcript stream finished"
                    );
                    return self.assembler.finish().map(Ok);
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
