//! Line-by-line message assembly.
//!
//! [`MessageAssembler`] is the two-state recognizer behind both the in-memory
//! and the streaming parser: either no message is open, or exactly one is
//! being accumulated. Each pushed line either opens a new message (returning
//! the previous one, now complete) or extends the open one.

use crate::Message;

use super::header::HeaderGrammar;

/// Accumulates transcript lines into [`Message`]s.
///
/// # Example
///
/// ```rust
/// use chatsift::parsing::MessageAssembler;
///
/// let mut assembler = MessageAssembler::new();
/// assert!(assembler.push_line("04/12/2023 11:12 - Ana: oi").is_none());
/// assert!(assembler.push_line("tudo bem?").is_none());
///
/// let done = assembler.push_line("04/12/2023 11:13 - Bia: tudo").unwrap();
/// assert_eq!(done.text, "oi\ntudo bem?");
///
/// let last = assembler.finish().unwrap();
/// assert_eq!(last.id, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageAssembler {
    grammar: HeaderGrammar,
    last_id: u64,
    open: Option<Message>,
}

impl MessageAssembler {
    /// Creates an assembler with no open message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assembler reusing an already compiled grammar.
    pub fn with_grammar(grammar: HeaderGrammar) -> Self {
        Self {
            grammar,
            last_id: 0,
            open: None,
        }
    }

    /// Feeds one line (without its trailing newline).
    ///
    /// Returns the previously open message when `line` is a header.
    /// Blank lines are ignored.
    pub fn push_line(&mut self, line: &str) -> Option<Message> {
        if line.trim().is_empty() {
            return None;
        }

        if let Some(header) = self.grammar.match_header(line) {
            let mut message = Message::new(
                self.next_id(),
                header.author.trim(),
                header.text.trim(),
            );
            message.timestamp = header.timestamp();
            return self.open.replace(message);
        }

        match self.open.as_mut() {
            Some(message) => message.push_line(line),
            None => self.open = Some(Message::new(self.next_id(), "", line)),
        }
        None
    }

    /// Closes the open message, if any.
    pub fn finish(&mut self) -> Option<Message> {
        self.open.take()
    }

    /// Returns `true` while a message is being accumulated.
    pub fn has_open(&self) -> bool {
        self.open.is_some()
    }

    /// Number of messages opened so far.
    pub fn count(&self) -> u64 {
        self.last_id
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}
