//! Read-only view of a parsed line handed to completion.

use crate::delimiter::ArgumentList;

/// A line split into words, with the caret located among them.
///
/// Forwards to the wrapped [`ArgumentList`] and borrows the original buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    arguments: ArgumentList,
    line: &'a str,
}

impl<'a> ParsedLine<'a> {
    /// Wraps a delimiter result and the buffer it was produced from.
    pub fn new(arguments: ArgumentList, line: &'a str) -> Self {
        Self { arguments, line }
    }

    /// Returns the word under the caret.
    pub fn word(&self) -> Option<&str> {
        self.arguments.cursor_argument()
    }

    /// Returns the caret offset within the current word.
    pub fn word_cursor(&self) -> Option<usize> {
        self.arguments.argument_position()
    }

    /// Returns the index of the current word.
    pub fn word_index(&self) -> Option<usize> {
        self.arguments.cursor_argument_index()
    }

    /// Returns all words in order.
    pub fn words(&self) -> &[String] {
        self.arguments.arguments()
    }

    /// Returns the unparsed line.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Returns the caret offset in the unparsed line.
    pub fn cursor(&self) -> usize {
        self.arguments.buffer_position()
    }

    /// Returns the underlying delimiter result.
    pub fn argument_list(&self) -> &ArgumentList {
        &self.arguments
    }

    /// Consumes the view and returns the underlying delimiter result.
    pub fn into_argument_list(self) -> ArgumentList {
        self.arguments
    }
}
