//! Line parsing entrypoints consumed by completion.

pub mod parsed;

pub use parsed::ParsedLine;

use crate::delimiter::{ArgumentDelimiter, WhitespaceDelimiter};

/// Turns a buffer and caret offset into a [`ParsedLine`].
pub trait Parser {
    /// Parses `line` with the caret at character offset `cursor`.
    fn parse<'a>(&self, line: &'a str, cursor: usize) -> ParsedLine<'a>;
}

/// Parser backed by an [`ArgumentDelimiter`] policy.
///
/// Stateless: every call delimits the buffer afresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultParser<D = WhitespaceDelimiter> {
    delimiter: D,
}

impl DefaultParser {
    /// Creates a parser splitting on whitespace with default quotes/escapes.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D> DefaultParser<D>
where
    D: ArgumentDelimiter,
{
    /// Creates a parser using a custom delimiter policy.
    pub fn with_delimiter(delimiter: D) -> Self {
        Self { delimiter }
    }

    /// Returns the delimiter policy.
    pub fn delimiter(&self) -> &D {
        &self.delimiter
    }
}

impl<D> Parser for DefaultParser<D>
where
    D: ArgumentDelimiter,
{
    fn parse<'a>(&self, line: &'a str, cursor: usize) -> ParsedLine<'a> {
        ParsedLine::new(self.delimiter.delimit(line, cursor), line)
    }
}
