//! Stock delimiter-classification predicates.

use crate::delimiter::DelimiterChar;

/// Treats every Unicode whitespace character as a delimiter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Whitespace;

impl DelimiterChar for Whitespace {
    fn is_delimiter_char(&self, buffer: &[char], pos: usize) -> bool {
        buffer.get(pos).is_some_and(|ch| ch.is_whitespace())
    }
}

/// Treats an explicit set of characters as delimiters, e.g. `,` for
/// comma-separated input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharSetDelimiter {
    chars: Vec<char>,
}

impl CharSetDelimiter {
    /// Creates a predicate matching any of `chars`.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Returns the delimiter characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl DelimiterChar for CharSetDelimiter {
    fn is_delimiter_char(&self, buffer: &[char], pos: usize) -> bool {
        buffer.get(pos).is_some_and(|ch| self.chars.contains(ch))
    }
}

/// Adapts a `Fn(char) -> bool` classifier into a predicate.
#[derive(Debug, Clone, Copy)]
pub struct FnDelimiter<F>(pub F);

impl<F> DelimiterChar for FnDelimiter<F>
where
    F: Fn(char) -> bool,
{
    fn is_delimiter_char(&self, buffer: &[char], pos: usize) -> bool {
        buffer.get(pos).is_some_and(|&ch| (self.0)(ch))
    }
}
