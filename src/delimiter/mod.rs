//! Argument delimiting for interactive line buffers.
//!
//! A delimiter policy splits a still-being-edited buffer into arguments,
//! honoring quote and escape characters, and reports where the caret falls
//! in terms of those arguments. Policies are built by pairing the shared
//! scanner with a [`DelimiterChar`] predicate and a [`DelimiterConfig`].

pub mod argument_list;
pub mod config;
pub mod error;
pub mod scanner;
pub mod whitespace;

mod cursor;
mod escape;
mod quote;

pub use argument_list::{ArgumentList, CaretPosition};
pub use config::{DEFAULT_ESCAPE_CHARS, DEFAULT_QUOTE_CHARS, DelimiterConfig};
pub use error::ConfigError;
pub use scanner::delimit_with;
pub use whitespace::{CharSetDelimiter, FnDelimiter, Whitespace};

/// Splits a buffer into arguments that can be completed on their own.
pub trait ArgumentDelimiter {
    /// Breaks `buffer` into arguments, locating the caret at character offset
    /// `cursor`.
    fn delimit(&self, buffer: &str, cursor: usize) -> ArgumentList;

    /// Returns `true` if the character at `pos` separates arguments.
    ///
    /// `buffer` is the complete command buffer as characters.
    fn is_delimiter(&self, buffer: &[char], pos: usize) -> bool;
}

impl<D> ArgumentDelimiter for &D
where
    D: ArgumentDelimiter + ?Sized,
{
    fn delimit(&self, buffer: &str, cursor: usize) -> ArgumentList {
        (**self).delimit(buffer, cursor)
    }

    fn is_delimiter(&self, buffer: &[char], pos: usize) -> bool {
        (**self).is_delimiter(buffer, pos)
    }
}

/// Classifies raw delimiter characters for [`QuotingDelimiter`].
///
/// Only called for characters that are not escaped and not inside a quote
/// block; quoting and escaping are handled by the scanner.
pub trait DelimiterChar {
    /// Returns `true` if the character at `pos` is a delimiter character.
    fn is_delimiter_char(&self, buffer: &[char], pos: usize) -> bool;

    /// Returns `true` if the character at `pos` is quoted by rules beyond the
    /// configured quote characters. Quoted characters never delimit.
    fn is_quoted(&self, _buffer: &[char], _pos: usize) -> bool {
        false
    }
}

/// Delimiter policy that composes the quoting/escaping scanner with a
/// character predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotingDelimiter<P> {
    config: DelimiterConfig,
    predicate: P,
}

/// The default policy: Unicode whitespace separates arguments.
pub type WhitespaceDelimiter = QuotingDelimiter<Whitespace>;

impl<P> QuotingDelimiter<P> {
    /// Creates a policy with the default quote and escape characters.
    pub fn new(predicate: P) -> Self {
        Self::with_config(predicate, DelimiterConfig::default())
    }

    /// Creates a policy with an explicit configuration.
    pub fn with_config(predicate: P, config: DelimiterConfig) -> Self {
        Self { config, predicate }
    }

    /// Returns the quote/escape configuration.
    pub fn config(&self) -> &DelimiterConfig {
        &self.config
    }

    /// Returns the character predicate.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Returns `true` if the character at `pos` is escaped by its predecessor.
    pub fn is_escaped(&self, buffer: &[char], pos: usize) -> bool {
        escape::is_escaped(buffer, pos, self.config.escape_chars())
    }

    /// Returns `true` if `pos` holds an escape character that is not itself
    /// escaped.
    pub fn is_active_escape(&self, buffer: &[char], pos: usize) -> bool {
        escape::is_active_escape(buffer, pos, self.config.escape_chars())
    }

    /// Returns `true` if `pos` holds a quote character that is not escaped.
    pub fn is_active_quote(&self, buffer: &[char], pos: usize) -> bool {
        buffer
            .get(pos)
            .is_some_and(|&ch| self.config.is_quote_char(ch))
            && !self.is_escaped(buffer, pos)
    }
}

impl<P> ArgumentDelimiter for QuotingDelimiter<P>
where
    P: DelimiterChar,
{
    fn delimit(&self, buffer: &str, cursor: usize) -> ArgumentList {
        let chars: Vec<char> = buffer.chars().collect();
        delimit_with(&chars, cursor, &self.config, &self.predicate)
    }

    fn is_delimiter(&self, buffer: &[char], pos: usize) -> bool {
        pos < buffer.len()
            && !self.predicate.is_quoted(buffer, pos)
            && !self.is_escaped(buffer, pos)
            && self.predicate.is_delimiter_char(buffer, pos)
    }
}
