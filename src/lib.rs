//! Library entrypoint for `lineargs`.
//!
//! The crate splits interactive line buffers into arguments and locates the
//! editing caret among them, for use by completion engines.

pub mod delimiter;
pub mod line;

pub use delimiter::{
    ArgumentDelimiter, ArgumentList, CaretPosition, CharSetDelimiter, ConfigError, DelimiterChar,
    DelimiterConfig, FnDelimiter, QuotingDelimiter, Whitespace, WhitespaceDelimiter,
};
pub use line::{DefaultParser, ParsedLine, Parser};
