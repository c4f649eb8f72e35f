//! Quote and escape character configuration.

use tracing::debug;

use crate::delimiter::error::ConfigError;

/// Quote characters used when none are configured explicitly.
pub const DEFAULT_QUOTE_CHARS: [char; 2] = ['\'', '"'];

/// Escape characters used when none are configured explicitly.
pub const DEFAULT_ESCAPE_CHARS: [char; 1] = ['\\'];

/// Immutable quote/escape configuration for a delimiter policy.
///
/// Either set may be empty, which disables quoting or escaping. A character
/// cannot belong to both sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DelimiterConfig {
    quote_chars: Vec<char>,
    escape_chars: Vec<char>,
}

impl Default for DelimiterConfig {
    fn default() -> Self {
        Self {
            quote_chars: DEFAULT_QUOTE_CHARS.to_vec(),
            escape_chars: DEFAULT_ESCAPE_CHARS.to_vec(),
        }
    }
}

impl DelimiterConfig {
    /// Creates a configuration from explicit quote and escape sets.
    ///
    /// Duplicates are collapsed, keeping first occurrence order.
    pub fn new(
        quote_chars: impl IntoIterator<Item = char>,
        escape_chars: impl IntoIterator<Item = char>,
    ) -> Result<Self, ConfigError> {
        let quote_chars = dedup(quote_chars);
        let escape_chars = dedup(escape_chars);

        if let Some(&overlap) = quote_chars.iter().find(|ch| escape_chars.contains(ch)) {
            debug!(?overlap, "rejected delimiter configuration");
            return Err(ConfigError::OverlappingChar(overlap));
        }

        Ok(Self {
            quote_chars,
            escape_chars,
        })
    }

    /// Returns a copy with the quote set replaced.
    pub fn with_quote_chars(
        self,
        quote_chars: impl IntoIterator<Item = char>,
    ) -> Result<Self, ConfigError> {
        Self::new(quote_chars, self.escape_chars)
    }

    /// Returns a copy with the escape set replaced.
    pub fn with_escape_chars(
        self,
        escape_chars: impl IntoIterator<Item = char>,
    ) -> Result<Self, ConfigError> {
        Self::new(self.quote_chars, escape_chars)
    }

    /// Returns the configured quote characters.
    pub fn quote_chars(&self) -> &[char] {
        &self.quote_chars
    }

    /// Returns the configured escape characters.
    pub fn escape_chars(&self) -> &[char] {
        &self.escape_chars
    }

    /// Returns `true` if `ch` is a quote character.
    pub fn is_quote_char(&self, ch: char) -> bool {
        self.quote_chars.contains(&ch)
    }

    /// Returns `true` if `ch` is an escape character.
    pub fn is_escape_char(&self, ch: char) -> bool {
        self.escape_chars.contains(&ch)
    }
}

fn dedup(chars: impl IntoIterator<Item = char>) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for ch in chars {
        if !out.contains(&ch) {
            out.push(ch);
        }
    }
    out
}
