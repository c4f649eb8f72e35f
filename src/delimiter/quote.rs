//! Quote-state tracking for argument scanning.

/// Quote-state machine for one scan: `Normal` or `InQuote(q)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QuoteScanner {
    open_quote: Option<char>,
}

impl QuoteScanner {
    /// Returns true when the scanner is outside any quote block.
    pub(crate) fn is_unquoted(self) -> bool {
        self.open_quote.is_none()
    }

    /// Returns the quote character that opened the current block, if any.
    pub(crate) fn open_quote(self) -> Option<char> {
        self.open_quote
    }

    /// Starts a quote block delimited by `quote`.
    pub(crate) fn open(&mut self, quote: char) {
        self.open_quote = Some(quote);
    }

    /// Returns true when `ch` would terminate the current block.
    pub(crate) fn closes_with(self, ch: char) -> bool {
        self.open_quote == Some(ch)
    }

    /// Ends the current block and returns its quote character.
    pub(crate) fn close(&mut self) -> Option<char> {
        self.open_quote.take()
    }
}
