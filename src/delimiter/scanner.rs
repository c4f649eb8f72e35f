//! Single-pass quoting/escaping scanner shared by all delimiter policies.

use tracing::trace;

use crate::delimiter::DelimiterChar;
use crate::delimiter::argument_list::ArgumentList;
use crate::delimiter::config::DelimiterConfig;
use crate::delimiter::cursor::CaretCapture;
use crate::delimiter::escape::EscapeParity;
use crate::delimiter::quote::QuoteScanner;

/// Argument text under construction, with its length in characters.
#[derive(Debug, Default)]
struct ArgumentBuffer {
    text: String,
    chars: usize,
}

impl ArgumentBuffer {
    fn push(&mut self, ch: char) {
        self.text.push(ch);
        self.chars += 1;
    }

    fn len(&self) -> usize {
        self.chars
    }

    fn is_empty(&self) -> bool {
        self.chars == 0
    }

    fn take(&mut self) -> String {
        self.chars = 0;
        std::mem::take(&mut self.text)
    }
}

/// Splits `buffer` into arguments and locates the caret at `cursor`.
///
/// Scanning behavior:
/// - an unescaped quote character opens a block that ends at the next
///   unescaped occurrence of the same character; the block's text becomes one
///   argument even when empty
/// - unquoted, unescaped characters classified by `predicate` end the current
///   argument; runs of them never produce empty arguments
/// - active escape characters are dropped and strip the special meaning of the
///   following character
/// - unterminated quoted text is kept as the final argument
///
/// `cursor` and all offsets are character indices. A `cursor` beyond the
/// buffer length is never captured.
pub fn delimit_with<P>(
    buffer: &[char],
    cursor: usize,
    config: &DelimiterConfig,
    predicate: &P,
) -> ArgumentList
where
    P: DelimiterChar + ?Sized,
{
    let escapes = config.escape_chars();
    let mut arguments = Vec::new();
    let mut current = ArgumentBuffer::default();
    let mut quote = QuoteScanner::default();
    let mut parity = EscapeParity::default();
    let mut caret = CaretCapture::new(cursor);

    for (pos, &ch) in buffer.iter().enumerate() {
        caret.observe(pos, arguments.len(), current.len());

        let escaped = parity.is_escaped();
        let active_escape = parity.observe(ch, escapes);

        if quote.is_unquoted() && !escaped && config.is_quote_char(ch) {
            quote.open(ch);
        } else if !quote.is_unquoted() {
            if quote.closes_with(ch) && !escaped {
                // The block may be empty; `""` still yields an argument.
                arguments.push(current.take());
                quote.close();
            } else if !active_escape {
                current.push(ch);
            }
        } else if !escaped
            && !predicate.is_quoted(buffer, pos)
            && predicate.is_delimiter_char(buffer, pos)
        {
            if !current.is_empty() {
                arguments.push(current.take());
            }
        } else if !active_escape {
            current.push(ch);
        }
    }

    caret.observe(buffer.len(), arguments.len(), current.len());

    let unterminated_quote = quote.open_quote();
    if !current.is_empty() {
        arguments.push(current.take());
    }

    let captured = caret.finish();
    trace!(
        arguments = arguments.len(),
        cursor,
        captured = ?captured,
        unterminated_quote = ?unterminated_quote,
        "delimited buffer"
    );

    ArgumentList::new(arguments, captured, cursor)
}
