//! Escape-parity queries over a character buffer.
//!
//! A character is *escaped* when the character before it is an *active*
//! escape character, and an escape character is active only when it is not
//! itself escaped. Runs of escape characters therefore alternate: in `\\\`
//! the first and third are active, the second is a literal.

/// Returns `true` when `pos` holds an escape character that is not escaped.
///
/// Equivalent to the one-step-back recursion, evaluated by measuring the run
/// of escape characters that ends at `pos`: the character is active iff that
/// run has odd length.
pub(crate) fn is_active_escape(buffer: &[char], pos: usize, escapes: &[char]) -> bool {
    let Some(prefix) = buffer.get(..=pos) else {
        return false;
    };

    let run = prefix
        .iter()
        .rev()
        .take_while(|ch| escapes.contains(ch))
        .count();
    run % 2 == 1
}

/// Returns `true` when the character at `pos` is escaped by its predecessor.
pub(crate) fn is_escaped(buffer: &[char], pos: usize, escapes: &[char]) -> bool {
    if pos == 0 || pos > buffer.len() {
        return false;
    }
    is_active_escape(buffer, pos - 1, escapes)
}

/// Left-to-right escape state for a single scan.
///
/// Carries `is_active_escape(pos - 1)` forward so each position is classified
/// in constant time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EscapeParity {
    escaped: bool,
}

impl EscapeParity {
    /// Returns `true` when the character about to be observed is escaped.
    pub(crate) fn is_escaped(self) -> bool {
        self.escaped
    }

    /// Classifies `ch` and advances past it.
    ///
    /// Returns `true` when `ch` is an active escape character.
    pub(crate) fn observe(&mut self, ch: char, escapes: &[char]) -> bool {
        let active = !self.escaped && escapes.contains(&ch);
        self.escaped = active;
        active
    }
}
