//! Caret capture for a single scan.

use crate::delimiter::argument_list::CaretPosition;

/// Records where the caret falls in terms of arguments.
///
/// The snapshot is taken when the scan reaches the caret's character offset,
/// before that character is processed, or at end of input when the caret sits
/// at the buffer length. A caret past the end is never captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CaretCapture {
    caret: usize,
    captured: Option<CaretPosition>,
}

impl CaretCapture {
    /// Creates a capture for the caret at character offset `caret`.
    pub(crate) fn new(caret: usize) -> Self {
        Self {
            caret,
            captured: None,
        }
    }

    /// Snapshots the scan state if `pos` is the caret offset.
    ///
    /// `arguments` is the number of completed arguments and `offset` the
    /// character length of the argument being built.
    pub(crate) fn observe(&mut self, pos: usize, arguments: usize, offset: usize) {
        if pos == self.caret {
            self.captured = Some(CaretPosition::new(arguments, offset));
        }
    }

    /// Returns the captured position, if the caret was reached.
    pub(crate) fn finish(self) -> Option<CaretPosition> {
        self.captured
    }
}
