//! Token-list value produced by a delimiter scan.

/// Caret location expressed in argument coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaretPosition {
    /// Index of the argument the caret belongs to.
    ///
    /// May equal the argument count when the caret sits where a new argument
    /// would start, e.g. after a trailing delimiter.
    pub argument_index: usize,
    /// Character offset of the caret within that argument.
    pub offset: usize,
}

impl CaretPosition {
    /// Creates a caret position.
    pub const fn new(argument_index: usize, offset: usize) -> Self {
        Self {
            argument_index,
            offset,
        }
    }
}

/// The result of delimiting a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArgumentList {
    arguments: Vec<String>,
    cursor: Option<CaretPosition>,
    buffer_position: usize,
}

impl ArgumentList {
    /// Creates an argument list.
    ///
    /// `cursor` is `None` when the caret was never reached by the scan, and
    /// `buffer_position` is the caret offset in the whole buffer.
    pub fn new(
        arguments: Vec<String>,
        cursor: Option<CaretPosition>,
        buffer_position: usize,
    ) -> Self {
        Self {
            arguments,
            cursor,
            buffer_position,
        }
    }

    /// Returns the arguments in scan order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Consumes the list and returns its arguments.
    pub fn into_arguments(self) -> Vec<String> {
        self.arguments
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` when no arguments were produced.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the captured caret position.
    pub fn cursor(&self) -> Option<CaretPosition> {
        self.cursor
    }

    /// Returns the index of the argument under the caret.
    pub fn cursor_argument_index(&self) -> Option<usize> {
        self.cursor.map(|cursor| cursor.argument_index)
    }

    /// Returns the caret offset within the argument under the caret.
    pub fn argument_position(&self) -> Option<usize> {
        self.cursor.map(|cursor| cursor.offset)
    }

    /// Returns the argument under the caret.
    ///
    /// `None` when the caret was not captured or sits on an argument that has
    /// not started yet.
    pub fn cursor_argument(&self) -> Option<&str> {
        let index = self.cursor_argument_index()?;
        self.arguments.get(index).map(String::as_str)
    }

    /// Returns the caret offset in the whole buffer, as given to the scan.
    pub fn buffer_position(&self) -> usize {
        self.buffer_position
    }
}
