use std::sync::Arc;

/// Represents a line/column location in line-split input text.
///
/// Both components are zero-based: the first character of the input is at
/// `line 0, column 0`. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl Position {
    /// Creates a new position at the start of the input.
    pub fn new() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the position one character further along the same line.
    pub fn next_column(self) -> Self {
        Self {
            line: self.line,
            column: self.column + 1,
        }
    }

    /// Returns the position at the start of the following line.
    pub fn next_line(self) -> Self {
        Self {
            line: self.line + 1,
            column: 0,
        }
    }
}

/// A detached copy of where a parse failed.
///
/// Failures outlive the [`InputState`](crate::InputState) they were produced
/// from, so the text of the failing line is carried along for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSnapshot {
    /// Text of the failing line, or `"end of file"` past the last line.
    pub current_line: Arc<str>,
    pub line: usize,
    pub column: usize,
}

impl PositionSnapshot {
    pub fn new(current_line: Arc<str>, position: Position) -> Self {
        Self {
            current_line,
            line: position.line,
            column: position.column,
        }
    }

    /// Returns the line/column part of the snapshot.
    pub fn position(&self) -> Position {
        Position::at(self.line, self.column)
    }
}
