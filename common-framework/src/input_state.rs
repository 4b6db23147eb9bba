use crate::position::{Position, PositionSnapshot};
use std::sync::Arc;

/// Text shown in diagnostics once the input has been exhausted.
pub const END_OF_FILE: &str = "end of file";

/// One terminator-free line of input.
///
/// The characters are stored decoded so that `next_token` can index by
/// column in constant time; the text is kept for diagnostics.
struct Line {
    text: Arc<str>,
    chars: Box<[char]>,
}

impl Line {
    fn new(text: &str) -> Self {
        Self {
            text: Arc::from(text),
            chars: text.chars().collect(),
        }
    }
}

/// An immutable cursor over line-split input text.
///
/// The line buffer is shared, so cloning an `InputState` only copies a
/// pointer and a [`Position`]. Every consumed character produces a new
/// state; nothing is ever mutated in place, which is what makes
/// backtracking free.
#[derive(Clone)]
pub struct InputState {
    lines: Arc<[Line]>,
    position: Position,
}

impl InputState {
    /// Splits `text` on `"\r\n"` and `"\n"` and positions the cursor at the
    /// start. Empty text has no lines at all.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<Line> = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n')
                .map(|line| Line::new(line.strip_suffix('\r').unwrap_or(line)))
                .collect()
        };

        Self {
            lines: lines.into(),
            position: Position::new(),
        }
    }

    /// Returns the current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the number of lines in the input.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true once every line (and its terminator) has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position.line >= self.lines.len()
    }

    /// Returns the text of the active line, or [`END_OF_FILE`].
    pub fn current_line_text(&self) -> Arc<str> {
        match self.lines.get(self.position.line) {
            Some(line) => Arc::clone(&line.text),
            None => Arc::from(END_OF_FILE),
        }
    }

    /// Captures the current position together with the active line text.
    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot::new(self.current_line_text(), self.position)
    }

    /// Reads one character and returns it along with the advanced state.
    ///
    /// At the end of a line a synthetic `'\n'` is produced and the cursor
    /// moves to the start of the next line. At end-of-input the state is
    /// returned unchanged with `None`.
    pub fn next_token(&self) -> (InputState, Option<char>) {
        let Some(line) = self.lines.get(self.position.line) else {
            return (self.clone(), None);
        };

        if let Some(&ch) = line.chars.get(self.position.column) {
            (self.with_position(self.position.next_column()), Some(ch))
        } else {
            (self.with_position(self.position.next_line()), Some('\n'))
        }
    }

    fn with_position(&self, position: Position) -> Self {
        Self {
            lines: Arc::clone(&self.lines),
            position,
        }
    }
}

impl std::fmt::Debug for InputState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputState")
            .field("lines", &self.lines.len())
            .field("position", &self.position)
            .finish()
    }
}
