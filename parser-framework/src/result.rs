use common_framework::{InputState, Position, PositionSnapshot};
use std::fmt;
use std::sync::Arc;

/// Why a parser gave up, and where.
///
/// `Display` renders the three-line caret diagnostic:
///
/// ```text
/// Line:0 Col:1 Error parsing a
/// xyz
///  ^Unexpected 'y'
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// Label of the parser that reported the failure.
    pub label: Arc<str>,
    /// What went wrong, e.g. `No more input` or `Unexpected 'x'`.
    pub message: String,
    /// Where it went wrong.
    pub position: PositionSnapshot,
}

impl ParseFailure {
    pub fn new(label: Arc<str>, message: impl Into<String>, input: &InputState) -> Self {
        Self {
            label,
            message: message.into(),
            position: input.snapshot(),
        }
    }

    /// Same message and position, different label.
    pub fn relabel(self, label: &Arc<str>) -> Self {
        Self {
            label: Arc::clone(label),
            ..self
        }
    }

    /// Returns the line/column where the failure occurred.
    pub fn at(&self) -> Position {
        self.position.position()
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line:{} Col:{} Error parsing {}\n{}\n{:width$}^{}",
            self.position.line,
            self.position.column,
            self.label,
            self.position.current_line,
            "",
            self.message,
            width = self.position.column,
        )
    }
}

impl std::error::Error for ParseFailure {}

/// The two-track outcome of running a parser.
#[derive(Debug, Clone)]
pub enum ParseResult<T> {
    /// The parsed value and the input left over after it.
    Success(T, InputState),
    Failure(ParseFailure),
}

impl<T> ParseResult<T> {
    /// Builds a failure located at `input`.
    pub fn failure(label: &Arc<str>, message: impl Into<String>, input: &InputState) -> Self {
        ParseResult::Failure(ParseFailure::new(Arc::clone(label), message, input))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(..))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the parsed value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Success(value, _) => Some(value),
            ParseResult::Failure(_) => None,
        }
    }

    /// Consumes the result and returns the parsed value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            ParseResult::Success(value, _) => Some(value),
            ParseResult::Failure(_) => None,
        }
    }

    /// Returns the unconsumed input after a success.
    pub fn remainder(&self) -> Option<&InputState> {
        match self {
            ParseResult::Success(_, remainder) => Some(remainder),
            ParseResult::Failure(_) => None,
        }
    }

    /// Returns the failure, if any.
    pub fn failure_ref(&self) -> Option<&ParseFailure> {
        match self {
            ParseResult::Success(..) => None,
            ParseResult::Failure(failure) => Some(failure),
        }
    }

    /// Converts into a standard `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(T, InputState), ParseFailure> {
        match self {
            ParseResult::Success(value, remainder) => Ok((value, remainder)),
            ParseResult::Failure(failure) => Err(failure),
        }
    }

    /// Transforms a successful value; failures pass through unchanged.
    pub fn map_value<U, F>(self, f: F) -> ParseResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ParseResult::Success(value, remainder) => ParseResult::Success(f(value), remainder),
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    /// Replaces the label of a failure; successes pass through unchanged.
    pub fn relabel(self, label: &Arc<str>) -> Self {
        match self {
            ParseResult::Failure(failure) => ParseResult::Failure(failure.relabel(label)),
            success => success,
        }
    }
}
