use crate::combinators;
use crate::result::ParseResult;
use common_framework::InputState;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

type ParseFn<T> = Rc<dyn Fn(&InputState) -> ParseResult<T>>;

/// A labeled parsing function.
///
/// Parsers are built once and then run any number of times. Every
/// combinator returns a new `Parser`; the closure is shared, so cloning is
/// cheap and clones behave identically.
pub struct Parser<T> {
    label: Arc<str>,
    parse_fn: ParseFn<T>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            label: Arc::clone(&self.label),
            parse_fn: Rc::clone(&self.parse_fn),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").field("label", &self.label).finish()
    }
}

impl<T: 'static> Parser<T> {
    /// Wraps a parsing function under the given label.
    pub fn new<F>(label: impl Into<Arc<str>>, parse_fn: F) -> Self
    where
        F: Fn(&InputState) -> ParseResult<T> + 'static,
    {
        Parser {
            label: label.into(),
            parse_fn: Rc::new(parse_fn),
        }
    }

    /// Returns the human-readable name of this parser.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn label_arc(&self) -> Arc<str> {
        Arc::clone(&self.label)
    }

    /// Runs the parser against an input state.
    pub fn parse(&self, input: &InputState) -> ParseResult<T> {
        (self.parse_fn)(input)
    }

    /// Runs the parser against the start of `text`.
    pub fn run(&self, text: &str) -> ParseResult<T> {
        run(self, text)
    }
}

// === Combinators as methods ===

impl<T: 'static> Parser<T> {
    /// Map: transform the result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> Parser<U> {
        combinators::map(self, f)
    }

    /// Bind: choose the next parser from the value just parsed
    pub fn bind<U: 'static, F: Fn(T) -> Parser<U> + 'static>(self, f: F) -> Parser<U> {
        combinators::bind(self, f)
    }

    /// Sequence: parse self then other, return (T, U)
    pub fn and_then<U: 'static>(self, other: Parser<U>) -> Parser<(T, U)> {
        combinators::and_then(self, other)
    }

    /// Choice: try self, if it fails try other from the same input
    pub fn or_else(self, other: Parser<T>) -> Parser<T> {
        combinators::or_else(self, other)
    }

    /// Keep left: parse self then other, discard other's result
    pub fn keep_left<U: 'static>(self, other: Parser<U>) -> Parser<T> {
        combinators::keep_left(self, other)
    }

    /// Keep right: parse self then other, discard self's result
    pub fn keep_right<U: 'static>(self, other: Parser<U>) -> Parser<U> {
        combinators::keep_right(self, other)
    }

    pub fn many(self) -> Parser<Vec<T>> {
        combinators::many(self)
    }

    pub fn many1(self) -> Parser<Vec<T>> {
        combinators::many1(self)
    }

    pub fn opt(self) -> Parser<Option<T>> {
        combinators::opt(self)
    }

    pub fn sep_by<S: 'static>(self, separator: Parser<S>) -> Parser<Vec<T>> {
        combinators::sep_by(self, separator)
    }

    pub fn sep_by1<S: 'static>(self, separator: Parser<S>) -> Parser<Vec<T>> {
        combinators::sep_by1(self, separator)
    }

    /// Map with a conversion that may fail
    pub fn try_map<U: 'static, F: Fn(T) -> Result<U, String> + 'static>(self, f: F) -> Parser<U> {
        combinators::try_map(self, f)
    }

    /// Replace the result with a constant
    pub fn map_to<U: Clone + 'static>(self, value: U) -> Parser<U> {
        combinators::map_to(self, value)
    }

    /// Give this parser a readable name in error messages
    pub fn with_label(self, label: impl Into<Arc<str>>) -> Parser<T> {
        combinators::set_label(self, label)
    }
}

/// Runs `parser` over `text` from line 0, column 0.
pub fn run<T: 'static>(parser: &Parser<T>, text: &str) -> ParseResult<T> {
    let input = InputState::from_text(text);
    log::debug!(
        "running parser '{}' over {} line(s)",
        parser.label(),
        input.line_count()
    );

    let result = parser.parse(&input);
    match &result {
        ParseResult::Success(_, remainder) => {
            log::debug!(
                "parser '{}' succeeded, stopped at {:?}",
                parser.label(),
                remainder.position()
            );
        }
        ParseResult::Failure(failure) => {
            log::debug!(
                "parser '{}' failed as '{}' at {:?}: {}",
                parser.label(),
                failure.label,
                failure.at(),
                failure.message
            );
        }
    }
    result
}
