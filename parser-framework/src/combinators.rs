use crate::parser::Parser;
use crate::result::ParseResult;
use common_framework::InputState;
use std::sync::Arc;

/// Succeeds with `value` without consuming input.
pub fn always<T: Clone + 'static>(value: T) -> Parser<T> {
    Parser::new("always", move |input: &InputState| {
        ParseResult::Success(value.clone(), input.clone())
    })
}

/// Fails with `message` at the current position without consuming input.
pub fn fail<T: 'static>(label: impl Into<Arc<str>>, message: impl Into<String>) -> Parser<T> {
    let label = label.into();
    let failure_label = Arc::clone(&label);
    let message = message.into();
    Parser::new(label, move |input: &InputState| {
        ParseResult::failure(&failure_label, message.as_str(), input)
    })
}

/// Runs `parser`, then runs whatever parser `f` builds from its value on the
/// remaining input. The second parser's outcome is returned as is.
pub fn bind<T, U, F>(parser: Parser<T>, f: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Parser<U> + 'static,
{
    Parser::new(parser.label_arc(), move |input: &InputState| {
        match parser.parse(input) {
            ParseResult::Success(value, remainder) => f(value).parse(&remainder),
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    })
}

/// Transforms the parsed value; failures pass through unchanged.
pub fn map<T, U, F>(parser: Parser<T>, f: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    Parser::new(parser.label_arc(), move |input: &InputState| {
        parser.parse(input).map_value(&f)
    })
}

/// Transforms the parsed value with a conversion that may be refused.
///
/// A refusal fails with the returned message, positioned where `parser`
/// started and labeled like `parser`.
pub fn try_map<T, U, F>(parser: Parser<T>, f: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Result<U, String> + 'static,
{
    let label = parser.label_arc();
    let failure_label = Arc::clone(&label);
    Parser::new(label, move |input: &InputState| match parser.parse(input) {
        ParseResult::Success(value, remainder) => match f(value) {
            Ok(mapped) => ParseResult::Success(mapped, remainder),
            Err(message) => ParseResult::failure(&failure_label, message, input),
        },
        ParseResult::Failure(failure) => ParseResult::Failure(failure),
    })
}

/// Replaces the parsed value with a constant.
pub fn map_to<T, U>(parser: Parser<T>, value: U) -> Parser<U>
where
    T: 'static,
    U: Clone + 'static,
{
    map(parser, move |_| value.clone())
}

/// Runs `first` then `second`, pairing their values.
///
/// A failure on either side is passed on as is, so it still names the
/// parser that actually gave up. The `"{first} andThen {second}"` label only
/// names the combined parser; it never appears in a failure. Wrap the result
/// in [`set_label`] to report failures under one name.
pub fn and_then<T: 'static, U: 'static>(first: Parser<T>, second: Parser<U>) -> Parser<(T, U)> {
    let label = format!("{} andThen {}", first.label(), second.label());
    Parser::new(label, move |input: &InputState| match first.parse(input) {
        ParseResult::Success(a, remainder) => second.parse(&remainder).map_value(|b| (a, b)),
        ParseResult::Failure(failure) => ParseResult::Failure(failure),
    })
}

/// Tries `first`; if it fails, runs `second` against the same input.
///
/// A success of `first` is returned untouched. Otherwise `second`'s outcome
/// is returned verbatim, including its failure label and position.
pub fn or_else<T: 'static>(first: Parser<T>, second: Parser<T>) -> Parser<T> {
    let label = format!("{} orElse {}", first.label(), second.label());
    Parser::new(label, move |input: &InputState| match first.parse(input) {
        ParseResult::Success(value, remainder) => ParseResult::Success(value, remainder),
        ParseResult::Failure(_) => second.parse(input),
    })
}

/// Left fold of [`or_else`] over `parsers`.
///
/// When every alternative fails, the last alternative's failure is reported.
///
/// # Panics
///
/// Panics if `parsers` is empty.
pub fn choice<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    let mut parsers = parsers.into_iter();
    let Some(first) = parsers.next() else {
        panic!("choice requires at least one parser");
    };
    parsers.fold(first, or_else)
}

/// Applies a parsed function to a parsed value.
pub fn apply<T, U, F>(function: Parser<F>, argument: Parser<T>) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    map(and_then(function, argument), |(f, x)| f(x))
}

/// Lifts a two-argument function to work on parsers.
pub fn lift2<A, B, U, F>(f: F, first: Parser<A>, second: Parser<B>) -> Parser<U>
where
    A: 'static,
    B: 'static,
    U: 'static,
    F: Fn(A, B) -> U + 'static,
{
    map(and_then(first, second), move |(a, b)| f(a, b))
}

/// Runs each parser in order, collecting their values.
pub fn sequence<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<Vec<T>> {
    let label = parsers
        .iter()
        .map(|p| p.label().to_string())
        .collect::<Vec<_>>()
        .join(" then ");
    Parser::new(label, move |input: &InputState| {
        let mut values = Vec::with_capacity(parsers.len());
        let mut input = input.clone();
        for parser in &parsers {
            match parser.parse(&input) {
                ParseResult::Success(value, remainder) => {
                    values.push(value);
                    input = remainder;
                }
                ParseResult::Failure(failure) => return ParseResult::Failure(failure),
            }
        }
        ParseResult::Success(values, input)
    })
}

/// Returns false, with a warning, when `parser` went from `before` to `after`
/// without consuming anything.
fn made_progress<T: 'static>(
    parser: &Parser<T>,
    before: &InputState,
    after: &InputState,
) -> bool {
    if after.position() != before.position() {
        return true;
    }
    log::warn!(
        "parser '{}' succeeded without consuming input at {:?}; stopping repetition",
        parser.label(),
        before.position()
    );
    false
}

/// Keeps applying `parser` to the rest of the input until it fails.
///
/// Stops early, with a warning, if `parser` succeeds without consuming
/// anything, since that would repeat forever.
fn repeat<T: 'static>(
    parser: &Parser<T>,
    mut values: Vec<T>,
    mut input: InputState,
) -> (Vec<T>, InputState) {
    loop {
        match parser.parse(&input) {
            ParseResult::Success(value, remainder) => {
                values.push(value);
                if !made_progress(parser, &input, &remainder) {
                    return (values, remainder);
                }
                input = remainder;
            }
            ParseResult::Failure(_) => return (values, input),
        }
    }
}

/// Zero or more occurrences. Never fails.
pub fn many<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    let label = format!("many {}", parser.label());
    Parser::new(label, move |input: &InputState| {
        let (values, remainder) = repeat(&parser, Vec::new(), input.clone());
        ParseResult::Success(values, remainder)
    })
}

/// One or more occurrences. Fails only if the first application fails.
pub fn many1<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    let label = format!("many1 {}", parser.label());
    Parser::new(label, move |input: &InputState| match parser.parse(input) {
        ParseResult::Success(head, remainder) => {
            if !made_progress(&parser, input, &remainder) {
                return ParseResult::Success(vec![head], remainder);
            }
            let (values, remainder) = repeat(&parser, vec![head], remainder);
            ParseResult::Success(values, remainder)
        }
        ParseResult::Failure(failure) => ParseResult::Failure(failure),
    })
}

/// Zero or one occurrence. Never fails.
pub fn opt<T: 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    let label = format!("opt {}", parser.label());
    Parser::new(label, move |input: &InputState| match parser.parse(input) {
        ParseResult::Success(value, remainder) => ParseResult::Success(Some(value), remainder),
        ParseResult::Failure(_) => ParseResult::Success(None, input.clone()),
    })
}

/// Keep left: run both, keep the first value.
pub fn keep_left<T: 'static, U: 'static>(first: Parser<T>, second: Parser<U>) -> Parser<T> {
    map(and_then(first, second), |(a, _)| a)
}

/// Keep right: run both, keep the second value.
pub fn keep_right<T: 'static, U: 'static>(first: Parser<T>, second: Parser<U>) -> Parser<U> {
    map(and_then(first, second), |(_, b)| b)
}

/// Runs `open`, `parser`, `close` in order and keeps only `parser`'s value.
pub fn between<O, T, C>(open: Parser<O>, parser: Parser<T>, close: Parser<C>) -> Parser<T>
where
    O: 'static,
    T: 'static,
    C: 'static,
{
    keep_left(keep_right(open, parser), close)
}

/// One or more `parser` values separated by `separator`.
pub fn sep_by1<T: 'static, S: 'static>(parser: Parser<T>, separator: Parser<S>) -> Parser<Vec<T>> {
    let label = format!("{} sepBy1 {}", parser.label(), separator.label());
    let separator_then_item = keep_right(separator, parser.clone());
    Parser::new(label, move |input: &InputState| match parser.parse(input) {
        ParseResult::Success(head, remainder) => {
            let (values, remainder) = repeat(&separator_then_item, vec![head], remainder);
            ParseResult::Success(values, remainder)
        }
        ParseResult::Failure(failure) => ParseResult::Failure(failure),
    })
}

/// Zero or more `parser` values separated by `separator`. Never fails.
pub fn sep_by<T: 'static, S: 'static>(parser: Parser<T>, separator: Parser<S>) -> Parser<Vec<T>> {
    let label = format!("{} sepBy {}", parser.label(), separator.label());
    let one_or_more = sep_by1(parser, separator);
    Parser::new(label, move |input: &InputState| match one_or_more.parse(input) {
        ParseResult::Success(values, remainder) => ParseResult::Success(values, remainder),
        ParseResult::Failure(_) => ParseResult::Success(Vec::new(), input.clone()),
    })
}

/// Renames `parser`: failures keep their message and position but report
/// `label` instead of whatever low-level parser gave up.
pub fn set_label<T: 'static>(parser: Parser<T>, label: impl Into<Arc<str>>) -> Parser<T> {
    let label = label.into();
    let failure_label = Arc::clone(&label);
    Parser::new(label, move |input: &InputState| {
        parser.parse(input).relabel(&failure_label)
    })
}
