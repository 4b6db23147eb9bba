use crate::combinators::{and_then, choice, many, many1, map, opt, sequence, set_label, try_map};
use crate::parser::Parser;
use crate::result::ParseResult;
use common_framework::InputState;
use std::sync::Arc;

// === Primitive Parsers ===

/// Matches a single character accepted by `predicate`.
///
/// Fails with `No more input` at end-of-input, or with `Unexpected 'c'`
/// positioned at the rejected character.
pub fn satisfy<F>(predicate: F, label: impl Into<Arc<str>>) -> Parser<char>
where
    F: Fn(char) -> bool + 'static,
{
    let label = label.into();
    let failure_label = Arc::clone(&label);
    Parser::new(label, move |input: &InputState| {
        let (remaining, token) = input.next_token();
        match token {
            None => ParseResult::failure(&failure_label, "No more input", input),
            Some(ch) if predicate(ch) => ParseResult::Success(ch, remaining),
            Some(ch) => ParseResult::failure(&failure_label, format!("Unexpected '{ch}'"), input),
        }
    })
}

/// Matches exactly `expected`.
pub fn pchar(expected: char) -> Parser<char> {
    satisfy(move |ch| ch == expected, expected.to_string())
}

/// Matches the characters of `expected` in order and returns them as a string.
pub fn pstring(expected: &str) -> Parser<String> {
    let chars = expected.chars().map(pchar).collect();
    set_label(
        map(sequence(chars), |chars| chars.into_iter().collect::<String>()),
        expected,
    )
}

/// Matches any one of `chars`.
///
/// # Panics
///
/// Panics if `chars` is empty.
pub fn any_of(chars: &[char]) -> Parser<char> {
    let label = format!("any of {chars:?}");
    set_label(choice(chars.iter().copied().map(pchar).collect()), label)
}

pub fn digit_char() -> Parser<char> {
    satisfy(|ch| ch.is_ascii_digit(), "digit")
}

pub fn whitespace_char() -> Parser<char> {
    satisfy(char::is_whitespace, "whitespace")
}

/// Zero or more whitespace characters, line breaks included.
pub fn spaces() -> Parser<Vec<char>> {
    many(whitespace_char())
}

/// One or more whitespace characters.
pub fn spaces1() -> Parser<Vec<char>> {
    many1(whitespace_char())
}

/// Zero or more characters matched by `parser`, collected into a string.
pub fn many_chars(parser: Parser<char>) -> Parser<String> {
    map(many(parser), |chars| chars.into_iter().collect())
}

/// One or more characters matched by `parser`, collected into a string.
pub fn many1_chars(parser: Parser<char>) -> Parser<String> {
    map(many1(parser), |chars| chars.into_iter().collect())
}

/// Optional `-` followed by decimal digits.
pub fn pint() -> Parser<i64> {
    let signed_digits = and_then(opt(pchar('-')), many1_chars(digit_char()));
    let integer = try_map(signed_digits, |(sign, digits)| {
        let text = match sign {
            Some(_) => format!("-{digits}"),
            None => digits,
        };
        text.parse::<i64>().map_err(|_| "Integer out of range".to_string())
    });
    set_label(integer, "integer")
}

/// Optional `-`, digits, `.`, digits.
pub fn pfloat() -> Parser<f64> {
    let digits = || many1_chars(digit_char());
    let signed = and_then(opt(pchar('-')), digits());
    let fraction = and_then(pchar('.'), digits());
    let float = try_map(and_then(signed, fraction), |((sign, whole), (_, frac))| {
        let text = format!("{}{whole}.{frac}", if sign.is_some() { "-" } else { "" });
        text.parse::<f64>().map_err(|_| format!("Invalid float '{text}'"))
    });
    set_label(float, "float")
}

/// Succeeds only when no input is left.
pub fn eof() -> Parser<()> {
    let label: Arc<str> = Arc::from("end of input");
    let failure_label = Arc::clone(&label);
    Parser::new(label, move |input: &InputState| match input.next_token() {
        (_, None) => ParseResult::Success((), input.clone()),
        (_, Some(ch)) => ParseResult::failure(&failure_label, format!("Unexpected '{ch}'"), input),
    })
}
