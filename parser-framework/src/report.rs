use crate::result::ParseResult;
use std::fmt::Debug;
use std::io::{self, Write};

/// Renders a result the way [`print_result`] shows it.
///
/// Successes render as the value's `Debug` form; failures as the three-line
/// caret diagnostic of [`ParseFailure`](crate::ParseFailure).
pub fn format_result<T: Debug>(result: &ParseResult<T>) -> String {
    match result {
        ParseResult::Success(value, _) => format!("{value:?}"),
        ParseResult::Failure(failure) => failure.to_string(),
    }
}

/// Writes [`format_result`] followed by a newline.
pub fn write_result<T: Debug, W: Write>(out: &mut W, result: &ParseResult<T>) -> io::Result<()> {
    writeln!(out, "{}", format_result(result))
}

/// Prints [`format_result`] to stdout.
pub fn print_result<T: Debug>(result: &ParseResult<T>) {
    println!("{}", format_result(result));
}
