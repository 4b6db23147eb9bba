//! Minimal parser example.
//!
//! Demonstrates the parser-framework workflow:
//! 1. Start from primitive parsers (`pchar`, `pint`, `spaces`).
//! 2. Combine them with sequencing, choice and repetition.
//! 3. Give the rules readable labels.
//! 4. Run the result and print either the value or a caret diagnostic.
//!
//! The example parses simple sums and differences of integers, e.g. `1 + 2 - 3`.

use parser_framework::{choice, many, pchar, pint, print_result, run, spaces, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
}

fn operator() -> Parser<Op> {
    choice(vec![pchar('+').map_to(Op::Add), pchar('-').map_to(Op::Subtract)])
        .with_label("operator")
}

/// expr := int (op int)*
fn expression() -> Parser<i64> {
    let number = pint() - spaces();
    let tail = many((operator() - spaces()) + number.clone());
    (number + tail)
        .try_map(|(first, rest)| {
            rest.into_iter()
                .try_fold(first, |acc, (op, value)| match op {
                    Op::Add => acc.checked_add(value),
                    Op::Subtract => acc.checked_sub(value),
                })
                .ok_or_else(|| "Result out of range".to_string())
        })
        .with_label("expression")
}

fn main() {
    let parser = expression();

    for input in [
        "1 + 2 - 3",
        "10 - 4 + 100",
        "7",
        "x + 1",
        "1 +\n  + 2",
        "9223372036854775807 + 1",
    ] {
        println!("输入: {:?}", input);
        let result = run(&parser, input);
        print_result(&result);
        println!("{}", "=".repeat(50));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_sums() {
        assert_eq!(run(&expression(), "1 + 2 - 3").into_value(), Some(0));
        assert_eq!(run(&expression(), "10 - 4 + 100").into_value(), Some(106));
    }

    #[test]
    fn test_expression_overflow_is_a_failure() {
        let result = run(&expression(), "9223372036854775807 + 1");
        let failure = result.failure_ref().expect("should fail");
        assert_eq!(&*failure.label, "expression");
        assert_eq!(failure.message, "Result out of range");

        let result = run(&expression(), "-9223372036854775807 - 2");
        assert!(result.is_failure());
    }
}
