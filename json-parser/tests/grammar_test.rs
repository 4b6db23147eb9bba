//! Values produced by each JSON rule.

use json_parser::{
    j_array, j_bool, j_null, j_number, j_object, j_string, j_value, parse_json, JValue,
};
use parser_framework::{run, ParseResult, Position};
use std::collections::BTreeMap;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn number(value: f64) -> JValue {
    JValue::Number(value)
}

fn object(members: &[(&str, JValue)]) -> JValue {
    JValue::Object(
        members
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect::<BTreeMap<_, _>>(),
    )
}

#[test]
fn test_null() {
    assert_eq!(run(&j_null(), "null").into_value(), Some(JValue::Null));

    let result = run(&j_null(), "nulp");
    let failure = result.failure_ref().expect("should fail");
    assert_eq!(&*failure.label, "null");
    assert_eq!(failure.message, "Unexpected 'p'");
    assert_eq!(failure.at(), Position::at(0, 3));
}

#[test]
fn test_bool() {
    assert_eq!(run(&j_bool(), "true").into_value(), Some(JValue::Bool(true)));
    assert_eq!(run(&j_bool(), "false").into_value(), Some(JValue::Bool(false)));

    let result = run(&j_bool(), "truX");
    let failure = result.failure_ref().expect("should fail");
    assert_eq!(&*failure.label, "bool");
    assert_eq!(failure.message, "Unexpected 't'");
    assert_eq!(failure.at(), Position::new());
}

#[test]
fn test_string_plain_and_empty() {
    assert_eq!(
        run(&j_string(), "\"\"").into_value(),
        Some(JValue::String(String::new()))
    );
    assert_eq!(run(&j_string(), "\"a\"").into_value(), Some(JValue::from("a")));
    assert_eq!(run(&j_string(), "\"ab\"").into_value(), Some(JValue::from("ab")));
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        run(&j_string(), r#""ab\tde""#).into_value(),
        Some(JValue::from("ab\tde"))
    );
    assert_eq!(
        run(&j_string(), r#""\"\\\/\b\f\n\r\t""#).into_value(),
        Some(JValue::from("\"\\/\u{8}\u{c}\n\r\t"))
    );
}

#[test]
fn test_string_unicode_escape() {
    assert_eq!(
        run(&j_string(), r#""ab\u263Ade""#).into_value(),
        Some(JValue::from("ab☺de"))
    );
    assert_eq!(
        run(&j_string(), r#""\u00e9""#).into_value(),
        Some(JValue::from("é"))
    );
}

#[test]
fn test_string_lone_surrogate_becomes_replacement_char() {
    assert_eq!(
        run(&j_string(), r#""\uD800""#).into_value(),
        Some(JValue::from("\u{FFFD}"))
    );
}

#[test]
fn test_string_unterminated() {
    let result = run(&j_string(), "\"abc");
    let failure = result.failure_ref().expect("should fail");
    assert_eq!(&*failure.label, "quoted string");
    assert_eq!(failure.message, "No more input");
}

#[test]
fn test_string_bad_escape() {
    let result = run(&j_string(), r#""a\x""#);
    let failure = result.failure_ref().expect("should fail");
    assert_eq!(&*failure.label, "quoted string");
    assert_eq!(failure.at(), Position::at(0, 2));
}

#[test]
fn test_number_forms() {
    let cases = [
        ("123", 123.0),
        ("-123", -123.0),
        ("0", 0.0),
        ("123.4", 123.4),
        ("0.5", 0.5),
        ("-123.45e2", -12345.0),
        ("1E+2", 100.0),
        ("25e-1", 2.5),
    ];
    for (text, expected) in cases {
        assert_eq!(
            run(&j_number(), text).into_value(),
            Some(number(expected)),
            "parsing {text}"
        );
    }
}

#[test]
fn test_number_stops_before_incomplete_fraction() {
    let result = run(&j_number(), "-123.");
    match result {
        ParseResult::Success(value, remainder) => {
            assert_eq!(value, number(-123.0));
            assert_eq!(remainder.position(), Position::at(0, 4));
        }
        ParseResult::Failure(failure) => panic!("{failure}"),
    }
}

#[test]
fn test_number_leading_zero_is_a_whole_number() {
    let result = run(&j_number(), "00.1");
    assert_eq!(result.remainder().map(|r| r.position()), Some(Position::at(0, 1)));
    assert_eq!(result.into_value(), Some(number(0.0)));
}

#[test]
fn test_number_failures() {
    let result = run(&j_number(), "-x");
    let failure = result.failure_ref().expect("should fail");
    assert_eq!(&*failure.label, "number");
    assert_eq!(failure.at(), Position::at(0, 1));

    let result = run(&j_number(), "1e400");
    let failure = result.failure_ref().expect("should fail");
    assert_eq!(&*failure.label, "number");
    assert_eq!(failure.message, "Number out of range '1e400'");
    assert_eq!(failure.at(), Position::new());
}

#[test]
fn test_array() {
    assert_eq!(run(&j_array(), "[]").into_value(), Some(JValue::Array(vec![])));
    assert_eq!(
        run(&j_array(), "[ 1, 2 ]").into_value(),
        Some(JValue::Array(vec![number(1.0), number(2.0)]))
    );
    assert_eq!(
        run(&j_array(), "[[1],[true, null], \"x\"]").into_value(),
        Some(JValue::Array(vec![
            JValue::Array(vec![number(1.0)]),
            JValue::Array(vec![JValue::Bool(true), JValue::Null]),
            JValue::from("x"),
        ]))
    );
}

#[test]
fn test_array_trailing_comma() {
    let result = run(&j_array(), "[ 1, 2, ]");
    let failure = result.failure_ref().expect("should fail");
    assert_eq!(&*failure.label, "array");
    assert_eq!(failure.message, "Unexpected ','");
    assert_eq!(failure.at(), Position::at(0, 6));
}

#[test]
fn test_object() {
    assert_eq!(run(&j_object(), "{}").into_value(), Some(object(&[])));
    assert_eq!(
        run(&j_object(), r#"{ "a":1, "b" : [ true ] }"#).into_value(),
        Some(object(&[
            ("a", number(1.0)),
            ("b", JValue::Array(vec![JValue::Bool(true)])),
        ]))
    );
}

#[test]
fn test_object_requires_string_keys() {
    let result = run(&j_object(), "{ a: 1 }");
    let failure = result.failure_ref().expect("should fail");
    assert_eq!(&*failure.label, "object");
    assert_eq!(failure.message, "Unexpected 'a'");
    assert_eq!(failure.at(), Position::at(0, 2));
}

#[test]
fn test_value_tries_every_kind() {
    for (text, kind) in [
        ("null", "null"),
        ("false", "bool"),
        ("-1", "number"),
        ("\"s\"", "string"),
        ("[]", "array"),
        ("{}", "object"),
    ] {
        let value = run(&j_value(), text).into_value();
        assert_eq!(value.as_ref().map(JValue::kind), Some(kind), "parsing {text}");
    }
}

#[test]
fn test_document_example() {
    init_logging();
    let text = r#"{
    "name" : "Scott",
    "isMale" : true,
    "bday" : {"year":2001, "month":12, "day":25 },
    "favouriteColors" : ["blue", "green"],
    "emptyArray" : [],
    "emptyObject" : {}
}"#;
    let expected = object(&[
        ("name", JValue::from("Scott")),
        ("isMale", JValue::Bool(true)),
        (
            "bday",
            object(&[
                ("year", number(2001.0)),
                ("month", number(12.0)),
                ("day", number(25.0)),
            ]),
        ),
        (
            "favouriteColors",
            JValue::Array(vec![JValue::from("blue"), JValue::from("green")]),
        ),
        ("emptyArray", JValue::Array(vec![])),
        ("emptyObject", object(&[])),
    ]);
    assert_eq!(parse_json(text), Ok(expected));
}

#[test]
fn test_document_allows_surrounding_whitespace() {
    assert_eq!(parse_json("  \n null \n\n"), Ok(JValue::Null));
    assert_eq!(
        parse_json("{\n  \"a\" : [ 1 , 2 ] ,\n  \"b\":null\n}"),
        Ok(object(&[
            ("a", JValue::Array(vec![number(1.0), number(2.0)])),
            ("b", JValue::Null),
        ]))
    );
}

#[test]
fn test_document_rejects_trailing_text() {
    let err = parse_json("null x").unwrap_err();
    assert_eq!(err.label(), "end of input");
    assert_eq!(err.position(), Position::at(0, 5));
}

#[test]
fn test_document_reports_last_alternative() {
    // Every alternative failed at the top level, so the last one speaks.
    let err = parse_json("[ 1, 2, ]").unwrap_err();
    assert_eq!(err.label(), "object");
    assert_eq!(err.position(), Position::new());
}

#[test]
fn test_empty_document() {
    let err = parse_json("").unwrap_err();
    assert_eq!(err.label(), "object");
    assert_eq!(
        err.to_string(),
        "Line:0 Col:0 Error parsing object\nend of file\n^No more input"
    );
}

#[test]
fn test_deep_nesting() {
    let depth = 64;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let mut value = parse_json(&text).expect("nested arrays should parse");
    for _ in 1..depth {
        value = match value {
            JValue::Array(mut items) if items.len() == 1 => items.remove(0),
            other => panic!("unexpected {other:?}"),
        };
    }
    assert_eq!(value, JValue::Array(vec![]));
}

#[test]
fn test_documented_literals() {
    assert_eq!(parse_json("null"), Ok(JValue::Null));
    assert_eq!(parse_json("true"), Ok(JValue::Bool(true)));
    assert_eq!(parse_json("-123.45e2"), Ok(number(-12345.0)));
    assert_eq!(parse_json(r#""ab\u263Ade""#), Ok(JValue::from("ab☺de")));
    assert_eq!(
        parse_json("[1, 2, 3]"),
        Ok(JValue::Array(vec![number(1.0), number(2.0), number(3.0)]))
    );
    assert_eq!(
        parse_json(r#"{"a":1,"b":2}"#),
        Ok(object(&[("a", number(1.0)), ("b", number(2.0))]))
    );
}
