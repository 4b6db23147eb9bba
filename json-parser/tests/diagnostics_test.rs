//! Rendered JSON diagnostics, checked byte for byte.

use json_parser::{j_array, j_bool, parse_json, parse_json_with, DuplicateKeys, JsonOptions};
use parser_framework::{format_result, run};

#[test]
fn test_bool_diagnostic() {
    assert_eq!(
        format_result(&run(&j_bool(), "truX")),
        "Line:0 Col:0 Error parsing bool\ntruX\n^Unexpected 't'"
    );
}

#[test]
fn test_trailing_comma_diagnostic() {
    assert_eq!(
        format_result(&run(&j_array(), "[ 1, 2, ]")),
        "Line:0 Col:6 Error parsing array\n[ 1, 2, ]\n      ^Unexpected ','"
    );
}

#[test]
fn test_trailing_text_diagnostic() {
    let err = parse_json("null x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Line:0 Col:5 Error parsing end of input\nnull x\n     ^Unexpected 'x'"
    );
}

#[test]
fn test_multiline_diagnostic() {
    let err = parse_json("{\n  \"a\": nul\n}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Line:1 Col:2 Error parsing object\n  \"a\": nul\n  ^Unexpected '\"'"
    );
}

#[test]
fn test_duplicate_key_diagnostic() {
    let options = JsonOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
    let err = parse_json_with(r#"{ "a": 1, "a": 2 }"#, options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Line:0 Col:2 Error parsing object\n{ \"a\": 1, \"a\": 2 }\n  ^Duplicate key \"a\""
    );
}

#[test]
fn test_nesting_too_deep_diagnostic() {
    let err = parse_json_with("[[[1]]]", JsonOptions::new().with_max_depth(2)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Line:0 Col:2 Error parsing array\n[[[1]]]\n  ^Nesting too deep, limit is 2"
    );
}
