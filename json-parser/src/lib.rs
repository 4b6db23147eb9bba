//! JSON Parser
//!
//! A JSON reader built entirely from `parser-framework` combinators. It is
//! both a usable parser and the reference grammar for the framework:
//! scalars, strings with escapes, numbers, and the mutually recursive array
//! and object rules wired through a forward reference.
//!
//! Syntax errors come back as [`JsonError::Syntax`], which displays as a
//! caret diagnostic:
//!
//! ```
//! use json_parser::parse_json;
//!
//! let err = parse_json("{ \"a\": tru }").unwrap_err();
//! assert_eq!(err.label(), "object");
//! println!("{err}");
//! ```
//!
//! Arrays and objects nested past [`JsonOptions::max_depth`] fail with
//! [`JsonError::NestingTooDeep`] instead of exhausting the stack.

pub mod error;
pub mod grammar;
pub mod options;
pub mod value;

pub use error::JsonError;
pub use grammar::{
    j_array, j_bool, j_null, j_number, j_object, j_string, j_value, parse_json, parse_json_with,
    JsonGrammar,
};
pub use options::{DuplicateKeys, JsonOptions, DEFAULT_MAX_DEPTH};
pub use value::JValue;
