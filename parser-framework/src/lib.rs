//! Parser Framework
//!
//! Labeled parser combinators over a line/column tracked [`InputState`].
//!
//! A [`Parser`] is a named function from input state to [`ParseResult`].
//! Small parsers ([`satisfy`], [`pchar`], [`pstring`]) are combined into
//! bigger ones with sequencing, choice and repetition combinators, and
//! [`create_forward_ref`] ties recursive grammars together. Failures carry
//! the label of the rule that gave up plus a snapshot of where, and render as
//! a caret diagnostic.
//!
//! ```
//! use parser_framework::{pchar, run, sep_by, ParseResult};
//!
//! let list = sep_by(pchar('a'), pchar(','));
//! match run(&list, "a,a,a") {
//!     ParseResult::Success(items, _) => assert_eq!(items, vec!['a', 'a', 'a']),
//!     ParseResult::Failure(failure) => panic!("{failure}"),
//! }
//! ```

pub mod combinators;
pub mod error;
pub mod forward;
pub mod operators;
pub mod parser;
pub mod primitives;
pub mod report;
pub mod result;

pub use combinators::{
    always, and_then, apply, between, bind, choice, fail, keep_left, keep_right, lift2, many,
    many1, map, map_to, opt, or_else, sep_by, sep_by1, sequence, set_label, try_map,
};
pub use common_framework::{InputState, Position, PositionSnapshot};
pub use error::GrammarError;
pub use forward::{create_forward_ref, ForwardRef};
pub use parser::{run, Parser};
pub use primitives::{
    any_of, digit_char, eof, many1_chars, many_chars, pchar, pfloat, pint, pstring, satisfy,
    spaces, spaces1, whitespace_char,
};
pub use report::{format_result, print_result, write_result};
pub use result::{ParseFailure, ParseResult};
