//! The JSON grammar, assembled from parser-framework combinators.
//!
//! Every rule is labeled, so a failure names the JSON construct that gave up
//! (`null`, `bool`, `quoted string`, `number`, `array`, `object`) together
//! with the line, column and offending character.

use crate::error::JsonError;
use crate::options::{DuplicateKeys, JsonOptions};
use crate::value::JValue;
use parser_framework::{
    between, choice, create_forward_ref, eof, many1_chars, many_chars, pchar, pstring, run,
    satisfy, sequence, spaces, InputState, ParseFailure, ParseResult, Parser,
};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

// === Scalars ===

/// The literal `null`.
pub fn j_null() -> Parser<JValue> {
    pstring("null").map_to(JValue::Null).with_label("null")
}

/// `true` or `false`.
pub fn j_bool() -> Parser<JValue> {
    let j_true = pstring("true").map_to(JValue::Bool(true));
    let j_false = pstring("false").map_to(JValue::Bool(false));
    (j_true | j_false).with_label("bool")
}

/// Any character except `\` and `"`.
fn j_unescaped_char() -> Parser<char> {
    satisfy(|ch| ch != '\\' && ch != '"', "char")
}

/// One of the two-character escapes `\" \\ \/ \b \f \n \r \t`.
fn j_escaped_char() -> Parser<char> {
    let escapes = [
        ("\\\"", '"'),
        ("\\\\", '\\'),
        ("\\/", '/'),
        ("\\b", '\u{0008}'),
        ("\\f", '\u{000C}'),
        ("\\n", '\n'),
        ("\\r", '\r'),
        ("\\t", '\t'),
    ];
    choice(
        escapes
            .into_iter()
            .map(|(text, ch)| pstring(text).map_to(ch))
            .collect(),
    )
    .with_label("escaped char")
}

/// `\u` followed by four hex digits.
///
/// Code points that are not scalar values (lone surrogates) decode to
/// U+FFFD.
fn j_unicode_char() -> Parser<char> {
    let hex_digit = satisfy(|ch| ch.is_ascii_hexdigit(), "hex digit");
    let four_hex_digits = sequence(vec![hex_digit; 4]);
    (pchar('\\') * pchar('u') * four_hex_digits)
        .map(|digits| {
            let text: String = digits.into_iter().collect();
            u32::from_str_radix(&text, 16)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .with_label("unicode char")
}

/// A double-quoted string with its escapes decoded.
fn quoted_string() -> Parser<String> {
    let quote = pchar('"').with_label("quote");
    let string_char = j_unescaped_char() | j_escaped_char() | j_unicode_char();
    between(quote.clone(), many_chars(string_char), quote).with_label("quoted string")
}

pub fn j_string() -> Parser<JValue> {
    quoted_string().map(JValue::String).with_label("quoted string")
}

/// `-? (0 | [1-9][0-9]*) (.[0-9]+)? ([eE][+-]?[0-9]+)?`, read as `f64`.
pub fn j_number() -> Parser<JValue> {
    let opt_sign = pchar('-').opt();
    let zero = pstring("0");
    let digit_one_nine = satisfy(|ch| ch.is_ascii_digit() && ch != '0', "1-9");
    let digit = satisfy(|ch| ch.is_ascii_digit(), "digit");
    let exponent_marker = pchar('e') | pchar('E');
    let opt_plus_minus = (pchar('-') | pchar('+')).opt();

    let non_zero_int =
        (digit_one_nine + many_chars(digit.clone())).map(|(first, rest)| format!("{first}{rest}"));
    let int_part = zero | non_zero_int;
    let fraction_part = pchar('.') * many1_chars(digit.clone());
    let exponent_part = exponent_marker * (opt_plus_minus + many1_chars(digit));

    (opt_sign + int_part + fraction_part.opt() + exponent_part.opt())
        .try_map(|(((sign, int_part), fraction), exponent)| {
            let mut text = String::new();
            if sign.is_some() {
                text.push('-');
            }
            text.push_str(&int_part);
            if let Some(digits) = fraction {
                text.push('.');
                text.push_str(&digits);
            }
            if let Some((exponent_sign, digits)) = exponent {
                text.push('e');
                text.extend(exponent_sign);
                text.push_str(&digits);
            }
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(JValue::Number(value)),
                Ok(_) => Err(format!("Number out of range '{text}'")),
                Err(_) => Err(format!("Invalid number '{text}'")),
            }
        })
        .with_label("number")
}

// === Containers ===

/// `ch` followed by any whitespace.
fn token(ch: char) -> Parser<char> {
    pchar(ch) - spaces()
}

fn array_rule(value: Parser<JValue>) -> Parser<JValue> {
    let item = value - spaces();
    between(token('['), item.sep_by(token(',')), token(']'))
        .map(JValue::Array)
        .with_label("array")
}

/// Collects members, letting later duplicates overwrite earlier ones.
fn last_wins(members: Vec<(String, JValue)>) -> BTreeMap<String, JValue> {
    let mut object = BTreeMap::new();
    for (key, value) in members {
        if object.insert(key.clone(), value).is_some() {
            log::debug!("duplicate key {key:?}, keeping the later value");
        }
    }
    object
}

/// Collects members, refusing the first repeated key.
fn reject_duplicates(members: Vec<(String, JValue)>) -> Result<BTreeMap<String, JValue>, String> {
    let mut object = BTreeMap::new();
    for (key, value) in members {
        if object.contains_key(&key) {
            return Err(format!("Duplicate key {key:?}"));
        }
        object.insert(key, value);
    }
    Ok(object)
}

fn object_rule(value: Parser<JValue>, duplicate_keys: DuplicateKeys) -> Parser<JValue> {
    let left = spaces() * token('{');
    let key = quoted_string() - spaces();
    let member = (key - token(':')) + (value - spaces());
    let members = member.sep_by(token(','));
    let members = match duplicate_keys {
        DuplicateKeys::LastWins => members.map(last_wins),
        DuplicateKeys::Reject => members.try_map(reject_duplicates),
    };
    between(left, members, token('}'))
        .map(JValue::Object)
        .with_label("object")
}

// === Nesting ===

/// Open-container count for one grammar, plus the first failure caused by
/// going past the limit.
#[derive(Default)]
struct Nesting {
    depth: Cell<usize>,
    overflow: RefCell<Option<ParseFailure>>,
}

/// Closes one nesting level when dropped, even if parsing unwinds.
struct OpenLevel<'a>(&'a Cell<usize>);

impl Drop for OpenLevel<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

/// True if the next non-whitespace character is `open`.
fn opens_with(input: &InputState, open: char) -> bool {
    let mut state = input.clone();
    loop {
        match state.next_token() {
            (next, Some(ch)) if ch.is_whitespace() => state = next,
            (_, Some(ch)) => return ch == open,
            (_, None) => return false,
        }
    }
}

/// Runs `container` one nesting level deeper. A container opening past
/// `max_depth` fails with `Nesting too deep` at its opening bracket instead
/// of recursing further.
fn depth_limited(
    container: Parser<JValue>,
    open: char,
    nesting: Rc<Nesting>,
    max_depth: usize,
) -> Parser<JValue> {
    let label: Arc<str> = Arc::from(container.label());
    Parser::new(Arc::clone(&label), move |input: &InputState| {
        let depth = nesting.depth.get();
        if depth >= max_depth && opens_with(input, open) {
            let failure = ParseFailure::new(
                Arc::clone(&label),
                format!("Nesting too deep, limit is {max_depth}"),
                input,
            );
            log::debug!("{} nesting limit {max_depth} reached at {:?}", label, failure.at());
            nesting
                .overflow
                .borrow_mut()
                .get_or_insert_with(|| failure.clone());
            return ParseResult::Failure(failure);
        }

        nesting.depth.set(depth + 1);
        let _level = OpenLevel(&nesting.depth);
        container.parse(input)
    })
}

// === Grammar ===

/// A fully wired JSON grammar.
///
/// `value` is recursive: arrays and objects contain values. The rules are
/// tied together through a forward reference, which forms a reference
/// cycle, so a grammar is never freed. Build one per configuration and reuse
/// it; [`parse_json`] and [`parse_json_with`] keep one per thread.
///
/// Arrays and objects nest at most `options.max_depth` deep, which keeps
/// recursion within the stack.
pub struct JsonGrammar {
    options: JsonOptions,
    nesting: Rc<Nesting>,
    value: Parser<JValue>,
    array: Parser<JValue>,
    object: Parser<JValue>,
    document: Parser<JValue>,
}

impl JsonGrammar {
    pub fn new(options: JsonOptions) -> Self {
        log::debug!("building JSON grammar with {options:?}");
        let (value, value_ref) = create_forward_ref::<JValue>("value");

        let nesting = Rc::new(Nesting::default());
        let array = depth_limited(
            array_rule(value.clone()),
            '[',
            Rc::clone(&nesting),
            options.max_depth,
        );
        let object = depth_limited(
            object_rule(value.clone(), options.duplicate_keys),
            '{',
            Rc::clone(&nesting),
            options.max_depth,
        );
        let alternatives = choice(vec![
            j_null(),
            j_bool(),
            j_number(),
            j_string(),
            array.clone(),
            object.clone(),
        ]);
        value_ref
            .set(alternatives)
            .unwrap_or_else(|err| unreachable!("fresh forward reference: {err}"));

        let document = spaces() * value.clone() - spaces() - eof();

        JsonGrammar {
            options,
            nesting,
            value,
            array,
            object,
            document,
        }
    }

    pub fn options(&self) -> JsonOptions {
        self.options
    }

    /// Any JSON value, without surrounding whitespace.
    pub fn value(&self) -> &Parser<JValue> {
        &self.value
    }

    pub fn array(&self) -> &Parser<JValue> {
        &self.array
    }

    pub fn object(&self) -> &Parser<JValue> {
        &self.object
    }

    /// A whole document: one value, optional surrounding whitespace and
    /// nothing after it.
    pub fn document(&self) -> &Parser<JValue> {
        &self.document
    }

    /// Parses `text` as a complete document.
    ///
    /// A document nested deeper than `options.max_depth` fails with
    /// [`JsonError::NestingTooDeep`], pointing at the container that went
    /// past the limit.
    pub fn parse(&self, text: &str) -> Result<JValue, JsonError> {
        self.nesting.overflow.replace(None);
        match run(&self.document, text) {
            ParseResult::Success(value, _) => {
                log::trace!("parsed JSON {}", value.kind());
                Ok(value)
            }
            ParseResult::Failure(failure) => match self.nesting.overflow.take() {
                Some(overflow) => Err(JsonError::NestingTooDeep {
                    limit: self.options.max_depth,
                    failure: overflow,
                }),
                None => Err(JsonError::Syntax(failure)),
            },
        }
    }
}

impl std::fmt::Debug for JsonGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonGrammar")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

thread_local! {
    static GRAMMARS: RefCell<HashMap<JsonOptions, Rc<JsonGrammar>>> =
        RefCell::new(HashMap::new());
}

/// Returns this thread's grammar for `options`, building it on first use.
fn grammar_for(options: JsonOptions) -> Rc<JsonGrammar> {
    GRAMMARS.with(|grammars| {
        let mut grammars = grammars.borrow_mut();
        let grammar = grammars
            .entry(options)
            .or_insert_with(|| Rc::new(JsonGrammar::new(options)));
        Rc::clone(grammar)
    })
}

/// Any JSON value, from the default grammar.
pub fn j_value() -> Parser<JValue> {
    grammar_for(JsonOptions::default()).value().clone()
}

/// `[` values separated by `,` `]`, from the default grammar.
pub fn j_array() -> Parser<JValue> {
    grammar_for(JsonOptions::default()).array().clone()
}

/// `{` `"key" : value` members separated by `,` `}`, from the default grammar.
pub fn j_object() -> Parser<JValue> {
    grammar_for(JsonOptions::default()).object().clone()
}

/// Parses a complete JSON document with the default options.
///
/// ```
/// use json_parser::{parse_json, JValue};
///
/// let value = parse_json(r#"{ "tags": ["a", "b"], "count": 2 }"#).unwrap();
/// assert_eq!(value.get("count"), Some(&JValue::Number(2.0)));
/// assert!(parse_json("[1, 2,]").is_err());
/// ```
pub fn parse_json(text: &str) -> Result<JValue, JsonError> {
    parse_json_with(text, JsonOptions::default())
}

/// Parses a complete JSON document with the given options.
pub fn parse_json_with(text: &str, options: JsonOptions) -> Result<JValue, JsonError> {
    grammar_for(options).parse(text)
}
