use std::collections::BTreeMap;
use std::fmt;

/// A parsed JSON document.
///
/// Numbers are kept as `f64`. Object members are keyed by their unescaped
/// name; when a name repeats, which value survives depends on
/// [`DuplicateKeys`](crate::DuplicateKeys).
#[derive(Debug, Clone, PartialEq)]
pub enum JValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JValue>),
    Object(BTreeMap<String, JValue>),
}

impl JValue {
    pub fn is_null(&self) -> bool {
        matches!(self, JValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JValue]> {
        match self {
            JValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, JValue>> {
        match self {
            JValue::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up `key` when this value is an object.
    pub fn get(&self, key: &str) -> Option<&JValue> {
        self.as_object().and_then(|members| members.get(key))
    }

    /// Short name of the variant, used in logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            JValue::Null => "null",
            JValue::Bool(_) => "bool",
            JValue::Number(_) => "number",
            JValue::String(_) => "string",
            JValue::Array(_) => "array",
            JValue::Object(_) => "object",
        }
    }
}

impl From<bool> for JValue {
    fn from(value: bool) -> Self {
        JValue::Bool(value)
    }
}

impl From<f64> for JValue {
    fn from(value: f64) -> Self {
        JValue::Number(value)
    }
}

impl From<&str> for JValue {
    fn from(value: &str) -> Self {
        JValue::String(value.to_string())
    }
}

impl From<String> for JValue {
    fn from(value: String) -> Self {
        JValue::String(value)
    }
}

impl From<Vec<JValue>> for JValue {
    fn from(items: Vec<JValue>) -> Self {
        JValue::Array(items)
    }
}

impl From<BTreeMap<String, JValue>> for JValue {
    fn from(members: BTreeMap<String, JValue>) -> Self {
        JValue::Object(members)
    }
}

/// Writes `text` as a quoted JSON string.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in text.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            ch if ch.is_control() => write!(f, "\\u{:04x}", ch as u32)?,
            ch => write!(f, "{ch}")?,
        }
    }
    f.write_str("\"")
}

/// Compact JSON text. Non-finite numbers, which JSON cannot express, are
/// written as `null`.
impl fmt::Display for JValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JValue::Null => f.write_str("null"),
            JValue::Bool(value) => write!(f, "{value}"),
            JValue::Number(value) if value.is_finite() => write!(f, "{value}"),
            JValue::Number(_) => f.write_str("null"),
            JValue::String(value) => write_quoted(f, value),
            JValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            JValue::Object(members) => {
                f.write_str("{")?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(JValue::Null.to_string(), "null");
        assert_eq!(JValue::Bool(false).to_string(), "false");
        assert_eq!(JValue::Number(-12345.0).to_string(), "-12345");
        assert_eq!(JValue::Number(0.25).to_string(), "0.25");
        assert_eq!(JValue::Number(f64::INFINITY).to_string(), "null");
    }

    #[test]
    fn test_display_escapes_strings() {
        let value = JValue::from("a\"b\\c\nd\u{1}");
        assert_eq!(value.to_string(), r#""a\"b\\c\nd\u0001""#);
    }

    #[test]
    fn test_display_nested() {
        let mut members = BTreeMap::new();
        members.insert("b".to_string(), JValue::from(vec![JValue::Null, true.into()]));
        members.insert("a".to_string(), JValue::from(1.5));
        assert_eq!(JValue::from(members).to_string(), r#"{"a":1.5,"b":[null,true]}"#);
    }

    #[test]
    fn test_accessors() {
        let mut members = BTreeMap::new();
        members.insert("name".to_string(), JValue::from("Scott"));
        let value = JValue::Object(members);

        assert_eq!(value.get("name").and_then(JValue::as_str), Some("Scott"));
        assert_eq!(value.get("missing"), None);
        assert_eq!(value.kind(), "object");
        assert!(JValue::Null.is_null());
        assert_eq!(JValue::from(2.0).as_f64(), Some(2.0));
        assert_eq!(JValue::from(true).as_bool(), Some(true));
        assert!(JValue::from("x").as_array().is_none());
    }
}
