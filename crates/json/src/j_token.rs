//! JToken - a dynamically typed JSON value

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{JsonError, JsonResult};
use crate::j_object::JObject;

/// Largest integer a double represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Represents any JSON value.
///
/// Numbers are stored as `f64`, the representation JavaScript uses.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum JToken {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<JToken>),
    Object(JObject),
}

impl JToken {
    /// Parses JSON text into a token tree.
    pub fn parse(text: &str) -> JsonResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from(value))
    }

    /// Parses UTF-8 encoded JSON bytes into a token tree.
    pub fn parse_bytes(bytes: &[u8]) -> JsonResult<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from(value))
    }

    /// Name of the value's type, as reported in errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            JToken::Null => "null",
            JToken::Boolean(_) => "boolean",
            JToken::Number(_) => "number",
            JToken::String(_) => "string",
            JToken::Array(_) => "array",
            JToken::Object(_) => "object",
        }
    }

    /// JavaScript truthiness.
    pub fn as_boolean(&self) -> bool {
        match self {
            JToken::Null => false,
            JToken::Boolean(b) => *b,
            JToken::Number(n) => *n != 0.0 && !n.is_nan(),
            JToken::String(s) => !s.is_empty(),
            JToken::Array(_) | JToken::Object(_) => true,
        }
    }

    /// Numeric coercion. Strings follow JavaScript `Number()`, containers coerce to `NaN`.
    pub fn as_number(&self) -> f64 {
        match self {
            JToken::Null => 0.0,
            JToken::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            JToken::Number(n) => *n,
            JToken::String(s) => string_to_number(s),
            JToken::Array(_) | JToken::Object(_) => f64::NAN,
        }
    }

    /// String coercion. Strings are returned unquoted, everything else as JSON.
    pub fn as_string(&self) -> String {
        match self {
            JToken::String(s) => s.clone(),
            _ => self.to_string(),
        }
    }

    pub fn get_boolean(&self) -> JsonResult<bool> {
        match self {
            JToken::Boolean(b) => Ok(*b),
            _ => Err(JsonError::InvalidCast("expected boolean")),
        }
    }

    pub fn get_number(&self) -> JsonResult<f64> {
        match self {
            JToken::Number(n) => Ok(*n),
            _ => Err(JsonError::InvalidCast("expected number")),
        }
    }

    pub fn get_string(&self) -> JsonResult<&str> {
        match self {
            JToken::String(s) => Ok(s),
            _ => Err(JsonError::InvalidCast("expected string")),
        }
    }

    pub fn as_object(&self) -> Option<&JObject> {
        match self {
            JToken::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JObject> {
        match self {
            JToken::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JToken::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, JToken::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JToken::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JToken::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JToken::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JToken::Object(_))
    }

    /// Converts the token into a `serde_json::Value`.
    ///
    /// Integral numbers inside the safe integer range become JSON integers, non-finite
    /// numbers become `null`.
    pub fn to_json_value(&self) -> Value {
        match self {
            JToken::Null => Value::Null,
            JToken::Boolean(b) => Value::Bool(*b),
            JToken::Number(n) => number_to_value(*n),
            JToken::String(s) => Value::String(s.clone()),
            JToken::Array(items) => Value::Array(items.iter().map(JToken::to_json_value).collect()),
            JToken::Object(obj) => obj.to_json_value(),
        }
    }

    pub fn to_string_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.to_json_value()).unwrap_or_default()
    }
}

/// `Number(string)`: decimal literals, `Infinity`, and unsigned `0x`/`0o`/`0b` integers.
fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0_f64, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)))
            .unwrap_or(f64::NAN);
    }

    // rules out the `inf`/`nan` spellings Rust's parser also accepts
    let decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

fn number_to_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        // -0 prints as 0, as in JavaScript
        return Value::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

impl Serialize for JToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

impl fmt::Display for JToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.to_json_value()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<Value> for JToken {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JToken::Null,
            Value::Bool(b) => JToken::Boolean(b),
            Value::Number(n) => JToken::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => JToken::String(s),
            Value::Array(a) => JToken::Array(a.into_iter().map(JToken::from).collect()),
            Value::Object(o) => JToken::Object(o.into_iter().map(|(k, v)| (k, JToken::from(v))).collect()),
        }
    }
}

impl From<bool> for JToken {
    fn from(value: bool) -> Self {
        JToken::Boolean(value)
    }
}

impl From<f64> for JToken {
    fn from(value: f64) -> Self {
        JToken::Number(value)
    }
}

impl From<i32> for JToken {
    fn from(value: i32) -> Self {
        JToken::Number(f64::from(value))
    }
}

impl From<u32> for JToken {
    fn from(value: u32) -> Self {
        JToken::Number(f64::from(value))
    }
}

impl From<i64> for JToken {
    fn from(value: i64) -> Self {
        JToken::Number(value as f64)
    }
}

impl From<&str> for JToken {
    fn from(value: &str) -> Self {
        JToken::String(value.to_string())
    }
}

impl From<String> for JToken {
    fn from(value: String) -> Self {
        JToken::String(value)
    }
}

impl From<Vec<JToken>> for JToken {
    fn from(value: Vec<JToken>) -> Self {
        JToken::Array(value)
    }
}

impl From<JObject> for JToken {
    fn from(value: JObject) -> Self {
        JToken::Object(value)
    }
}
