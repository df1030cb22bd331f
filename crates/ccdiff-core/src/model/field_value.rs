use serde::Serialize;
use serde_json::{Number, Value};

/// A single field value of a configuration record
///
/// Scalars get their own variants so equality and canonical encoding stay
/// well-defined: `Bool(true)` and `Text("true")` are different values, and
/// numbers keep their JSON rendering (`1` and `1.0` differ).
///
/// Integers are exact across the whole `i64`/`u64` range. Larger integers
/// are parsed as `f64`, so two of them that round to the same float are
/// equal here and share a canonical key.
///
/// `Structured` carries the rare array/object field value verbatim. It is
/// compared as a whole and never looked into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Structured(Value),
}

impl FieldValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// JSON type name, as used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "string",
            FieldValue::Structured(Value::Array(_)) => "array",
            FieldValue::Structured(_) => "object",
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Number(n),
            Value::String(s) => FieldValue::Text(s),
            other => FieldValue::Structured(other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}
