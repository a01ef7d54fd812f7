use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A loosely typed value handed to the numeric validator.
///
/// Deserializes untagged from JSON: integers first, then floats, then
/// strings. Anything else (null, booleans, arrays, objects) lands in
/// [`RawInput::Other`] so the validator can reject it by type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl RawInput {
    /// Short type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "str",
            Self::Other(value) => match value {
                Value::Null => "null",
                Value::Bool(_) => "bool",
                Value::Number(_) => "number",
                Value::String(_) => "str",
                Value::Array(_) => "list",
                Value::Object(_) => "dict",
            },
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawInput {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Integer(int)
                } else if let Some(float) = number.as_f64() {
                    Self::Float(float)
                } else {
                    Self::Other(Value::Number(number))
                }
            }
            other => Self::Other(other),
        }
    }
}
