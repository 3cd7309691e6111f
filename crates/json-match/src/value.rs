//! Decoded JSON value model.
//!
//! The comparator never inspects raw JSON text. Callers decode with whatever
//! parser they use and convert into [`Value`]; a `serde_json` bridge is
//! provided.

use indexmap::IndexMap;
use std::fmt;

/// Object representation. Keys keep insertion order.
pub type Map = IndexMap<String, Value>;

/// A decoded JSON value. Every JSON number is stored as an `f64`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// Variant label of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tag::Null => "null",
            Tag::Bool => "bool",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::Array => "array",
            Tag::Object => "object",
        })
    }
}

impl Value {
    pub fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::Bool(_) => Tag::Bool,
            Value::Number(_) => Tag::Number,
            Value::String(_) => Tag::String,
            Value::Array(_) => Tag::Array,
            Value::Object(_) => Tag::Object,
        }
    }

    /// Bool, Number and String are primitive. Null is not.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Number(_) | Value::String(_))
    }

    /// Decodes JSON text through `serde_json`.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<serde_json::Value>(text).map(Value::from)
    }
}

/// Converts a decoded `serde_json` tree.
///
/// Numbers that do not fit an `f64` (only possible with serde_json's
/// `arbitrary_precision` feature, e.g. `1e400`) saturate to positive or
/// negative infinity by sign, so they still equal themselves.
impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(
                n.as_f64()
                    .unwrap_or_else(|| number_from_literal(&n.to_string())),
            ),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(arr) => Value::Array(arr.iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => Value::Object(
                obj.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// `str::parse` saturates out-of-range literals to infinity.
fn number_from_literal(literal: &str) -> f64 {
    literal.parse().unwrap_or(f64::NAN)
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            scalar => Value::from(&scalar),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

// Children are moved onto a heap stack so dropping a deeply nested tree
// does not recurse once per level.
impl Drop for Value {
    fn drop(&mut self) {
        let mut stack = match self {
            Value::Array(arr) if !arr.is_empty() => std::mem::take(arr),
            Value::Object(obj) if !obj.is_empty() => std::mem::take(obj).into_values().collect(),
            _ => return,
        };
        while let Some(mut child) = stack.pop() {
            match &mut child {
                Value::Array(arr) => stack.append(arr),
                Value::Object(obj) => stack.extend(std::mem::take(obj).into_values()),
                _ => {}
            }
        }
    }
}
