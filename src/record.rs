use serde::{Deserialize, Serialize};
use std::fmt;

/// A single untyped input value submitted for validation and processing.
/// Provides a simple interface to inspect the value without matching on
/// the enum at every call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Record>),
}

impl Record {
    /// Get the value as text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Record::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Record::Float(x) => Some(*x),
            Record::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get the value as an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Record::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a sequence of records
    pub fn as_list(&self) -> Option<&[Record]> {
        match self {
            Record::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Record::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Record::Int(_) | Record::Float(_))
    }
}

impl From<serde_json::Value> for Record {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Record::Null,
            serde_json::Value::Bool(b) => Record::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Record::Int(i),
                None => Record::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => Record::Text(s),
            serde_json::Value::Array(items) => {
                Record::List(items.into_iter().map(Record::from).collect())
            }
            // Objects have no record shape; treated as null so the base
            // batch filter drops them.
            serde_json::Value::Object(_) => Record::Null,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Null => write!(f, "null"),
            Record::Bool(b) => write!(f, "{b}"),
            Record::Int(i) => write!(f, "{i}"),
            Record::Float(x) => write!(f, "{x}"),
            Record::Text(s) => write!(f, "\"{s}\""),
            Record::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
