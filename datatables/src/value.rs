//! Dynamic cell values and the row capability tables need.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A dynamic value read from one field of a row.
///
/// # Example
///
/// ```
/// use datatables::Value;
///
/// assert_eq!(Value::from("web").to_string(), "web");
/// assert_eq!(Value::from(3i64).to_string(), "3");
/// assert_eq!(Value::Null.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/missing value.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Arrays, objects and anything else without a dedicated variant.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::Json(json) => write!(f, "{json}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Json(serde_json::Value::Number(n)), Value::Float),
            },
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// Rows that can be displayed in a data table.
///
/// The only capability a table needs is reading a field by key. Unknown keys
/// read as [`Value::Null`].
///
/// # Example
///
/// ```
/// use datatables::{TableRow, Value};
///
/// struct Project {
///     name: String,
///     framework: Option<String>,
/// }
///
/// impl TableRow for Project {
///     fn value(&self, key: &str) -> Value {
///         match key {
///             "name" => self.name.as_str().into(),
///             "framework" => self.framework.clone().into(),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait TableRow: Send + Sync + 'static {
    fn value(&self, key: &str) -> Value;
}

impl TableRow for serde_json::Map<String, serde_json::Value> {
    fn value(&self, key: &str) -> Value {
        self.get(key).cloned().map(Value::from).unwrap_or_default()
    }
}

impl TableRow for BTreeMap<String, Value> {
    fn value(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or_default()
    }
}

impl TableRow for HashMap<String, Value> {
    fn value(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or_default()
    }
}
