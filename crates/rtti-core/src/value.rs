//! Runtime values surfaced by privileged field reads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a field read yields. `None` stands for an unset optional field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(value) => value.fmt(f),
            Value::Int(value) => value.fmt(f),
            Value::Str(value) => f.write_str(value),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_renders_payload() {
        assert_eq!(Value::Str("Jack".into()).to_string(), "Jack");
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::None.to_string(), "None");
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Value::from(Some("Jack")), Value::Str("Jack".into()));
        assert_eq!(Value::from(None::<String>), Value::None);
    }
}
