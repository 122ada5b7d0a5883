//! Value Representation
//!
//! Defines the tagged value model the checker operates on.
//! Values are plain data: built by the caller, never mutated by the checker.

use std::fmt;

use super::record::Record;
use crate::check::is_zero;
use crate::error::ZeroResult;

/// Tagged value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Kind tag with no payload
    Invalid,

    /// Boolean value
    Bool(bool),

    /// Signed integer
    Int(i64),

    /// Unsigned integer
    Uint(u64),

    /// Floating-point value (IEEE 754)
    Float(f64),

    /// UTF-8 string
    Str(String),

    /// Fixed-length sequence
    Array(Vec<Value>),

    /// Named fields in declaration order
    Record(Record),

    /// Optional reference; `None` is an unset reference
    Ref(Option<Box<Value>>),
}

/// Kind tag of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Invalid,
    Bool,
    Int,
    Uint,
    Float,
    Str,
    Array,
    Record,
    Ref,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Str => "string",
            Kind::Array => "array",
            Kind::Record => "record",
            Kind::Ref => "ref",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Invalid => Kind::Invalid,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Array(_) => Kind::Array,
            Value::Record(_) => Kind::Record,
            Value::Ref(_) => Kind::Ref,
        }
    }

    /// Unset reference
    pub fn null_ref() -> Self {
        Value::Ref(None)
    }

    /// Reference pointing at `target`
    pub fn ref_to(target: impl Into<Value>) -> Self {
        Value::Ref(Some(Box::new(target.into())))
    }

    /// Check against the default rules; see [`crate::ZeroChecker`].
    pub fn is_zero(&self) -> ZeroResult<bool> {
        is_zero(self)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Uint(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(target: Option<T>) -> Self {
        Value::Ref(target.map(|t| Box::new(t.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_kind() {
        assert_eq!(Value::from(3).kind(), Kind::Int);
        assert_eq!(Value::from(3u64).kind(), Kind::Uint);
        assert_eq!(Value::from("x").kind(), Kind::Str);
        assert_eq!(Value::from(None::<i64>), Value::null_ref());
        assert_eq!(Value::from(Some(0)), Value::ref_to(0));
        assert_eq!(Value::from(vec![Value::Bool(true)]).kind(), Kind::Array);
    }

    #[test]
    fn kind_display_is_lowercase() {
        assert_eq!(Kind::Str.to_string(), "string");
        assert_eq!(Kind::Record.to_string(), "record");
    }
}
