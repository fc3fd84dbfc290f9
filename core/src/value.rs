//! Boxed element representation.
//!
//! Primitive containers store raw `i32`/`i64`/`f64` values. The boxed side of
//! the contract talks in [`Value`]s instead, so that a single object-safe
//! [`Collection`](crate::Collection) can carry any element type. A value is
//! representable as an element type only when it is that type's own variant:
//! `Value::Long(1)` is never found in an `i32` container.

use core::fmt;

/// A boxed primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Int(i32),
    Long(i64),
    Double(f64),
}

static_assertions::assert_impl_all!(Value: Copy, Send, Sync);

impl Value {
    /// Name of the primitive this value boxes.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "i32",
            Value::Long(_) => "i64",
            Value::Double(_) => "f64",
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match *self {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match *self {
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match *self {
            Value::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}i32"),
            Value::Long(v) => write!(f, "{v}i64"),
            Value::Double(v) => write!(f, "{v:?}f64"),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}
