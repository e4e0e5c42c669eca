//! Primitive kinds a value object can hold.
//!
//! A [`Primitive`] is the raw payload of a value object: a string, a number,
//! a boolean, or a UTC date. Bounded enumerations over strings or numbers
//! are plain string/number primitives constrained by a membership validator.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// The raw value held by a value object.
///
/// Equality is structural. Numbers are `f64`, matching the single numeric
/// kind of the projection format; integrality is a validation concern, not a
/// separate kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Primitive {
    /// A UTF-8 string.
    String(String),
    /// A double-precision number.
    Number(f64),
    /// A boolean.
    Boolean(bool),
    /// A UTC timestamp, serialized as RFC 3339.
    Date(DateTime<Utc>),
}

impl Primitive {
    /// The kind of this primitive.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::String(_) => PrimitiveKind::String,
            Self::Number(_) => PrimitiveKind::Number,
            Self::Boolean(_) => PrimitiveKind::Boolean,
            Self::Date(_) => PrimitiveKind::Date,
        }
    }

    /// The string payload, if this is a string primitive.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number primitive.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean primitive.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// The date payload, if this is a date primitive.
    #[must_use]
    pub const fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }

    /// Projects the primitive to a JSON value (dates become RFC 3339
    /// strings).
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => formatter.write_str(value),
            Self::Number(value) => write!(formatter, "{value}"),
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Date(value) => write!(formatter, "{}", value.to_rfc3339()),
        }
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Primitive {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for Primitive {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

/// The kind of primitive a declared value-object type holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// UTF-8 strings.
    String,
    /// Double-precision numbers.
    Number,
    /// Booleans.
    Boolean,
    /// UTC timestamps.
    Date,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
        };
        formatter.write_str(kind)
    }
}
