//! Value model shared by beans and the mapping engine
//!
//! A bean field is described by a [`FieldType`] (scalar kind plus
//! nullability) and carries a [`FieldValue`] when read or written through the
//! [`Bean`](crate::Bean) accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar kinds a bean field may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Bool,
    /// 32-bit integer
    Int,
    /// 64-bit integer, also the integer-epoch representation of an instant
    Long,
    Double,
    Text,
    /// UTC timestamp
    Instant,
}

impl ValueKind {
    /// Rust spelling of the kind
    pub fn rust_name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "i32",
            ValueKind::Long => "i64",
            ValueKind::Double => "f64",
            ValueKind::Text => "String",
            ValueKind::Instant => "DateTime<Utc>",
        }
    }
}

/// Declared type of a bean field
///
/// `nullable` is true for `Option<T>` fields. Two field types are identical
/// only when both the kind and the nullability match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldType {
    pub kind: ValueKind,
    pub nullable: bool,
}

impl FieldType {
    /// Non-nullable field of `kind`
    pub const fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    /// `Option<_>` field of `kind`
    pub const fn nullable(kind: ValueKind) -> Self {
        Self {
            kind,
            nullable: true,
        }
    }

    pub fn is_instant(&self) -> bool {
        self.kind == ValueKind::Instant
    }

    /// Both `i64` and `Option<i64>` count as integer-epoch
    pub fn is_epoch(&self) -> bool {
        self.kind == ValueKind::Long
    }

    /// Whether a field declared as `source` can be assigned to this type as is
    ///
    /// `T` lifts into `Option<T>`; `Option<T>` never narrows to `T`.
    pub fn accepts(&self, source: &FieldType) -> bool {
        self.kind == source.kind && (self.nullable || !source.nullable)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "Option<{}>", self.kind.rust_name())
        } else {
            f.write_str(self.kind.rust_name())
        }
    }
}

/// Dynamically typed field value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    Text(String),
    Instant(DateTime<Utc>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Kind carried by this value, `None` for `Null`
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            FieldValue::Null => None,
            FieldValue::Bool(_) => Some(ValueKind::Bool),
            FieldValue::Int(_) => Some(ValueKind::Int),
            FieldValue::Long(_) => Some(ValueKind::Long),
            FieldValue::Double(_) => Some(ValueKind::Double),
            FieldValue::Text(_) => Some(ValueKind::Text),
            FieldValue::Instant(_) => Some(ValueKind::Instant),
        }
    }

    /// Short lowercase name used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "int",
            FieldValue::Long(_) => "long",
            FieldValue::Double(_) => "double",
            FieldValue::Text(_) => "text",
            FieldValue::Instant(_) => "instant",
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Long(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Double(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Instant(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// A (name, declared type) pair for one bean field
///
/// `source` holds the `#[transfer(source = "...")]` binding, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub field_type: FieldType,
    pub source: Option<&'static str>,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            source: None,
        }
    }

    /// Bind this field to a source field name
    pub fn with_source(mut self, source: &'static str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn is_mapped(&self) -> bool {
        self.source.is_some()
    }
}
