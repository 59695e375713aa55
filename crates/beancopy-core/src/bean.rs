//! Field introspection for mappable types
//!
//! [`Bean`] is the reflection surface the mapping engine works against. It is
//! normally generated with `#[derive(Bean)]`:
//!
//! ```
//! use beancopy_core::Bean;
//!
//! #[derive(Debug, Default, Bean)]
//! struct UserView {
//!     name: String,
//!     #[transfer(source = "name")]
//!     display_name: String,
//! }
//!
//! let fields = UserView::fields();
//! assert_eq!(fields[1].source, Some("name"));
//! ```

use crate::error::Result;
use crate::types::{FieldDescriptor, FieldType, FieldValue, ValueKind};
use chrono::{DateTime, Utc};

/// A Rust type that can sit in a bean field
pub trait BeanField: Sized {
    /// Declared type of a field holding `Self`
    fn field_type() -> FieldType;

    /// Read the current value
    fn to_value(&self) -> FieldValue;

    /// Convert a value into `Self`, handing it back unchanged on a kind mismatch
    fn from_value(value: FieldValue) -> std::result::Result<Self, FieldValue>;
}

macro_rules! scalar_field {
    ($ty:ty, $kind:ident) => {
        impl BeanField for $ty {
            fn field_type() -> FieldType {
                FieldType::new(ValueKind::$kind)
            }

            fn to_value(&self) -> FieldValue {
                FieldValue::$kind(self.clone())
            }

            fn from_value(value: FieldValue) -> std::result::Result<Self, FieldValue> {
                match value {
                    FieldValue::$kind(v) => Ok(v),
                    other => Err(other),
                }
            }
        }
    };
}

scalar_field!(bool, Bool);
scalar_field!(i32, Int);
scalar_field!(i64, Long);
scalar_field!(f64, Double);
scalar_field!(String, Text);
scalar_field!(DateTime<Utc>, Instant);

impl<T: BeanField> BeanField for Option<T> {
    fn field_type() -> FieldType {
        FieldType::nullable(T::field_type().kind)
    }

    fn to_value(&self) -> FieldValue {
        match self {
            Some(v) => v.to_value(),
            None => FieldValue::Null,
        }
    }

    fn from_value(value: FieldValue) -> std::result::Result<Self, FieldValue> {
        match value {
            FieldValue::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// A record type whose fields can be enumerated, read and written by name
pub trait Bean {
    /// Name used in diagnostics
    fn type_name() -> &'static str
    where
        Self: Sized;

    /// Declared fields in declaration order
    fn fields() -> Vec<FieldDescriptor>
    where
        Self: Sized;

    /// Create a zero-argument instance
    fn instantiate() -> Result<Self>
    where
        Self: Sized;

    /// Current value of `name`, `None` if the bean has no such field
    fn read_field(&self, name: &str) -> Option<FieldValue>;

    /// Overwrite `name` with `value`
    fn write_field(&mut self, name: &str, value: FieldValue) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_scalar_round_trip() {
        let v = 42i64.to_value();
        assert_eq!(v, FieldValue::Long(42));
        assert_eq!(i64::from_value(v), Ok(42));
    }

    #[test]
    fn test_scalar_rejects_other_kind() {
        let rejected = i32::from_value(FieldValue::Text("1".to_string()));
        assert_eq!(rejected, Err(FieldValue::Text("1".to_string())));
        assert!(String::from_value(FieldValue::Null).is_err());
    }

    #[test]
    fn test_option_field() {
        assert_eq!(
            <Option<i64>>::field_type(),
            FieldType::nullable(ValueKind::Long)
        );
        assert_eq!(None::<String>.to_value(), FieldValue::Null);
        assert_eq!(<Option<bool>>::from_value(FieldValue::Null), Ok(None));
        assert_eq!(
            <Option<bool>>::from_value(FieldValue::Bool(true)),
            Ok(Some(true))
        );
    }

    #[test]
    fn test_instant_field() {
        let at = Utc.timestamp_millis_opt(1_554_768_000_123).unwrap();
        assert_eq!(<DateTime<Utc>>::field_type(), FieldType::new(ValueKind::Instant));
        assert_eq!(at.to_value(), FieldValue::Instant(at));
    }
}
