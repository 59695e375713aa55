//! Temporal/epoch bridge
//!
//! The only conversion the engine performs: an instant field and an
//! integer-epoch (milliseconds since 1970-01-01T00:00:00Z) field may be
//! mapped onto each other. Every other type mismatch is left to the caller.
//!
//! Copyright (c) 2025 Beancopy Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::types::{FieldDescriptor, FieldType, FieldValue};
use chrono::{DateTime, Utc};

/// Whether mapping `source` onto `target` goes through [`bridge`]
///
/// True only when the declared types differ and one side is an instant while
/// the other is an integer epoch (`i64` or `Option<i64>`).
pub fn needs_bridge(target: &FieldType, source: &FieldType) -> bool {
    target != source
        && ((target.is_instant() && source.is_epoch())
            || (target.is_epoch() && source.is_instant()))
}

/// Convert `value` read from `source` to the other side of the bridge
///
/// A missing instant becomes the current time; a missing epoch becomes 0.
pub fn bridge(source: &FieldDescriptor, value: FieldValue) -> Result<FieldValue> {
    if source.field_type.is_instant() {
        let instant = match value {
            FieldValue::Instant(at) => at,
            FieldValue::Null => Utc::now(),
            other => return Err(mismatch(source, &other)),
        };
        Ok(FieldValue::Long(instant_to_epoch(&instant)))
    } else {
        let millis = match value {
            FieldValue::Long(millis) => millis,
            FieldValue::Null => 0,
            other => return Err(mismatch(source, &other)),
        };
        let instant = epoch_to_instant(millis).ok_or_else(|| Error::EpochOutOfRange {
            field: source.name.to_string(),
            millis,
        })?;
        Ok(FieldValue::Instant(instant))
    }
}

pub fn instant_to_epoch(instant: &DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}

/// `None` when `millis` falls outside the representable range
pub fn epoch_to_instant(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}

fn mismatch(source: &FieldDescriptor, value: &FieldValue) -> Error {
    Error::value_mismatch("bridge", source.name, source.field_type, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueKind;

    fn instant_field() -> FieldDescriptor {
        FieldDescriptor::new("created_at", FieldType::new(ValueKind::Instant))
    }

    fn epoch_field() -> FieldDescriptor {
        FieldDescriptor::new("created_ms", FieldType::nullable(ValueKind::Long))
    }

    #[test]
    fn test_needs_bridge() {
        let instant = FieldType::new(ValueKind::Instant);
        let long = FieldType::new(ValueKind::Long);
        let boxed_long = FieldType::nullable(ValueKind::Long);
        let text = FieldType::new(ValueKind::Text);
        let int = FieldType::new(ValueKind::Int);

        assert!(needs_bridge(&instant, &long));
        assert!(needs_bridge(&long, &instant));
        assert!(needs_bridge(&boxed_long, &instant));
        assert!(needs_bridge(&FieldType::nullable(ValueKind::Instant), &boxed_long));

        assert!(!needs_bridge(&instant, &instant));
        assert!(!needs_bridge(&long, &boxed_long));
        assert!(!needs_bridge(&text, &int));
        assert!(!needs_bridge(&int, &instant));
    }

    #[test]
    fn test_instant_to_epoch() {
        let at = epoch_to_instant(1_554_768_000_123).unwrap();
        let bridged = bridge(&instant_field(), FieldValue::Instant(at)).unwrap();
        assert_eq!(bridged, FieldValue::Long(1_554_768_000_123));
    }

    #[test]
    fn test_epoch_to_instant() {
        let bridged = bridge(&epoch_field(), FieldValue::Long(-1)).unwrap();
        assert_eq!(
            bridged,
            FieldValue::Instant(epoch_to_instant(-1).unwrap())
        );
    }

    #[test]
    fn test_missing_instant_is_now() {
        let before = Utc::now().timestamp_millis();
        let bridged = bridge(&instant_field(), FieldValue::Null).unwrap();
        let after = Utc::now().timestamp_millis();

        match bridged {
            FieldValue::Long(millis) => assert!(before <= millis && millis <= after),
            other => panic!("expected epoch, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_epoch_is_origin() {
        let bridged = bridge(&epoch_field(), FieldValue::Null).unwrap();
        assert_eq!(bridged, FieldValue::Instant(epoch_to_instant(0).unwrap()));
    }

    #[test]
    fn test_epoch_out_of_range() {
        let err = bridge(&epoch_field(), FieldValue::Long(i64::MAX)).unwrap_err();
        match err {
            Error::EpochOutOfRange { field, millis } => {
                assert_eq!(field, "created_ms");
                assert_eq!(millis, i64::MAX);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
