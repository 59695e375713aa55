//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! but valid instants, epochs and field values.

#![cfg(test)]

use crate::types::FieldValue;
use chrono::{DateTime, Utc};
use proptest::prelude::*;

/// 0001-01-01T00:00:00Z in epoch milliseconds
pub const MIN_EPOCH_MILLIS: i64 = -62_135_596_800_000;

/// 9999-12-31T23:59:59.999Z in epoch milliseconds
pub const MAX_EPOCH_MILLIS: i64 = 253_402_300_799_999;

/// Strategy for epoch milliseconds within the instant range
pub fn epoch_millis_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        MIN_EPOCH_MILLIS..=MAX_EPOCH_MILLIS,
        -1_000i64..=1_000, // around the origin
    ]
}

/// Strategy for millisecond-precision instants
pub fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    epoch_millis_strategy().prop_map(|millis| {
        DateTime::<Utc>::from_timestamp_millis(millis).expect("millis within instant range")
    })
}

/// Strategy for non-null scalar field values
pub fn field_value_strategy() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        any::<bool>().prop_map(FieldValue::Bool),
        any::<i32>().prop_map(FieldValue::Int),
        any::<i64>().prop_map(FieldValue::Long),
        (-1.0e9f64..1.0e9).prop_map(FieldValue::Double),
        "[a-zA-Z0-9 _-]{0,32}".prop_map(FieldValue::Text),
        instant_strategy().prop_map(FieldValue::Instant),
    ]
}
