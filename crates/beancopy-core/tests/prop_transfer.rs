//! Property-based tests for the mapping engine
//!
//! These tests verify key invariants that should hold for all inputs:
//! same-name copies are verbatim, explicit bindings always win, and batch
//! mapping preserves order and length.

use beancopy_core::{copy_bean, copy_bean_list, copy_bean_with, Bean};
use chrono::{DateTime, Utc};
use proptest::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Bean)]
struct Sample {
    flag: bool,
    count: i32,
    total: i64,
    ratio: f64,
    label: String,
    at: DateTime<Utc>,
    note: Option<String>,
}

#[derive(Debug, Default, PartialEq, Bean)]
struct SampleCopy {
    flag: bool,
    count: i32,
    total: i64,
    ratio: f64,
    label: String,
    at: DateTime<Utc>,
    note: Option<String>,
}

#[derive(Debug, Default, Bean)]
struct Renamed {
    // same name as a source field, but bound elsewhere
    #[transfer(source = "label")]
    note: Option<String>,
    #[transfer(source = "total")]
    count: i64,
    #[transfer(source = "at")]
    at_ms: i64,
}

/// Strategy for generating sample beans
fn sample_strategy() -> impl Strategy<Value = Sample> {
    (
        any::<bool>(),
        any::<i32>(),
        any::<i64>(),
        -1.0e9f64..1.0e9,
        "[a-zA-Z0-9 ]{0,40}",
        -62_135_596_800_000i64..=253_402_300_799_999, // at, as epoch millis
        proptest::option::of("[a-z]{1,12}"),
    )
        .prop_map(|(flag, count, total, ratio, label, millis, note)| Sample {
            flag,
            count,
            total,
            ratio,
            label,
            at: DateTime::<Utc>::from_timestamp_millis(millis).unwrap(),
            note,
        })
}

proptest! {
    #[test]
    fn prop_identical_layout_copies_verbatim(sample in sample_strategy()) {
        let copy: SampleCopy = copy_bean(&sample).unwrap();
        prop_assert_eq!(copy.flag, sample.flag);
        prop_assert_eq!(copy.count, sample.count);
        prop_assert_eq!(copy.total, sample.total);
        prop_assert_eq!(copy.ratio, sample.ratio);
        prop_assert_eq!(copy.label, sample.label);
        prop_assert_eq!(copy.at, sample.at);
        prop_assert_eq!(copy.note, sample.note);
    }

    #[test]
    fn prop_bindings_win_regardless_of_same_name_pass(
        sample in sample_strategy(),
        same_name in any::<bool>(),
    ) {
        let renamed: Renamed = copy_bean_with(&sample, same_name).unwrap();
        prop_assert_eq!(renamed.note, Some(sample.label.clone()));
        prop_assert_eq!(renamed.count, sample.total);
        prop_assert_eq!(renamed.at_ms, sample.at.timestamp_millis());
    }

    #[test]
    fn prop_list_preserves_order_and_length(
        samples in proptest::collection::vec(sample_strategy(), 0..16),
    ) {
        let copies: Vec<SampleCopy> = copy_bean_list(Some(samples.as_slice())).unwrap().unwrap();
        prop_assert_eq!(copies.len(), samples.len());
        for (copy, sample) in copies.iter().zip(&samples) {
            prop_assert_eq!(&copy.label, &sample.label);
            prop_assert_eq!(copy.total, sample.total);
        }
    }
}
