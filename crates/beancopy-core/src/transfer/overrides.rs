//! Annotated override pass
//!
//! Target fields carrying `#[transfer(source = "...")]` form the sync set.
//! Each is filled from its named source field, replacing whatever the
//! same-name pass wrote, and bridged when one side is an instant and the
//! other an integer epoch.
//!
//! Copyright (c) 2025 Beancopy Team
//! Licensed under the Apache-2.0 license

use super::bridge::{bridge, needs_bridge};
use crate::bean::Bean;
use crate::config::MismatchPolicy;
use crate::error::{Error, Result};
use crate::types::{FieldDescriptor, FieldValue};

/// Apply every explicit source binding declared on `T`
///
/// Source fields are visited in declaration order. A source field feeds only
/// the first sync-set member (in target declaration order) bound to its name;
/// later members bound to the same name keep their current value. Bindings
/// naming a field the source does not have are ignored.
pub fn apply_overrides<S, T>(source: &S, target: &mut T, on_mismatch: MismatchPolicy) -> Result<()>
where
    S: Bean,
    T: Bean,
{
    let sync_set: Vec<FieldDescriptor> = T::fields().into_iter().filter(|f| f.is_mapped()).collect();
    if sync_set.is_empty() {
        return Ok(());
    }

    let source_fields = S::fields();

    for (index, target_field) in sync_set.iter().enumerate() {
        if !source_fields.iter().any(|f| Some(f.name) == target_field.source) {
            tracing::debug!(
                field = target_field.name,
                source_field = target_field.source,
                source_type = S::type_name(),
                "ignoring binding to missing source field"
            );
        } else if sync_set[..index].iter().any(|f| f.source == target_field.source) {
            tracing::debug!(
                field = target_field.name,
                source_field = target_field.source,
                "binding shadowed by an earlier field bound to the same source"
            );
        }
    }

    for source_field in &source_fields {
        let Some(target_field) = sync_set
            .iter()
            .find(|f| f.source == Some(source_field.name))
        else {
            continue;
        };

        let Some(value) = source.read_field(source_field.name) else {
            return Err(Error::unknown_field(S::type_name(), source_field.name));
        };
        assign(target, target_field, source_field, value, on_mismatch)?;
    }

    Ok(())
}

fn assign<T: Bean>(
    target: &mut T,
    target_field: &FieldDescriptor,
    source_field: &FieldDescriptor,
    value: FieldValue,
    on_mismatch: MismatchPolicy,
) -> Result<()> {
    if target_field.field_type.accepts(&source_field.field_type) {
        tracing::trace!(
            field = target_field.name,
            source_field = source_field.name,
            "overriding field"
        );
        return target.write_field(target_field.name, value);
    }

    if needs_bridge(&target_field.field_type, &source_field.field_type) {
        tracing::trace!(
            field = target_field.name,
            source_field = source_field.name,
            from = %source_field.field_type,
            to = %target_field.field_type,
            "bridging instant and epoch"
        );
        let bridged = bridge(source_field, value)?;
        return target.write_field(target_field.name, bridged);
    }

    match on_mismatch {
        MismatchPolicy::Error => Err(Error::IncompatibleFieldTypes {
            field: target_field.name.to_string(),
            source_field: source_field.name.to_string(),
            expected: target_field.field_type,
            found: source_field.field_type,
        }),
        MismatchPolicy::Skip => {
            tracing::warn!(
                field = target_field.name,
                source_field = source_field.name,
                expected = %target_field.field_type,
                found = %source_field.field_type,
                "skipping binding between incompatible field types"
            );
            Ok(())
        }
    }
}
