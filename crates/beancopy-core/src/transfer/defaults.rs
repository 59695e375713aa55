//! Same-name pass
//!
//! Copies every source field whose name matches a target field and whose
//! declared type the target accepts: the same type, or `T` into `Option<T>`.
//! Runs before the annotated overrides so explicit bindings win.
//!
//! Copyright (c) 2025 Beancopy Team
//! Licensed under the Apache-2.0 license

use crate::bean::Bean;
use crate::error::Result;

/// Copy same-name fields from `source` into `target`
///
/// A pair is copied when the declared types are equal or the target is the
/// nullable form of the source type (`T` into `Option<T>`). The reverse never
/// happens. Target fields missing from the source keep their current value,
/// and pairs with any other type difference are skipped without error.
pub fn copy_defaults<S, T>(source: &S, target: &mut T) -> Result<()>
where
    S: Bean,
    T: Bean,
{
    let source_fields = S::fields();

    for target_field in T::fields() {
        let Some(source_field) = source_fields.iter().find(|f| f.name == target_field.name) else {
            continue;
        };

        if !target_field.field_type.accepts(&source_field.field_type) {
            tracing::debug!(
                field = target_field.name,
                source_type = %source_field.field_type,
                target_type = %target_field.field_type,
                "skipping same-name field with different type"
            );
            continue;
        }

        if let Some(value) = source.read_field(source_field.name) {
            tracing::trace!(field = target_field.name, "copying same-name field");
            target.write_field(target_field.name, value)?;
        }
    }

    Ok(())
}
