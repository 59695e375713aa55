//! JSON snapshots of beans for diagnostics and tests

use crate::bean::Bean;
use crate::error::Result;
use crate::types::FieldValue;
use serde_json::{Map, Value};

/// Render `bean` as a JSON object keyed by field name, in declaration order
///
/// Instants render as RFC 3339 strings, `None` as `null`.
pub fn snapshot<B: Bean>(bean: &B) -> Result<Value> {
    let mut object = Map::new();
    for field in B::fields() {
        let value = bean.read_field(field.name).unwrap_or(FieldValue::Null);
        object.insert(field.name.to_string(), serde_json::to_value(&value)?);
    }
    Ok(Value::Object(object))
}
