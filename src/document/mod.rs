//! Shared vocabulary over the JSON document tree.
//!
//! Documents are represented as [`serde_json::Value`] with the
//! `preserve_order` feature enabled, which makes `Value::Object` an
//! insertion-ordered map. That gives the engine the closed sum type it
//! pattern-matches over (object / array / scalar) and the key-order
//! guarantees the merge rules depend on, without a bespoke tree type.

use serde_json::Value;

/// Ordered JSON object map, re-exported for signatures throughout the crate.
pub type Object = serde_json::Map<String, Value>;

/// Human-readable kind of a node, used in error messages.
#[must_use]
pub const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
