//! Ordered object merge with override precedence.
//!
//! Merging is a named operation rather than an artifact of map iteration,
//! so the tie-break and ordering rules stay explicit:
//!
//! - Precedence, low to high: earlier-listed partial layer, later-listed
//!   partial layer, the containing object's own properties. Values replace
//!   wholesale; there is no deep merge beyond what recursive resolution
//!   already flattened.
//! - Key order: the containing object's original key order first, then
//!   keys contributed only by partials appended in lexicographic order for
//!   determinism.

use serde_json::Value;

use crate::document::Object;

/// Merge partial `layers` under the containing object's `own` properties.
///
/// `own` must already be recursively resolved and must not contain the
/// marker key. A pure marker object passes an empty `own`, in which case
/// the result is the layered union with all keys in lexicographic order.
#[must_use]
pub fn merge_layers(own: Object, layers: Vec<Object>) -> Object {
    // Later layers override earlier ones key-for-key.
    let mut base = Object::new();
    for layer in layers {
        for (key, value) in layer {
            base.insert(key, value);
        }
    }

    // Own properties win outright and keep their original positions.
    let mut result = own;
    let mut appended: Vec<(String, Value)> =
        base.into_iter().filter(|(key, _)| !result.contains_key(key)).collect();
    appended.sort_by(|a, b| a.0.cmp(&b.0));
    for (key, value) in appended {
        result.insert(key, value);
    }
    result
}
