//! Path extraction: navigating a resolved tree by a dotted property path.
//!
//! Paths are split on `.`; each trimmed, non-empty segment is a property
//! name looked up in sequence. The empty path yields the tree itself.
//! Array indices and wildcards are not supported; any such syntax is just a
//! literal key lookup and will fail like any other missing key.

use serde_json::Value;

use crate::core::SpliceError;
use crate::document;

/// Extract the value at `path` within `tree`.
///
/// `document` names the tree's source document for error context.
///
/// Fails with [`SpliceError::PathNotFound`] when a segment names a key the
/// current object does not have, and with
/// [`SpliceError::InvalidPartialTarget`] when a segment would navigate into
/// a non-object node.
pub fn extract<'a>(
    tree: &'a Value,
    path: &str,
    document: &str,
) -> Result<&'a Value, SpliceError> {
    let mut current = tree;
    for segment in path.split('.').map(str::trim).filter(|s| !s.is_empty()) {
        match current {
            Value::Object(map) => {
                current = map.get(segment).ok_or_else(|| SpliceError::PathNotFound {
                    segment: segment.to_string(),
                    path: path.to_string(),
                    document: document.to_string(),
                })?;
            }
            other => {
                return Err(SpliceError::InvalidPartialTarget {
                    document: document.to_string(),
                    detail: format!(
                        "path '{path}' navigates segment '{segment}' into a {} value",
                        document::kind(other)
                    ),
                });
            }
        }
    }
    Ok(current)
}
