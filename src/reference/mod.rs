//! Reference parsing: interpreting marker values as partial references.
//!
//! A marker value designates one or more partials in three forms:
//!
//! - a string: shorthand for `{ "partial": <string>, "path": "" }`
//! - an object: `{ "partial": <string>, "path": <string, optional> }`
//! - an array of either of the above ("multiple partials" mode)
//!
//! [`parse_marker_value`] flattens these into an ordered sequence of
//! [`PartialRef`]s. It is a pure function of its input: no i/o, no state.
//!
//! The reserved key names live in [`MarkerConfig`] and default to the
//! documented dialect (`##include` / `partial` / `path`).

use serde_json::Value;

use crate::constants::{MARKER_KEY, PARTIAL_KEY, PATH_KEY};
use crate::core::SpliceError;
use crate::document::{self, Object};

/// Key names that make up the partial-marker dialect.
///
/// Defaults match the documented names so existing documents keep working;
/// the CLI allows overriding the marker key per run.
#[derive(Debug, Clone)]
pub struct MarkerConfig {
    /// Reserved key identifying a partial-inclusion directive.
    pub marker_key: String,
    /// Sub-key naming the referenced document in the object form.
    pub partial_key: String,
    /// Sub-key naming the extraction path in the object form.
    pub path_key: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            marker_key: MARKER_KEY.to_string(),
            partial_key: PARTIAL_KEY.to_string(),
            path_key: PATH_KEY.to_string(),
        }
    }
}

impl MarkerConfig {
    /// Config with a custom marker key and the default sub-keys.
    #[must_use]
    pub fn with_marker_key(marker_key: impl Into<String>) -> Self {
        Self { marker_key: marker_key.into(), ..Self::default() }
    }

    /// Whether `map` qualifies as a Partial Marker Object: the marker key
    /// must be its *sole* key. An object carrying the marker key alongside
    /// other keys is not a marker; the engine treats it as a sibling merge
    /// one level up.
    #[must_use]
    pub fn is_marker_object(&self, map: &Object) -> bool {
        map.len() == 1 && map.contains_key(&self.marker_key)
    }
}

/// A single parsed partial reference: which document to load and which
/// nested value to splice in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialRef {
    /// Identifier of the referenced document, opaque to the engine.
    pub document: String,
    /// Dot-separated extraction path within the resolved document; empty
    /// means the document root.
    pub path: String,
}

impl PartialRef {
    /// Reference to the root of `document`.
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self { document: document.into(), path: String::new() }
    }

    /// Reference to the value at `path` within `document`.
    #[must_use]
    pub fn with_path(document: impl Into<String>, path: impl Into<String>) -> Self {
        Self { document: document.into(), path: path.into() }
    }
}

/// Parse a marker value into an ordered sequence of [`PartialRef`]s.
///
/// Array input is flattened in order; null and empty-string entries are
/// discarded. Fails with [`SpliceError::InvalidReference`] when an entry is
/// neither a string nor an object, or when an object entry lacks a
/// non-empty `partial` field.
///
/// `origin` names the document containing the marker and is only used for
/// error context.
pub fn parse_marker_value(
    value: &Value,
    config: &MarkerConfig,
    origin: &str,
) -> Result<Vec<PartialRef>, SpliceError> {
    let entries: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let mut refs = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            // Discarded rather than rejected: tooling that generates marker
            // arrays may leave null/empty placeholders behind.
            Value::Null => {}
            Value::String(s) if s.trim().is_empty() => {}
            Value::String(s) => refs.push(PartialRef::new(s.clone())),
            Value::Object(map) => refs.push(parse_object_entry(map, config, origin)?),
            other => {
                return Err(SpliceError::InvalidReference {
                    document: origin.to_string(),
                    reason: format!(
                        "reference entry must be a string or object, got {}: {other}",
                        document::kind(other)
                    ),
                });
            }
        }
    }
    Ok(refs)
}

fn parse_object_entry(
    map: &Object,
    config: &MarkerConfig,
    origin: &str,
) -> Result<PartialRef, SpliceError> {
    let document = match map.get(&config.partial_key) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(other) => {
            return Err(SpliceError::InvalidReference {
                document: origin.to_string(),
                reason: format!(
                    "'{}' must be a non-empty string, got {}",
                    config.partial_key,
                    document::kind(other)
                ),
            });
        }
        None => {
            return Err(SpliceError::InvalidReference {
                document: origin.to_string(),
                reason: format!("reference object is missing the '{}' field", config.partial_key),
            });
        }
    };

    let path = match map.get(&config.path_key) {
        Some(Value::String(s)) => s.trim().to_string(),
        // Missing or null path normalizes to the document root.
        Some(Value::Null) | None => String::new(),
        Some(other) => {
            return Err(SpliceError::InvalidReference {
                document: origin.to_string(),
                reason: format!(
                    "'{}' must be a string, got {}",
                    config.path_key,
                    document::kind(other)
                ),
            });
        }
    };

    Ok(PartialRef::with_path(document, path))
}
