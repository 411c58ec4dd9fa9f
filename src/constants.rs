//! Global constants used throughout the jsplice codebase.
//!
//! The reserved marker key and the sub-keys of the object reference form
//! are defined centrally so the default document dialect is discoverable
//! in one place. They can be overridden per run (see
//! [`crate::reference::MarkerConfig`]), but these defaults must stay
//! stable to remain compatible with existing documents.

/// Reserved key that turns an object into a partial-inclusion directive.
///
/// An object qualifies as a marker only when this is its *sole* key;
/// alongside other keys it selects the base layer for a sibling merge
/// instead.
pub const MARKER_KEY: &str = "##include";

/// Sub-key of the object reference form naming the referenced document.
pub const PARTIAL_KEY: &str = "partial";

/// Sub-key of the object reference form naming the nested extraction path.
pub const PATH_KEY: &str = "path";

/// File extension the CLI driver discovers when a source argument is a
/// directory.
pub const JSON_EXTENSION: &str = "json";
