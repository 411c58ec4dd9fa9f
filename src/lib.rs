//! jsplice - compose JSON documents from reusable partials.
//!
//! jsplice expands *partial markers* inside JSON documents: a reserved
//! `##include` key pointing at one or more sub-documents (optionally at a
//! nested path within them) is replaced by the referenced content,
//! recursively, producing a single fully-expanded document.
//!
//! # Architecture overview
//!
//! The [`resolver`] drives everything; the other core modules are services
//! it calls:
//!
//! - [`reference`] - interprets a marker value as partial references
//!   (string shorthand, object form, or arrays of either); pure and
//!   stateless
//! - [`cache`] - memoizes fully-resolved sub-documents per run and tracks
//!   in-progress resolution to detect cycles
//! - [`extract`] - navigates a resolved tree by a dotted property path
//! - [`store`] - loads raw documents by identifier (filesystem or
//!   in-memory); the only collaborator that touches i/o
//!
//! Documents are ordered trees: objects preserve key insertion order
//! through resolution (see [`document`]), and merged results follow
//! deterministic precedence and ordering rules (see [`resolver::merge`]).
//!
//! # Supporting modules
//!
//! - [`cli`] - the `resolve` and `check` commands
//! - [`core`] - error taxonomy and user-friendly error reporting
//! - [`constants`] - the reserved marker dialect
//! - [`utils`] - atomic file writes and source discovery
//!
//! # Example
//!
//! ```rust
//! use jsplice_cli::resolver::Resolver;
//! use jsplice_cli::store::MemoryStore;
//! use serde_json::json;
//!
//! let store = MemoryStore::new()
//!     .with_document("defaults.json", json!({"timeout": 30, "retries": 3}));
//!
//! let source = json!({"##include": "defaults.json", "timeout": 60});
//! let resolved = Resolver::new(&store).resolve(&source, "app.json").unwrap();
//!
//! assert_eq!(resolved, json!({"timeout": 60, "retries": 3}));
//! ```

// Core resolution pipeline
pub mod cache;
pub mod extract;
pub mod reference;
pub mod resolver;
pub mod store;

// Shared vocabulary
pub mod constants;
pub mod core;
pub mod document;

// CLI driver
pub mod cli;
pub mod utils;
