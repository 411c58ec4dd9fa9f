//! Document stores: loading raw documents by identifier.
//!
//! The engine treats document identifiers as opaque strings; mapping them
//! to actual storage is the store's job. Two implementations are provided:
//!
//! - [`FileStore`] joins identifiers against a configured root directory
//!   and parses files as JSON
//! - [`MemoryStore`] serves documents from a map, for embedding the engine
//!   and for tests (it also counts loads, which makes the cache's
//!   load-once guarantee observable)
//!
//! Stores return *raw* trees; nested partial expansion is the resolver's
//! job. Identifiers are canonicalized before they key the partial cache so
//! that differently-spelled references to the same document share one cache
//! entry.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::core::SpliceError;

/// Capability the resolution engine needs from document storage.
pub trait DocumentStore {
    /// Map an identifier as written in a reference to its canonical form.
    ///
    /// Canonical identifiers key the partial cache, so two references that
    /// denote the same document must canonicalize identically. Fails with
    /// [`SpliceError::DocumentNotFound`] if the identifier does not denote
    /// an existing document.
    fn canonicalize(&self, id: &str) -> Result<String, SpliceError>;

    /// Load the raw document for a canonical identifier.
    ///
    /// Fails with [`SpliceError::DocumentNotFound`] if the document is
    /// missing, unreadable, or not well-formed JSON.
    fn load(&self, id: &str) -> Result<Value, SpliceError>;
}

/// Filesystem-backed store resolving identifiers against a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store resolving identifiers relative to `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The document root this store resolves against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentStore for FileStore {
    fn canonicalize(&self, id: &str) -> Result<String, SpliceError> {
        let joined = self.root.join(id);
        let canonical = std::fs::canonicalize(&joined).map_err(|e| {
            SpliceError::DocumentNotFound { id: id.to_string(), reason: e.to_string() }
        })?;
        Ok(canonical.to_string_lossy().into_owned())
    }

    fn load(&self, id: &str) -> Result<Value, SpliceError> {
        debug!(document = id, "loading document from disk");
        let text = std::fs::read_to_string(id).map_err(|e| SpliceError::DocumentNotFound {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| SpliceError::DocumentNotFound {
            id: id.to_string(),
            reason: format!("invalid JSON: {e}"),
        })
    }
}

/// In-memory store keyed by plain identifier.
///
/// Identifiers canonicalize to themselves. Load counts are tracked per
/// identifier so tests can assert that the cache loads each document at
/// most once per run.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: HashMap<String, Value>,
    loads: RefCell<HashMap<String, usize>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under `id`, returning `self` for chaining.
    #[must_use]
    pub fn with_document(mut self, id: impl Into<String>, doc: Value) -> Self {
        self.docs.insert(id.into(), doc);
        self
    }

    /// Insert a document under `id`.
    pub fn insert(&mut self, id: impl Into<String>, doc: Value) {
        self.docs.insert(id.into(), doc);
    }

    /// How many times `id` has been loaded.
    #[must_use]
    pub fn load_count(&self, id: &str) -> usize {
        self.loads.borrow().get(id).copied().unwrap_or(0)
    }
}

impl DocumentStore for MemoryStore {
    fn canonicalize(&self, id: &str) -> Result<String, SpliceError> {
        if self.docs.contains_key(id) {
            Ok(id.to_string())
        } else {
            Err(SpliceError::DocumentNotFound {
                id: id.to_string(),
                reason: "no such document".to_string(),
            })
        }
    }

    fn load(&self, id: &str) -> Result<Value, SpliceError> {
        *self.loads.borrow_mut().entry(id.to_string()).or_insert(0) += 1;
        self.docs.get(id).cloned().ok_or_else(|| SpliceError::DocumentNotFound {
            id: id.to_string(),
            reason: "no such document".to_string(),
        })
    }
}
