//! Partial cache: per-run memoization of resolved sub-documents.
//!
//! The cache is an explicit visitation state machine keyed by canonical
//! document identifier. Each entry is either *in progress* (its recursive
//! resolution has started but not finished) or *resolved* (the fully
//! expanded tree is available). Absent means unresolved.
//!
//! The in-progress sentinel is what turns the implicit recursion hazard of
//! a cyclic reference graph into a detectable error: entering an identifier
//! that is already in progress means the reference chain has looped back on
//! itself, and resolution fails with [`SpliceError::CircularReference`]
//! before any stack overflow can occur.
//!
//! A cache lives for exactly one resolution run. It is owned by a single
//! [`Resolver`](crate::resolver::Resolver) and never shared across runs, so
//! edits to documents between runs are always observed. Resolution is
//! single-threaded and depth-first; the sentinel detects cycles within that
//! walk, it does not coordinate concurrent writers.
//!
//! Resolved trees are stored behind [`Arc`] so that a document referenced
//! many times is cloned per splice site but resolved and stored only once.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::core::SpliceError;

/// State of one cache entry.
#[derive(Debug, Clone)]
enum CacheState {
    /// Resolution of this document has started and is on the call stack.
    InProgress,
    /// The document is fully expanded, nested partials included.
    Resolved(Arc<Value>),
}

/// Memoizes fully-resolved sub-documents for one resolution run and tracks
/// in-progress resolution to detect cycles.
#[derive(Debug, Default)]
pub struct PartialCache {
    entries: HashMap<String, CacheState>,
    /// Identifiers currently being resolved, in recursion order. Used to
    /// report the full chain when a cycle is detected.
    stack: Vec<String>,
}

impl PartialCache {
    /// Create an empty cache for a new resolution run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolved tree for `id`, if resolution has completed.
    #[must_use]
    pub fn resolved(&self, id: &str) -> Option<Arc<Value>> {
        match self.entries.get(id) {
            Some(CacheState::Resolved(tree)) => Some(Arc::clone(tree)),
            _ => None,
        }
    }

    /// Mark `id` as in progress before its recursive resolution begins.
    ///
    /// Fails with [`SpliceError::CircularReference`] if `id` is already in
    /// progress, reporting the chain from the cycle's entry identifier back
    /// to `id`.
    pub fn begin(&mut self, id: &str) -> Result<(), SpliceError> {
        if let Some(CacheState::InProgress) = self.entries.get(id) {
            let entry = self.stack.iter().position(|s| s == id).unwrap_or(0);
            let mut chain: Vec<&str> = self.stack[entry..].iter().map(String::as_str).collect();
            chain.push(id);
            return Err(SpliceError::CircularReference {
                id: id.to_string(),
                chain: chain.join(" → "),
            });
        }
        debug!(document = id, "resolving partial");
        self.entries.insert(id.to_string(), CacheState::InProgress);
        self.stack.push(id.to_string());
        Ok(())
    }

    /// Store the fully-expanded tree for `id` and mark it resolved.
    ///
    /// Must pair with a prior [`begin`](Self::begin). Returns the stored
    /// tree for immediate use.
    pub fn finish(&mut self, id: &str, tree: Value) -> Arc<Value> {
        let tree = Arc::new(tree);
        self.entries.insert(id.to_string(), CacheState::Resolved(Arc::clone(&tree)));
        self.pop(id);
        tree
    }

    /// Roll back an in-progress entry after a failed load or resolution.
    ///
    /// Errors abort the whole run, but leaving a stale in-progress sentinel
    /// behind would misreport the failure as a cycle if the cache outlives
    /// the error path.
    pub fn abort(&mut self, id: &str) {
        if let Some(CacheState::InProgress) = self.entries.get(id) {
            self.entries.remove(id);
        }
        self.pop(id);
    }

    /// Number of documents the cache knows about, in either state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn pop(&mut self, id: &str) {
        if self.stack.last().is_some_and(|top| top == id) {
            self.stack.pop();
        }
    }
}
