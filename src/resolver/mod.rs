//! The resolution engine: expanding partial markers into a single document.
//!
//! This module implements the core algorithm of jsplice. Given a document
//! tree, the engine walks it depth-first, finds partial markers, loads and
//! expands the referenced sub-documents through the per-run
//! [`PartialCache`], extracts the requested nested values, and merges them
//! with deterministic precedence and key ordering.
//!
//! # Resolution process
//!
//! For each node of the tree:
//!
//! 1. **Scalars** pass through unchanged.
//! 2. **Arrays** are rebuilt element-wise with the same algorithm, order
//!    preserved.
//! 3. **Objects** come in three shapes:
//!    - A *marker object* (the reserved key is the sole key): its marker
//!      value is parsed into references, each reference is expanded and
//!      extracted, and the results are merged into one object. A single
//!      reference yielding a non-object value is spliced wholesale.
//!    - A plain object: every property value is resolved recursively.
//!    - An object carrying the marker key *alongside* other keys: the
//!      merged partial content forms the base layer and the object's own
//!      (resolved) properties override it key-for-key.
//!
//! Sub-documents are themselves run through the engine before they are
//! cached, so nested partials are already flat by the time a parent splices
//! them in. Every step allocates new nodes; input trees are never mutated,
//! and the cached resolved copy never aliases the value spliced into a
//! parent.
//!
//! # Failure behavior
//!
//! The engine fails fast: the first missing document, cycle, bad path, or
//! malformed reference aborts the run with the originating document
//! identifier attached. Partial results are discarded, never emitted.
//!
//! Execution is single-threaded, synchronous, and depth-first; see
//! [`PartialCache`] for how the in-progress sentinel turns reference cycles
//! into errors instead of stack overflows.

pub mod merge;


use serde_json::Value;
use tracing::{debug, trace};

use crate::cache::PartialCache;
use crate::core::SpliceError;
use crate::document::{self, Object};
use crate::extract::extract;
use crate::reference::{MarkerConfig, PartialRef, parse_marker_value};
use crate::store::DocumentStore;
use self::merge::merge_layers;

/// One resolution run: a document store, a marker dialect, and the per-run
/// partial cache.
///
/// A resolver may expand several source documents in sequence; they share
/// the cache, which is safe because stores are read-only for the lifetime
/// of the run. Construct a fresh resolver per run so edits between runs are
/// always observed.
pub struct Resolver<'a, S: DocumentStore> {
    store: &'a S,
    config: MarkerConfig,
    cache: PartialCache,
}

impl<'a, S: DocumentStore> Resolver<'a, S> {
    /// Create a resolver with the default marker dialect.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, MarkerConfig::default())
    }

    /// Create a resolver with a custom marker dialect.
    #[must_use]
    pub fn with_config(store: &'a S, config: MarkerConfig) -> Self {
        Self { store, config, cache: PartialCache::new() }
    }

    /// Number of distinct documents resolved or being resolved so far.
    #[must_use]
    pub fn cached_documents(&self) -> usize {
        self.cache.len()
    }

    /// Fully expand `tree`, resolving every partial marker it contains.
    ///
    /// `origin` identifies the document the tree came from; it is attached
    /// to errors raised before a more specific document is known.
    pub fn resolve(&mut self, tree: &Value, origin: &str) -> Result<Value, SpliceError> {
        debug!(document = origin, "resolving document");
        self.resolve_node(tree, origin)
    }

    fn resolve_node(&mut self, node: &Value, origin: &str) -> Result<Value, SpliceError> {
        match node {
            Value::Object(map) => self.resolve_object(map, origin),
            Value::Array(items) => {
                let resolved = items
                    .iter()
                    .map(|item| self.resolve_node(item, origin))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Array(resolved))
            }
            scalar => Ok(scalar.clone()),
        }
    }

    fn resolve_object(&mut self, map: &Object, origin: &str) -> Result<Value, SpliceError> {
        if self.config.is_marker_object(map) {
            let marker_value = &map[&self.config.marker_key];
            return self.expand_marker(marker_value, origin);
        }

        // Resolve own properties in their original order; a marker key held
        // alongside siblings is consumed here instead of being copied over.
        let marker_value = if map.len() > 1 { map.get(&self.config.marker_key) } else { None };
        let mut own = Object::new();
        for (key, value) in map {
            if marker_value.is_some() && key == &self.config.marker_key {
                continue;
            }
            own.insert(key.clone(), self.resolve_node(value, origin)?);
        }

        match marker_value {
            None => Ok(Value::Object(own)),
            Some(value) => {
                let refs = parse_marker_value(value, &self.config, origin)?;
                trace!(document = origin, partials = refs.len(), "merging partials under siblings");
                let layers = self.expand_object_layers(&refs)?;
                Ok(Value::Object(merge_layers(own, layers)))
            }
        }
    }

    /// Expand a pure marker object into its replacement value.
    fn expand_marker(&mut self, marker_value: &Value, origin: &str) -> Result<Value, SpliceError> {
        let refs = parse_marker_value(marker_value, &self.config, origin)?;
        trace!(document = origin, partials = refs.len(), "expanding marker");

        // Exactly one reference and nothing to merge with: splice the
        // extracted value wholesale, whatever its kind.
        if let [only] = refs.as_slice() {
            let (_, value) = self.expand_reference(only)?;
            return Ok(value);
        }

        let layers = self.expand_object_layers(&refs)?;
        Ok(Value::Object(merge_layers(Object::new(), layers)))
    }

    /// Expand each reference and require an object value, since the results
    /// take part in a merge.
    fn expand_object_layers(&mut self, refs: &[PartialRef]) -> Result<Vec<Object>, SpliceError> {
        let mut layers = Vec::with_capacity(refs.len());
        for reference in refs {
            let (canonical, value) = self.expand_reference(reference)?;
            match value {
                Value::Object(layer) => layers.push(layer),
                other => {
                    return Err(SpliceError::InvalidPartialTarget {
                        document: canonical,
                        detail: format!(
                            "value at path '{}' is a {}, but merging requires an object",
                            reference.path,
                            document::kind(&other)
                        ),
                    });
                }
            }
        }
        Ok(layers)
    }

    /// Resolve one reference to the value it splices in, returning the
    /// canonical identifier of the referenced document alongside it.
    fn expand_reference(&mut self, reference: &PartialRef) -> Result<(String, Value), SpliceError> {
        let canonical = self.store.canonicalize(&reference.document)?;
        let resolved = match self.cache.resolved(&canonical) {
            Some(tree) => {
                trace!(document = %canonical, "cache hit");
                tree
            }
            None => self.resolve_partial_document(&canonical)?,
        };

        let value = extract(&resolved, &reference.path, &canonical)?;
        Ok((canonical, value.clone()))
    }

    /// Load and fully expand the document behind `canonical`, caching the
    /// result. The in-progress sentinel set here is what catches cycles.
    fn resolve_partial_document(
        &mut self,
        canonical: &str,
    ) -> Result<std::sync::Arc<Value>, SpliceError> {
        self.cache.begin(canonical)?;

        let raw = match self.store.load(canonical) {
            Ok(tree) => tree,
            Err(e) => {
                self.cache.abort(canonical);
                return Err(e);
            }
        };

        match self.resolve_node(&raw, canonical) {
            Ok(expanded) => Ok(self.cache.finish(canonical, expanded)),
            Err(e) => {
                self.cache.abort(canonical);
                Err(e)
            }
        }
    }
}
