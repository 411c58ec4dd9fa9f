//! Helpers shared by the resolve and check commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::SpliceError;
use crate::reference::MarkerConfig;
use crate::resolver::Resolver;
use crate::store::FileStore;
use crate::utils::fs::{find_json_files, read_text_file};

/// Expand source arguments into a concrete file list.
///
/// File arguments are taken as-is; directory arguments are walked
/// recursively for `.json` files. Fails if an argument does not exist or a
/// directory contains no documents at all.
pub fn collect_sources(sources: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for source in sources {
        if source.is_dir() {
            let found = find_json_files(source)?;
            if found.is_empty() {
                bail!("no .json documents found under {}", source.display());
            }
            files.extend(found);
        } else if source.is_file() {
            files.push(source.clone());
        } else {
            bail!("source not found: {}", source.display());
        }
    }
    Ok(files)
}

/// The document root a source's partial identifiers resolve against:
/// the explicit `--root`, or the source file's parent directory.
pub fn document_root(source: &Path, root: Option<&Path>) -> PathBuf {
    root.map_or_else(
        || source.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        Path::to_path_buf,
    )
}

/// Read, parse, and fully expand one source document.
pub fn resolve_source(source: &Path, root: Option<&Path>, config: &MarkerConfig) -> Result<Value> {
    let text = read_text_file(source)?;
    let tree: Value = serde_json::from_str(&text).map_err(|e| SpliceError::SourceParseError {
        file: source.display().to_string(),
        reason: e.to_string(),
    })?;

    let store = FileStore::new(document_root(source, root));
    let mut resolver = Resolver::with_config(&store, config.clone());
    let resolved = resolver
        .resolve(&tree, &source.display().to_string())
        .with_context(|| format!("Failed to resolve {}", source.display()))?;
    Ok(resolved)
}
