//! Resolve command: expand source documents and write the results.
//!
//! Sources are JSON files or directories (walked recursively for `.json`
//! files). Each source is expanded independently; partial identifiers
//! resolve against `--root` when given, otherwise against the source
//! file's parent directory.
//!
//! Output routing:
//! - no `--output`: the expanded document is printed to stdout (single
//!   source only)
//! - `--output FILE`: the expanded document is written to that file
//!   (single source only)
//! - `--output DIR`: each expanded document is written under the
//!   directory; files found under a directory source keep their
//!   source-relative subpath, other sources are keyed by file name.
//!   Two sources mapping to the same output path is an error
//!
//! Output is pretty-printed unless `--compact` is set, and written
//! atomically so a failed run never leaves a truncated document behind.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Args;
use serde_json::Value;
use tracing::info;

use super::common::{collect_sources, resolve_source};
use crate::reference::MarkerConfig;
use crate::utils::fs::safe_write;

/// Expand partial markers in source documents.
#[derive(Args)]
pub struct ResolveCommand {
    /// Source documents to expand (files or directories)
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<PathBuf>,

    /// Directory partial identifiers resolve against
    ///
    /// Defaults to each source file's parent directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output file (single source) or directory
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Override the reserved marker key (default: ##include)
    #[arg(long, value_name = "KEY")]
    pub marker: Option<String>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self) -> Result<()> {
        let files = collect_sources(&self.sources)?;
        let config = self
            .marker
            .as_deref()
            .map_or_else(MarkerConfig::default, MarkerConfig::with_marker_key);

        let output_is_dir =
            self.output.as_deref().is_some_and(|p| p.is_dir()) || files.len() > 1;
        if files.len() > 1 && self.output.is_none() {
            bail!(
                "{} sources selected; writing multiple documents requires --output <DIR>",
                files.len()
            );
        }

        let mut written: HashSet<PathBuf> = HashSet::new();
        for file in &files {
            let resolved = resolve_source(file, self.root.as_deref(), &config)?;
            let rendered = self.render(&resolved)?;

            match &self.output {
                None => print!("{rendered}"),
                Some(target) if output_is_dir => {
                    let name = self.output_name(file);
                    if !written.insert(name.clone()) {
                        bail!(
                            "output collision: two sources map to {}",
                            target.join(&name).display()
                        );
                    }
                    let dest = target.join(name);
                    safe_write(&dest, &rendered)?;
                    info!(source = %file.display(), output = %dest.display(), "wrote document");
                }
                Some(target) => {
                    safe_write(target, &rendered)?;
                    info!(source = %file.display(), output = %target.display(), "wrote document");
                }
            }
        }

        Ok(())
    }

    /// The output-directory path for an expanded document: the file's
    /// subpath under the directory source it was discovered in, or its
    /// bare file name for sources given directly.
    fn output_name(&self, file: &Path) -> PathBuf {
        for source in &self.sources {
            if source.is_dir()
                && let Ok(relative) = file.strip_prefix(source)
            {
                return relative.to_path_buf();
            }
        }
        file.file_name().map_or_else(|| PathBuf::from("out.json"), PathBuf::from)
    }

    fn render(&self, value: &Value) -> Result<String> {
        let mut rendered = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        rendered.push('\n');
        Ok(rendered)
    }
}
