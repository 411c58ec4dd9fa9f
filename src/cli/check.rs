//! Check command: resolve documents without writing output.
//!
//! Useful in CI to verify that every document in a tree still resolves
//! after edits to shared partials. Prints one status line per source and
//! exits non-zero if any source fails.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use super::common::{collect_sources, resolve_source};
use crate::reference::MarkerConfig;

/// Verify that source documents resolve without writing output.
#[derive(Args)]
pub struct CheckCommand {
    /// Source documents to check (files or directories)
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<PathBuf>,

    /// Directory partial identifiers resolve against
    ///
    /// Defaults to each source file's parent directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Override the reserved marker key (default: ##include)
    #[arg(long, value_name = "KEY")]
    pub marker: Option<String>,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self) -> Result<()> {
        let files = collect_sources(&self.sources)?;
        let config = self
            .marker
            .as_deref()
            .map_or_else(MarkerConfig::default, MarkerConfig::with_marker_key);

        let mut failures = 0usize;
        for file in &files {
            match resolve_source(file, self.root.as_deref(), &config) {
                Ok(_) => println!("{} {}", "✓".green(), file.display()),
                Err(e) => {
                    failures += 1;
                    println!("{} {}: {:#}", "✗".red(), file.display(), e);
                }
            }
        }

        if failures > 0 {
            bail!("{failures} of {} documents failed to resolve", files.len());
        }

        println!("{} documents resolve cleanly", files.len());
        Ok(())
    }
}
