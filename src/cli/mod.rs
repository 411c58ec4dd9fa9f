//! Command-line interface for jsplice.
//!
//! Each command is implemented as a separate module with its own argument
//! struct and execution logic:
//!
//! - `resolve` - expand one or more source documents and write the results
//! - `check` - resolve without writing, reporting per-source ✓/✗ status
//!
//! # Usage patterns
//!
//! ```bash
//! # Expand a document to stdout
//! jsplice resolve config.json
//!
//! # Expand a whole directory into out/, partials resolved against shared/
//! jsplice resolve src/ --root shared/ --output out/
//!
//! # Verify that every document in a tree resolves
//! jsplice check src/
//! ```
//!
//! # Global options
//!
//! All commands support `--verbose` (debug logging) and `--quiet`
//! (errors only). The two are mutually exclusive.

mod check;
mod common;
mod resolve;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Runtime configuration derived from global CLI flags.
///
/// Holds what would otherwise be set directly as environment variables, so
/// tests and programmatic callers can control behavior without mutating
/// global state up front.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the `RUST_LOG` environment variable. `None` preserves
    /// whatever is already set.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Apply this configuration to the process environment and install the
    /// tracing subscriber. Called once at the start of execution.
    pub fn apply(&self) {
        if let Some(level) = &self.log_level
            && std::env::var_os("RUST_LOG").is_none()
        {
            // SAFETY: called once from the main thread before any other
            // threads exist.
            unsafe { std::env::set_var("RUST_LOG", level) };
        }

        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Top-level CLI for jsplice.
#[derive(Parser)]
#[command(
    name = "jsplice",
    about = "Compose JSON documents from reusable partials",
    version,
    author,
    long_about = "jsplice expands ##include partial markers in JSON documents, \
                  recursively loading, merging, and splicing referenced sub-documents \
                  into a single fully-resolved output."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug-level logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Expand partial markers in source documents and write the results.
    ///
    /// See [`resolve::ResolveCommand`] for detailed options and behavior.
    Resolve(resolve::ResolveCommand),

    /// Resolve source documents without writing output, reporting status.
    ///
    /// See [`check::CheckCommand`] for detailed options and behavior.
    Check(check::CheckCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Builds a [`CliConfig`] from the global flags, applies it, and
    /// dispatches to the subcommand. Errors propagate to `main` for
    /// user-friendly display.
    pub fn execute(self) -> Result<()> {
        self.build_config().apply();

        match self.command {
            Commands::Resolve(cmd) => cmd.execute(),
            Commands::Check(cmd) => cmd.execute(),
        }
    }

    /// Translate global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig { log_level }
    }
}
