//! jsplice CLI entry point
//!
//! Handles command-line argument parsing, error display, and command
//! execution:
//! - `resolve` - expand partial markers in source documents
//! - `check` - verify documents resolve without writing output

use anyhow::Result;
use clap::Parser;
use jsplice_cli::cli;
use jsplice_cli::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to a user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
