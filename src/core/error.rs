//! Error handling for jsplice.
//!
//! The error system is built around two types, mirroring the split between
//! precise in-code handling and friendly CLI reporting:
//!
//! - [`SpliceError`] - enumerated error types for every failure mode of a
//!   resolution run
//! - [`ErrorContext`] - wrapper that adds user-friendly suggestions and
//!   details for terminal display
//!
//! # Error taxonomy
//!
//! A resolution run either fully succeeds or fails with exactly one of:
//!
//! - [`SpliceError::DocumentNotFound`] - a referenced document is missing,
//!   unreadable, or not well-formed JSON
//! - [`SpliceError::CircularReference`] - a document transitively references
//!   itself; the variant carries the chain of identifiers that closed the
//!   cycle
//! - [`SpliceError::InvalidReference`] - a marker value that is neither a
//!   string, an object with a `partial` field, nor an array of those
//! - [`SpliceError::PathNotFound`] - a dotted extraction path names a key
//!   the target document does not have
//! - [`SpliceError::InvalidPartialTarget`] - an extracted value cannot be
//!   merged (or navigated) where an object is required
//!
//! All of these are fatal and non-retryable: there is no partial-success
//! mode, and the CLI never emits a truncated output document. Every variant
//! carries the originating document identifier so the offending source
//! location can be found without inspecting engine internals.
//!
//! # User-facing layer
//!
//! Use [`user_friendly_error`] to convert any [`anyhow::Error`] into an
//! [`ErrorContext`] with a tailored suggestion:
//!
//! ```rust,no_run
//! use jsplice_cli::core::{SpliceError, user_friendly_error};
//!
//! let err = SpliceError::DocumentNotFound {
//!     id: "partials/base.json".to_string(),
//!     reason: "no such file".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(err));
//! ctx.display(); // colored error + suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for jsplice resolution runs.
///
/// Each variant represents a specific failure mode and carries the context
/// needed to locate the offending reference: the document being resolved,
/// the marker value or path segment involved, and the reason where one
/// exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpliceError {
    /// A referenced document is missing, unreadable, or not valid JSON.
    ///
    /// # Fields
    /// - `id`: the document identifier as referenced (or its canonical form)
    /// - `reason`: why the load failed (missing file, io error, parse error)
    #[error("document not found: '{id}' ({reason})")]
    DocumentNotFound {
        /// The document identifier that could not be loaded
        id: String,
        /// Why the load failed
        reason: String,
    },

    /// A document transitively references itself.
    ///
    /// Raised by the partial cache when a document identifier is entered
    /// while its own resolution is still in progress.
    ///
    /// # Fields
    /// - `id`: the identifier at which the cycle closed
    /// - `chain`: the resolution chain from the cycle entry back to `id`
    #[error("circular partial reference: {chain}")]
    CircularReference {
        /// The document identifier at which the cycle was detected
        id: String,
        /// Human-readable chain, e.g. `a.json → b.json → a.json`
        chain: String,
    },

    /// A marker value that cannot be interpreted as partial references.
    ///
    /// The marker value must be a string, an object with a `partial` field,
    /// or an array of those forms.
    #[error("invalid partial reference in '{document}': {reason}")]
    InvalidReference {
        /// The document containing the malformed marker
        document: String,
        /// Description of the offending value
        reason: String,
    },

    /// A dotted extraction path does not resolve inside the target document.
    #[error("path '{path}' not found in '{document}': no key '{segment}'")]
    PathNotFound {
        /// The path segment that failed to resolve
        segment: String,
        /// The full dotted path being navigated
        path: String,
        /// The document the path was applied to
        document: String,
    },

    /// An extracted value is not usable where the engine requires an object,
    /// either while navigating an extraction path through a non-object node
    /// or when merging a non-object value with other object layers.
    #[error("invalid partial target in '{document}': {detail}")]
    InvalidPartialTarget {
        /// The document the offending value came from
        document: String,
        /// What was expected and what was found
        detail: String,
    },

    /// Source document parsing error (the document handed to the engine
    /// itself, as opposed to a referenced partial).
    #[error("invalid source document '{file}': {reason}")]
    SourceParseError {
        /// Path to the source document that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// File system operation failed outside of document loading.
    #[error("file system error during {operation}: {path}")]
    FileSystemError {
        /// The operation that failed (e.g. "write output", "scan directory")
        operation: String,
        /// The path involved
        path: String,
    },

    /// Generic error passthrough.
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// User-friendly error wrapper with optional suggestion and details.
///
/// Wraps a [`SpliceError`] for terminal display. The CLI entry point builds
/// one of these for any failure and prints it with [`ErrorContext::display`].
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SpliceError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context wrapping the given error with no suggestion or
    /// details. Use [`with_suggestion`](Self::with_suggestion) and
    /// [`with_details`](Self::with_details) to add them.
    #[must_use]
    pub const fn new(error: SpliceError) -> Self {
        Self { error, suggestion: None, details: None }
    }

    /// Add an actionable suggestion shown below the error message.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add extra details shown below the error message.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with an
/// actionable suggestion.
///
/// Recognizes [`SpliceError`] variants and common [`std::io::Error`] kinds;
/// anything else falls through with the plain message and a hint to re-run
/// with `--verbose`.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(splice_error) = error.downcast_ref::<SpliceError>() {
        return create_error_context(splice_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(SpliceError::FileSystemError {
                    operation: "file access".to_string(),
                    path: io_error.to_string(),
                })
                .with_suggestion("Check file ownership or run with elevated permissions");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(SpliceError::FileSystemError {
                    operation: "file access".to_string(),
                    path: io_error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(SpliceError::Other { message: format!("{error:#}") })
        .with_suggestion("Run with --verbose for more information")
}

fn create_error_context(error: SpliceError) -> ErrorContext {
    match &error {
        SpliceError::DocumentNotFound { id, .. } => {
            let suggestion = format!(
                "Check that '{id}' exists and is valid JSON; partial identifiers resolve \
                 relative to the document root (--root)"
            );
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        SpliceError::CircularReference { .. } => ErrorContext::new(error)
            .with_suggestion("Break the cycle by removing one of the partial references")
            .with_details("A document may not include itself, directly or transitively"),
        SpliceError::InvalidReference { .. } => ErrorContext::new(error).with_suggestion(
            "A marker value must be a document id string, an object with a 'partial' field, \
             or an array of those",
        ),
        SpliceError::PathNotFound { document, .. } => {
            let suggestion =
                format!("Check the extraction path against the contents of '{document}'");
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("Paths navigate object keys only; array indices are not supported")
        }
        SpliceError::InvalidPartialTarget { .. } => ErrorContext::new(error).with_details(
            "Merging partials with sibling properties requires every extracted value to be \
             an object",
        ),
        SpliceError::SourceParseError { .. } => {
            ErrorContext::new(error).with_suggestion("Fix the JSON syntax in the source document")
        }
        _ => ErrorContext::new(error),
    }
}
