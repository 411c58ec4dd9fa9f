//! Core types for jsplice.
//!
//! This module is the foundation of the crate's error handling. It provides
//! two layers, following the same split used across the codebase:
//!
//! - **Strongly-typed errors** ([`SpliceError`]) for precise handling in code.
//!   Every failure mode of a resolution run maps to exactly one variant, and
//!   each variant carries enough context (document identifier, path segment,
//!   offending marker value) to pinpoint the failing source location.
//! - **User-friendly contexts** ([`ErrorContext`]) that wrap an error with
//!   actionable suggestions and details for CLI display. The binary converts
//!   any error through [`user_friendly_error`] before printing it.
//!
//! Library code propagates `Result<_, SpliceError>` with `?`; the CLI
//! boundary widens to `anyhow::Result` and downcasts back for display.

pub mod error;

pub use error::{ErrorContext, SpliceError, user_friendly_error};
