//! File system utilities shared by the CLI driver.
//!
//! - [`fs`] - atomic writes, text/JSON reading, and source-file discovery
//!
//! Writes are always atomic (write-then-rename) so a failed run can never
//! leave a truncated output document behind.

pub mod fs;

pub use fs::{atomic_write, ensure_dir, find_json_files, read_text_file, safe_write};
