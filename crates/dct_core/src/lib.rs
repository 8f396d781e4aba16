//! Core secret scanning engine for dont-commit-that.
//!
//! This crate detects hard-coded secrets in source text before it is
//! committed, and remembers suppressed false positives across scans and
//! across processes (editor session and commit-time hook alike).
//!
//! # Main Types
//!
//! - [`Catalog`] - Ordered collection of detection patterns, built-ins merged
//!   with user overrides by name
//! - [`Scanner`] - Runs the catalog against text and produces findings
//! - [`Finding`] - A detected secret with file, line, and key/value context
//! - [`SuppressionStore`] - Capability interface for "do not report this
//!   again" entries, with JSON-file and in-memory implementations
//! - [`Config`] - User configuration loaded from `.dct.toml`
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that library
//! consumers can match on:
//!
//! - [`PatternError`] - Pattern compilation failures
//! - [`ConfigError`] - Configuration loading/parsing failures
//! - [`StoreError`] - Suppression store I/O and parse failures
//! - [`DctError`] - Top-level error enum combining the above
//!
//! The CLI crate (`dct_cli`) uses `anyhow` for error propagation.

/// Binary file detection heuristics for upstream callers.
pub mod binary;
/// User configuration loaded from `.dct.toml`.
pub mod config;
/// Error types for pattern compilation, configuration, and store operations.
pub mod error;
/// The finding type produced by scans.
pub mod finding;
/// Filesystem helpers for atomic writes.
pub mod fs_util;
/// Persistent and in-memory suppression stores.
pub mod ignore;
/// Ignore-once marker syntax and comment detection.
pub mod marker;
/// Pattern compilation and the ordered, name-keyed catalog.
pub mod pattern;
/// Common re-exports for internal use.
pub mod prelude;
/// The scanning algorithm that matches patterns against text.
pub mod scanner;
#[cfg(test)]
pub(crate) mod test_utils;
/// Text utilities for line boundary detection.
pub mod text;

pub use config::{Config, ConfigError, UserPattern};
pub use error::{DctError, PatternError};
pub use finding::Finding;
pub use ignore::{IgnoreEntry, IgnoreFile, MemoryStore, StoreError, SuppressionStore};
pub use pattern::{Catalog, CatalogLoad, Group, Origin, Pattern, Severity};
pub use scanner::Scanner;

/// Default filename for dont-commit-that configuration.
pub const CONFIG_FILENAME: &str = ".dct.toml";
