//! CLI command handlers.

/// Git pre-commit hook installation and management.
pub mod hook;
/// Persistent suppression of a reviewed finding.
pub mod ignore;
/// Pattern listing and inspection.
pub mod patterns;
/// File and staged-change scanning for secrets.
pub mod scan;

/// Convenience alias for command return types.
pub type Result<T = ()> = anyhow::Result<T>;
