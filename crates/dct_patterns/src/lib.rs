//! Built-in secret detection patterns for dont-commit-that.
//!
//! This crate is pure data: every pattern is a static [`PatternDef`] owned by
//! a [`Provider`], and [`ProviderRegistry::builtin`] yields them in a fixed
//! order. That order is load-bearing - the scan engine applies patterns in
//! catalog order and the first pattern to claim a line wins, so reordering
//! providers changes detection results.

mod pattern;
mod provider;
/// Secret detection providers organised by service category.
pub mod providers;
mod registry;

pub use pattern::{Group, ParseSeverityError, PatternDef, Severity};
pub use provider::Provider;
pub use registry::ProviderRegistry;
