//! Convenience re-exports of the most commonly used types.

pub use crate::config::{Config, ConfigError, UserPattern};
pub use crate::error::{DctError, PatternError};
pub use crate::finding::Finding;
pub use crate::ignore::{IgnoreFile, MemoryStore, StoreError, SuppressionStore};
pub use crate::pattern::{Catalog, CatalogLoad, Group, Origin, Pattern, Severity};
pub use crate::scanner::Scanner;
