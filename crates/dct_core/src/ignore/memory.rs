//! In-memory suppression store for hosts and tests.

use std::collections::HashSet;
use std::path::Path;

use super::SuppressionStore;
use super::error::StoreError;
use super::hash::{line_hash, normalise_file};

/// Suppression store that lives only for the lifetime of the process.
///
/// Useful for host environments that manage persistence themselves, and for
/// exercising the scan engine in tests without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashSet<(String, String)>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of suppression entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SuppressionStore for MemoryStore {
    fn has(&self, file: &Path, canonical_line: &str) -> bool {
        self.entries
            .contains(&(normalise_file(file), line_hash(file, canonical_line)))
    }

    fn add(&mut self, file: &Path, canonical_line: &str) -> Result<bool, StoreError> {
        Ok(self
            .entries
            .insert((normalise_file(file), line_hash(file, canonical_line))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_nothing() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(!store.has(Path::new("a.env"), "K=v"));
    }

    #[test]
    fn add_then_has_returns_true() {
        let mut store = MemoryStore::new();
        assert!(store.add(Path::new("a.env"), "K=v").unwrap());
        assert!(store.has(Path::new("a.env"), "K=v"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_add_returns_false() {
        let mut store = MemoryStore::new();
        assert!(store.add(Path::new("a.env"), "K=v").unwrap());
        assert!(!store.add(Path::new("a.env"), "K=v").unwrap());
    }

    #[test]
    fn entries_are_scoped_to_their_file() {
        let mut store = MemoryStore::new();
        store.add(Path::new("a.env"), "K=v").unwrap();
        assert!(!store.has(Path::new("b.env"), "K=v"));
    }
}
