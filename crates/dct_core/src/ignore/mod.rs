//! Persistent and in-memory suppression stores.
//!
//! A suppression entry says "never report this exact `key=value` line in
//! this file again". Entries are content-addressed: only a salted hash of
//! the file identifier and canonical line is kept, so the store file never
//! leaks the secret value it suppresses.

mod error;
mod file;
mod hash;
mod memory;

use std::path::Path;

pub use error::StoreError;
pub use file::{IGNORE_FILENAME, IgnoreEntry, IgnoreFile};
pub use hash::{line_hash, normalise_file};
pub use memory::MemoryStore;

/// Capability interface for "do not report this again" entries.
///
/// The scan engine depends only on this trait; a filesystem-backed store and
/// a host-backed (or in-memory) store both satisfy it, selected by the
/// caller at construction time.
pub trait SuppressionStore {
    /// Returns `true` if `(file, canonical_line)` is suppressed.
    fn has(&self, file: &Path, canonical_line: &str) -> bool;

    /// Records a suppression for `(file, canonical_line)`.
    ///
    /// Returns `Ok(false)` if the entry was already present, `Ok(true)` once
    /// the new entry has been recorded (and, for persistent stores, written
    /// to storage).
    fn add(&mut self, file: &Path, canonical_line: &str) -> Result<bool, StoreError>;
}
