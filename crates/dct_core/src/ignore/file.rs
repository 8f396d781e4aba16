//! JSON-file-backed suppression store.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SuppressionStore;
use super::error::StoreError;
use super::hash::{line_hash, normalise_file};

/// Default filename for the persisted suppression list, one per workspace.
pub const IGNORE_FILENAME: &str = ".dont-commit-that.json";

/// Schema version of the ignore file JSON format.
const CURRENT_VERSION: &str = "1";

fn default_version() -> String {
    CURRENT_VERSION.to_string()
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

/// One persisted suppression: a file identifier plus the salted hash of the
/// canonical `key=value` line. The raw line is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoreEntry {
    /// Normalised file identifier the suppression applies to.
    pub file: String,
    /// Hex digest of `file|key=value`.
    pub line_hash: String,
}

/// Persistent, content-addressed suppression store serialised as JSON.
///
/// The file is read once and cached in memory; every successful [`add`]
/// rewrites the whole updated set atomically (no incremental format, last
/// full write wins). Entries are append-only: the engine never removes them.
///
/// [`add`]: SuppressionStore::add
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreFile {
    /// Schema version string (currently `"1"`).
    #[serde(default = "default_version")]
    pub version: String,

    /// Timestamp when the store was first created.
    #[serde(default = "now", with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,

    /// Timestamp of the most recent save.
    #[serde(default = "now", with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,

    /// The suppression entries, in insertion order.
    #[serde(default)]
    pub ignored: Vec<IgnoreEntry>,

    #[serde(skip)]
    path: PathBuf,
}

impl IgnoreFile {
    /// Creates an empty store that will persist to `path`.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        let timestamp = now();

        Self {
            version: CURRENT_VERSION.to_string(),
            created_at: timestamp,
            updated_at: timestamp,
            ignored: Vec::new(),
            path: path.to_path_buf(),
        }
    }

    /// Loads the store from `path`.
    ///
    /// A missing file is a normal first run and loads as an empty store.
    /// Unreadable or unparsable content is an error; see
    /// [`load_or_default`](Self::load_or_default) for the recovering variant.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::new(path));
        }

        let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut store: Self = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if store.version != CURRENT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                version: store.version,
            });
        }

        store.path = path.to_path_buf();
        Ok(store)
    }

    /// Loads the store from `path`, falling back to an empty store on a
    /// corrupt file.
    ///
    /// The error, if any, is returned alongside so callers can surface a
    /// non-fatal warning; scanning proceeds either way.
    #[must_use]
    pub fn load_or_default(path: &Path) -> (Self, Option<StoreError>) {
        match Self::load(path) {
            Ok(store) => (store, None),
            Err(err) => (Self::new(path), Some(err)),
        }
    }

    /// Returns the path this store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the persisted entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[IgnoreEntry] {
        &self.ignored
    }

    /// Returns the number of suppression entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ignored.len()
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }

    fn save(&mut self) -> Result<(), StoreError> {
        self.updated_at = now();

        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        crate::fs_util::atomic_write(&self.path, &json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}

impl SuppressionStore for IgnoreFile {
    fn has(&self, file: &Path, canonical_line: &str) -> bool {
        let file_key = normalise_file(file);
        let hash = line_hash(file, canonical_line);

        self.ignored.iter().any(|e| e.file == file_key && e.line_hash == hash)
    }

    fn add(&mut self, file: &Path, canonical_line: &str) -> Result<bool, StoreError> {
        if self.has(file, canonical_line) {
            return Ok(false);
        }

        self.ignored.push(IgnoreEntry {
            file: normalise_file(file),
            line_hash: line_hash(file, canonical_line),
        });
        self.save()?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn new_store_is_empty_with_current_version() {
        let store = IgnoreFile::new(Path::new("ignore.json"));
        assert!(store.is_empty());
        assert_eq!(store.version, "1");
    }

    #[test]
    fn add_then_has_roundtrip_in_process() {
        let dir = TempDir::new().unwrap();
        let mut store = IgnoreFile::new(&dir.path().join("ignore.json"));

        let added = store.add(Path::new("config.js"), "API_KEY=abcd1234").unwrap();

        assert!(added);
        assert!(store.has(Path::new("config.js"), "API_KEY=abcd1234"));
    }

    #[test]
    fn add_returns_false_for_duplicate_entry() {
        let dir = TempDir::new().unwrap();
        let mut store = IgnoreFile::new(&dir.path().join("ignore.json"));

        assert!(store.add(Path::new("a.env"), "K=v").unwrap());
        assert!(!store.add(Path::new("a.env"), "K=v").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_persists_and_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ignore.json");

        let mut store = IgnoreFile::new(&path);
        store.add(Path::new("config.js"), "TOKEN=abcd1234").unwrap();

        let reloaded = IgnoreFile::load(&path).unwrap();
        assert!(reloaded.has(Path::new("config.js"), "TOKEN=abcd1234"));
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn has_distinguishes_files_with_identical_lines() {
        let dir = TempDir::new().unwrap();
        let mut store = IgnoreFile::new(&dir.path().join("ignore.json"));

        store.add(Path::new("a.env"), "K=v").unwrap();

        assert!(!store.has(Path::new("b.env"), "K=v"));
    }

    #[test]
    fn store_file_never_contains_the_canonical_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ignore.json");

        let mut store = IgnoreFile::new(&path);
        store.add(Path::new("a.env"), "API_KEY=hunter2hunter2").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("hunter2hunter2"));
        assert!(raw.contains("lineHash"));
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = IgnoreFile::load(&dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_file_reports_error_but_default_recovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(matches!(IgnoreFile::load(&path), Err(StoreError::Parse { .. })));

        let (store, warning) = IgnoreFile::load_or_default(&path);
        assert!(store.is_empty());
        assert!(warning.is_some());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("future.json");
        fs::write(&path, r#"{"version": "99", "ignored": []}"#).unwrap();

        assert!(matches!(
            IgnoreFile::load(&path),
            Err(StoreError::UnsupportedVersion { version }) if version == "99"
        ));
    }

    #[test]
    fn bare_ignored_array_parses_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("minimal.json");
        fs::write(
            &path,
            r#"{"ignored": [{"file": "a.env", "lineHash": "00ff"}]}"#,
        )
        .unwrap();

        let store = IgnoreFile::load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].file, "a.env");
        assert_eq!(store.entries()[0].line_hash, "00ff");
    }

    #[test]
    fn entries_keep_insertion_order() {
        let dir = TempDir::new().unwrap();
        let mut store = IgnoreFile::new(&dir.path().join("ignore.json"));

        store.add(Path::new("a.env"), "A=1").unwrap();
        store.add(Path::new("b.env"), "B=2").unwrap();

        assert_eq!(store.entries()[0].file, "a.env");
        assert_eq!(store.entries()[1].file, "b.env");
    }

    #[test]
    fn entry_matching_follows_path_normalisation() {
        let dir = TempDir::new().unwrap();
        let mut store = IgnoreFile::new(&dir.path().join("ignore.json"));

        store.add(Path::new("./src/config.js"), "K=v").unwrap();

        assert!(store.has(Path::new("src/config.js"), "K=v"));
    }
}
