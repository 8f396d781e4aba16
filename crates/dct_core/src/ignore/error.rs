use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving a suppression store file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be read from disk.
    #[error("failed to read ignore file '{path}': {source}")]
    Read {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The store file could not be written to disk.
    #[error("failed to write ignore file '{path}': {source}")]
    Write {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The store file contained invalid JSON.
    #[error("failed to parse ignore file '{path}': {source}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// The underlying JSON parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The store file declares a version this build does not support.
    #[error("unsupported ignore file version: {version}")]
    UnsupportedVersion {
        /// The unsupported version string found in the file.
        version: String,
    },
}
