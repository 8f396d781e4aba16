//! Content-addressed hashing for suppression entries.

use std::path::Path;

use sha2::{Digest, Sha256};

/// Normalises a file identifier for hashing and entry comparison.
///
/// Backslashes become forward slashes and a leading `./` is stripped, so
/// entries match across platforms and `./`-prefixed invocations.
#[must_use]
pub fn normalise_file(path: &Path) -> String {
    let path_str = path.to_string_lossy();

    path_str.replace('\\', "/").trim_start_matches("./").to_string()
}

/// Computes the hex digest identifying a suppressed line.
///
/// The input is `file + "|" + canonical_line`, where the canonical line is
/// the `key=value` projection of a finding. Storing only this digest keeps
/// the secret value itself out of the (typically committed) store file.
#[must_use]
pub fn line_hash(file: &Path, canonical_line: &str) -> String {
    let input = format!("{}|{canonical_line}", normalise_file(file));
    hex::encode(Sha256::digest(input.as_bytes()))
}
