//! Ignore-once marker syntax and comment-line detection.
//!
//! A line consisting solely of the marker comment, placed immediately above a
//! secret-bearing line, suppresses that one occurrence for that scan only.
//! The marker is re-read from the text on every scan, never remembered.

use std::path::Path;

/// Ignore-once marker for slash-comment languages (JS/TS/Go and friends).
pub const SLASH_MARKER: &str = "// dont-commit-that: ignore-once";

/// Ignore-once marker for hash-comment languages (Python/Ruby and friends).
pub const HASH_MARKER: &str = "# dont-commit-that: ignore-once";

/// Which ignore-once marker form a file's language family accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Only `// dont-commit-that: ignore-once`.
    Slash,
    /// Only `# dont-commit-that: ignore-once`.
    Hash,
    /// Language unknown: either form is accepted.
    Either,
}

impl MarkerStyle {
    /// Returns `true` if `line` (already trimmed) is an ignore-once marker
    /// in this style.
    #[must_use]
    pub fn matches(self, line: &str) -> bool {
        match self {
            Self::Slash => line == SLASH_MARKER,
            Self::Hash => line == HASH_MARKER,
            Self::Either => line == SLASH_MARKER || line == HASH_MARKER,
        }
    }

    /// Returns the marker forms accepted by this style, preferred first.
    #[must_use]
    pub const fn markers(self) -> &'static [&'static str] {
        match self {
            Self::Slash => &[SLASH_MARKER],
            Self::Hash => &[HASH_MARKER],
            Self::Either => &[SLASH_MARKER, HASH_MARKER],
        }
    }
}

/// Returns the marker style for a file path, derived from its extension.
///
/// Files without a recognised extension accept either marker form.
#[must_use]
pub fn style_for_path(path: &Path) -> MarkerStyle {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(MarkerStyle::Either, style_for_extension)
}

/// Returns the marker style for a file extension (e.g. `"py"`, `"ts"`).
#[must_use]
pub fn style_for_extension(ext: &str) -> MarkerStyle {
    match ext.to_lowercase().as_str() {
        // Slash-comment family
        "js" | "mjs" | "cjs" | "jsx" | "ts" | "mts" | "cts" | "tsx" | "go" | "c" | "h" | "cpp" | "cc" | "cxx"
        | "hpp" | "java" | "kt" | "kts" | "scala" | "swift" | "dart" | "cs" | "php" | "rs" | "zig" => {
            MarkerStyle::Slash
        }

        // Hash-comment family
        "py" | "pyw" | "pyi" | "rb" | "rake" | "gemspec" | "sh" | "bash" | "zsh" | "pl" | "pm" | "r" | "ex" | "exs"
        | "yml" | "yaml" | "toml" | "nim" | "fish" | "nix" => MarkerStyle::Hash,

        _ => MarkerStyle::Either,
    }
}

/// Returns `true` if a trimmed line is comment-only (starts with `#` or `//`).
#[must_use]
pub fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with('#') || trimmed.starts_with("//")
}
