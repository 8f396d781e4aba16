//! Binary file detection utilities.
//!
//! The scan engine itself assumes valid text input; these helpers exist for
//! callers (CLI walker, commit hook) to filter binary content upstream.

use std::path::Path;

/// Number of bytes to check for null bytes when detecting binary content.
/// Matches how git handles this as binary files almost always have nulls in headers.
const BINARY_CHECK_BYTES: usize = 8000;

/// File extensions that are always treated as binary, regardless of content.
const BINARY_EXTENSIONS: &[&str] = &[
    "o", "obj", "a", "so", "dylib", "dll", "exe", "pyc", "pyo", "class", "rlib", "rmeta", // Compiled code
    "png", "jpg", "jpeg", "gif", "ico", "webp", "bmp", "tiff", "tif", "heic", "heif", "avif", // Images
    "mp3", "mp4", "wav", "avi", "mov", "flac", "ogg", "webm", "mkv", "m4a", // Audio/Video
    "zip", "tar", "gz", "bz2", "xz", "7z", "rar", "zst", // Archives
    "ttf", "otf", "woff", "woff2", "eot", // Fonts
    "wasm", "bin", "dat", "pak", "bundle", // Other binary
];

/// Returns `true` if the file extension is in the known binary list.
///
/// The check is case-insensitive.
#[must_use]
pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Returns `true` if the first [`BINARY_CHECK_BYTES`] of `content` contain
/// a null byte, which strongly indicates binary data.
#[must_use]
pub fn is_binary_content(content: &str) -> bool {
    is_binary_bytes(content.as_bytes())
}

/// Returns `true` if the first [`BINARY_CHECK_BYTES`] of `bytes` contain
/// a null byte, which strongly indicates binary data.
#[must_use]
pub fn is_binary_bytes(bytes: &[u8]) -> bool {
    let check_len = bytes.len().min(BINARY_CHECK_BYTES);
    bytes[..check_len].contains(&0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_binary_extension_detects_images_and_archives() {
        assert!(has_binary_extension(Path::new("photo.png")));
        assert!(has_binary_extension(Path::new("bundle.tar")));
        assert!(has_binary_extension(Path::new("lib.so")));
    }

    #[test]
    fn has_binary_extension_is_case_insensitive() {
        assert!(has_binary_extension(Path::new("PHOTO.PNG")));
    }

    #[test]
    fn has_binary_extension_passes_source_files() {
        assert!(!has_binary_extension(Path::new("main.rs")));
        assert!(!has_binary_extension(Path::new("config.yaml")));
        assert!(!has_binary_extension(Path::new("Makefile")));
    }

    #[test]
    fn is_binary_bytes_detects_null_byte() {
        assert!(is_binary_bytes(b"abc\0def"));
        assert!(!is_binary_bytes(b"plain text"));
    }

    #[test]
    fn is_binary_bytes_only_checks_prefix() {
        let mut bytes = vec![b' '; BINARY_CHECK_BYTES];
        bytes.push(0);
        assert!(!is_binary_bytes(&bytes));
    }

    #[test]
    fn is_binary_content_matches_bytes_check() {
        assert!(is_binary_content("with\0null"));
        assert!(!is_binary_content("clean"));
    }
}
