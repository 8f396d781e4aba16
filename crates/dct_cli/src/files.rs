//! File collection and reading utilities.
//!
//! Handles walking directories with gitignore support, applying exclude
//! patterns, and reading text files with size limits. Binary content is
//! filtered here, before it ever reaches the scan engine.

use std::io::Read;
use std::path::{Path, PathBuf};

use dct_core::binary::{has_binary_extension, is_binary_bytes};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

/// Walks the given paths, collecting scannable text files while honouring
/// exclude globs, gitignore rules, and binary-extension filtering.
#[must_use]
pub fn collect_files(paths: &[PathBuf], excludes: &[String], respect_gitignore: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if !has_binary_extension(path) {
                files.push(path.clone());
            }
            continue;
        }

        let overrides = build_overrides(path, excludes);
        let walker = build_walker(path, overrides, respect_gitignore);

        let (tx, rx) = std::sync::mpsc::channel();
        walker.run(|| {
            let tx = tx.clone();
            Box::new(move |result| {
                if let Ok(entry) = result
                    && is_scannable_file(&entry)
                {
                    let _ = tx.send(entry.into_path());
                }
                ignore::WalkState::Continue
            })
        });
        drop(tx);
        files.extend(rx);
    }

    files
}

fn is_scannable_file(entry: &ignore::DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file()) && !has_binary_extension(entry.path())
}

/// Files at or above this size are memory-mapped instead of heap-read.
const MMAP_THRESHOLD: u64 = 32 * 1024;

/// Reads a file as UTF-8 text, returning `None` if it exceeds `max_size`,
/// does not exist, or contains binary content.
///
/// Small files (< 32 KB) are read with a single `read` syscall.
/// Large files are memory-mapped so the OS page cache is used directly,
/// avoiding a heap copy until we confirm the file is text.
#[must_use]
pub fn read_text_file(path: &Path, max_size: Option<u64>) -> Option<String> {
    let mut file = std::fs::File::open(path).ok()?;
    let metadata = file.metadata().ok()?;
    let len = metadata.len();

    if let Some(max) = max_size
        && len > max
    {
        return None;
    }

    if len >= MMAP_THRESHOLD {
        read_large_file_mmap(&file)
    } else {
        read_small_file(&mut file, len)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "files above max_size are already rejected; remaining sizes fit in usize"
)]
fn read_small_file(file: &mut std::fs::File, len: u64) -> Option<String> {
    let mut bytes = Vec::with_capacity(len as usize);
    file.read_to_end(&mut bytes).ok()?;
    if is_binary_bytes(&bytes) {
        return None;
    }
    String::from_utf8(bytes).ok()
}

fn read_large_file_mmap(file: &std::fs::File) -> Option<String> {
    // SAFETY: The map is read-only and dropped before this function returns.
    // Concurrent file truncation could cause SIGBUS, but this is the same
    // risk `git` and `ripgrep` accept for mmap-based file reading.
    #[expect(unsafe_code, reason = "mmap requires unsafe; lifetime is scoped to this function")]
    let mmap = unsafe { memmap2::Mmap::map(file) }.ok()?;

    if is_binary_bytes(&mmap) {
        return None;
    }

    std::str::from_utf8(&mmap).ok().map(String::from)
}

#[expect(
    clippy::expect_used,
    reason = "pattern format is validated by caller; programmer error if invalid"
)]
fn build_overrides(path: &Path, excludes: &[String]) -> ignore::overrides::Override {
    let mut builder = OverrideBuilder::new(path);

    for pattern in excludes {
        builder.add(&format!("!{pattern}")).expect("invalid exclude pattern");
    }

    builder.build().expect("invalid exclude pattern set")
}

fn build_walker(path: &Path, overrides: ignore::overrides::Override, respect_gitignore: bool) -> ignore::WalkParallel {
    WalkBuilder::new(path)
        .overrides(overrides)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .hidden(false)
        .build_parallel()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn collect_files_returns_single_file_directly() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "content").unwrap();

        let files = collect_files(&[file.clone()], &[], true);

        assert_eq!(files, vec![file]);
    }

    #[test]
    fn collect_files_skips_binary_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("image.png"), [0u8, 1, 2]).unwrap();
        fs::write(dir.path().join("code.rs"), "fn main() {}").unwrap();

        let files = collect_files(&[dir.path().to_path_buf()], &[], true);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("code.rs"));
    }

    #[test]
    fn collect_files_honours_exclude_globs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("vendor/lib.js"), "var x;").unwrap();
        fs::write(dir.path().join("app.js"), "var y;").unwrap();

        let files = collect_files(&[dir.path().to_path_buf()], &["vendor/**".to_string()], true);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.js"));
    }

    #[test]
    fn read_text_file_returns_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "hello").unwrap();

        assert_eq!(read_text_file(&file, None).as_deref(), Some("hello"));
    }

    #[test]
    fn read_text_file_rejects_oversized_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("big.txt");
        fs::write(&file, "0123456789").unwrap();

        assert!(read_text_file(&file, Some(5)).is_none());
        assert!(read_text_file(&file, Some(100)).is_some());
    }

    #[test]
    fn read_text_file_rejects_binary_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("blob.txt");
        fs::write(&file, b"abc\0def").unwrap();

        assert!(read_text_file(&file, None).is_none());
    }

    #[test]
    fn read_text_file_handles_missing_file() {
        assert!(read_text_file(Path::new("/nonexistent/file.txt"), None).is_none());
    }
}
