//! File collection and parallel scanning.

use std::path::{Path, PathBuf};

use dct_core::prelude::*;
use rayon::prelude::*;

use crate::files::{collect_files, read_text_file};
use crate::ui::colors;
use crate::{ScanArgs, git, ui};

/// Collects files to scan, either from staged git changes or filesystem paths.
#[must_use]
pub fn collect_scan_files(args: &ScanArgs, config: &Config) -> Vec<PathBuf> {
    if args.staged {
        return git::staged_files().unwrap_or_default();
    }

    let all_excludes: Vec<String> = config
        .exclude_paths
        .iter()
        .chain(args.exclude.iter())
        .cloned()
        .collect();

    collect_files(&args.paths, &all_excludes, !args.skip_gitignore)
}

/// Scans all files in parallel using rayon against a shared catalog and a
/// read-only store snapshot. Findings keep the input file order.
#[must_use]
pub fn run_scan(
    scanner: &Scanner,
    store: &IgnoreFile,
    files: &[PathBuf],
    max_file_size: Option<u64>,
    show_progress: bool,
    staged: bool,
) -> Vec<Finding> {
    if show_progress {
        scan_with_progress(scanner, store, files, max_file_size, staged)
    } else {
        scan_quiet(scanner, store, files, max_file_size, staged)
    }
}

/// Prints a message when no files are available to scan.
pub fn print_no_files(staged: bool) {
    if staged {
        println!("{} no staged files", colors::success().apply_to("✓"));
    } else {
        println!("{} no files to scan", colors::warning().apply_to("●"));
        println!();
        println!("  Check your .gitignore or exclude patterns.");
        println!();
    }
}

fn scan_with_progress(
    scanner: &Scanner,
    store: &IgnoreFile,
    files: &[PathBuf],
    max_file_size: Option<u64>,
    staged: bool,
) -> Vec<Finding> {
    let pb = ui::create_file_progress(files.len());

    let per_file: Vec<Vec<Finding>> = files
        .par_iter()
        .filter_map(|path| {
            let result = scan_file(scanner, store, path, max_file_size, staged);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    per_file.into_iter().flatten().collect()
}

fn scan_quiet(
    scanner: &Scanner,
    store: &IgnoreFile,
    files: &[PathBuf],
    max_file_size: Option<u64>,
    staged: bool,
) -> Vec<Finding> {
    files
        .par_iter()
        .filter_map(|path| scan_file(scanner, store, path, max_file_size, staged))
        .flatten()
        .collect()
}

fn scan_file(
    scanner: &Scanner,
    store: &IgnoreFile,
    path: &Path,
    max_file_size: Option<u64>,
    staged: bool,
) -> Option<Vec<Finding>> {
    let content = if staged {
        git::staged_content(path)
    } else {
        read_text_file(path, max_file_size)
    }?;

    Some(scanner.scan(&content, path, store))
}
