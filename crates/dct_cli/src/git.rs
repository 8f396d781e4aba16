//! Git repository access for staged-file scanning.
//!
//! The `scan --staged` mode and the installed pre-commit hook both read
//! from the index: file lists come from diffing the index against the HEAD
//! tree, and content comes from the staged blobs (not the working tree, which
//! may differ from what is about to be committed).

use std::path::{Path, PathBuf};

use dct_core::binary::is_binary_bytes;
use gix::bstr::ByteSlice as _;

/// Returns `true` if the current working directory is inside a git repository.
#[must_use]
pub fn in_repo() -> bool {
    open_cwd().is_some()
}

/// Returns the list of staged file paths, or `None` if not in a repository.
#[must_use]
pub fn staged_files() -> Option<Vec<PathBuf>> {
    let repo = open_cwd()?;
    let index = repo.index_or_empty().ok()?;

    let Ok(head_tree_id) = repo.head_tree_id() else {
        // No commits yet: everything in the index counts as staged.
        return Some(all_indexed_files(&index));
    };

    let head_tree = repo.find_tree(head_tree_id).ok()?;
    Some(files_differing_from_tree(&repo, &index, &head_tree))
}

/// Reads the staged (index) content of a file as UTF-8 text.
///
/// Returns `None` for unstaged paths and binary blobs.
#[must_use]
pub fn staged_content(path: &Path) -> Option<String> {
    let repo = open_cwd()?;
    let index = repo.index_or_empty().ok()?;
    let path_str = path.to_str()?;

    let entry = index.entries().iter().find(|e| e.path(&index) == path_str)?;
    let blob_id = gix::ObjectId::from_bytes_or_panic(entry.id.as_bytes());

    read_blob_as_string(&repo, blob_id)
}

fn open_cwd() -> Option<gix::Repository> {
    gix::discover(std::env::current_dir().ok()?).ok()
}

fn all_indexed_files(index: &gix::worktree::Index) -> Vec<PathBuf> {
    index
        .entries()
        .iter()
        .map(|e| PathBuf::from(e.path(index).to_string()))
        .collect()
}

fn files_differing_from_tree(
    repo: &gix::Repository,
    index: &gix::worktree::Index,
    head_tree: &gix::Tree<'_>,
) -> Vec<PathBuf> {
    let null_oid = gix::ObjectId::null(repo.object_hash());

    index
        .entries()
        .iter()
        .filter_map(|entry| {
            let path = entry.path(index);
            let entry_id = gix::ObjectId::from_bytes_or_panic(entry.id.as_bytes());

            let head_id = head_tree
                .lookup_entry_by_path(path.to_str_lossy().as_ref())
                .ok()
                .flatten()
                .map_or(null_oid, |e| e.object_id());

            (entry_id != head_id).then(|| PathBuf::from(path.to_string()))
        })
        .collect()
}

fn read_blob_as_string(repo: &gix::Repository, oid: gix::ObjectId) -> Option<String> {
    let blob = repo.find_blob(oid).ok()?;

    if is_binary_bytes(&blob.data) {
        return None;
    }

    String::from_utf8(blob.data.clone()).ok()
}
