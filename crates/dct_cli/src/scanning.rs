//! Catalog loading and scanner construction.

use std::collections::HashSet;

use dct_core::prelude::*;

use crate::ui;

/// Loads built-in patterns, removes any disabled by configuration, and merges
/// in user-defined pattern overrides.
///
/// Invalid user patterns are skipped with a warning; they never abort the
/// load.
pub fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    let mut patterns = Catalog::builtin()?.into_patterns();

    if !config.disabled_patterns.is_empty() {
        let disabled: HashSet<&str> = config.disabled_patterns.iter().map(String::as_str).collect();
        patterns.retain(|p| !disabled.contains(p.name.as_ref()));
    }

    let mut user_patterns = Vec::with_capacity(config.patterns.len());
    for raw in &config.patterns {
        match raw.compile() {
            Ok(pattern) => user_patterns.push(pattern),
            Err(err) => ui::print_warning(&format!("skipping custom pattern: {err}")),
        }
    }

    Ok(Catalog::new(patterns).merge_user(user_patterns))
}

/// Builds a `Scanner` over the catalog loaded from `config`.
pub fn build_scanner(config: &Config) -> anyhow::Result<Scanner> {
    Ok(Scanner::new(load_catalog(config)?))
}

/// Loads the suppression store named by `config`, recovering from a missing
/// or corrupt file with a non-fatal warning.
#[must_use]
pub fn load_store(config: &Config) -> IgnoreFile {
    let (store, warning) = IgnoreFile::load_or_default(config.ignore_file_path());

    if let Some(err) = warning {
        ui::print_warning(&format!("{err}; continuing with an empty ignore list"));
    }

    store
}

/// Configures the global rayon thread pool with the requested number of
/// threads, if specified.
pub fn configure_thread_pool(concurrency: Option<usize>) -> anyhow::Result<()> {
    use anyhow::Context as _;

    if let Some(n) = concurrency {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("failed to configure thread pool")?;
    }
    Ok(())
}
