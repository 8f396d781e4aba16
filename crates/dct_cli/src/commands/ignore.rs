//! Ignore command - persistently suppresses a reviewed finding.
//!
//! The selected finding's `key=value` projection is hashed together with the
//! file identifier and appended to the workspace ignore file; the secret
//! value itself is never written anywhere. Future scans of the same line in
//! the same file stay silent, in the editor and at commit time alike.

use std::path::PathBuf;

use anyhow::Context as _;
use dct_core::prelude::*;
use dialoguer::FuzzySelect;
use dialoguer::theme::ColorfulTheme;

use crate::scanning::{build_scanner, load_store};
use crate::ui::{colors, indicators, print_command_header};
use crate::{CONFIG_FILENAME, IgnoreArgs, files};

/// Executes the `dct ignore` command.
pub fn run(args: &IgnoreArgs) -> super::Result {
    print_command_header("ignore");

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let config = Config::load(&config_path)?;
    let scanner = build_scanner(&config)?;
    let mut store = load_store(&config);

    let content = files::read_text_file(&args.file, config.max_file_size)
        .with_context(|| format!("cannot read '{}' as text", args.file.display()))?;

    let findings = scanner.scan(&content, &args.file, &store);

    if findings.is_empty() {
        println!(
            "{} {}",
            colors::success().apply_to(indicators::SUCCESS),
            colors::secondary().apply_to("nothing to ignore: no findings in this file")
        );
        return Ok(());
    }

    let finding = select_finding(&findings, args.line)?;

    let added = store.add(&args.file, &finding.canonical_line())?;

    if added {
        println!(
            "{} {} {}",
            colors::success().apply_to(indicators::ADDED),
            colors::secondary().apply_to("ignored forever:"),
            colors::emphasis().apply_to(finding.to_string())
        );
        println!(
            "  {}",
            colors::muted().apply_to(format!("recorded in {}", store.path().display()))
        );
    } else {
        println!(
            "{} {}",
            colors::info().apply_to(indicators::INFO),
            colors::secondary().apply_to("already ignored")
        );
    }

    Ok(())
}

fn select_finding(findings: &[Finding], line: Option<u32>) -> anyhow::Result<&Finding> {
    match line {
        Some(line) => findings
            .iter()
            .find(|f| f.line == line)
            .with_context(|| format!("no finding on line {line}")),
        None => pick_interactively(findings),
    }
}

fn pick_interactively(findings: &[Finding]) -> anyhow::Result<&Finding> {
    let items: Vec<String> = findings
        .iter()
        .map(|f| format!("line {:>4}  {}  ({} = {})", f.line, f.kind, f.key, f.masked_value()))
        .collect();

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Which finding should be ignored forever?")
        .items(&items)
        .default(0)
        .interact()
        .context("selection cancelled")?;

    findings.get(selection).context("selection out of range")
}
