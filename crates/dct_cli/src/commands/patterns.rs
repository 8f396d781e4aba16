//! Patterns command - lists the detection catalog.

use std::path::{Path, PathBuf};

use dct_core::prelude::*;

use crate::CONFIG_FILENAME;
use crate::scanning::load_catalog;
use crate::ui::{colors, print_command_header, severity_style};

/// Executes the `dct patterns` command.
pub fn run(group: Option<&str>, severity: Option<Severity>, verbose: bool, config: Option<&Path>) -> super::Result {
    print_command_header("patterns");

    let config_path = config.map_or_else(|| PathBuf::from(CONFIG_FILENAME), Path::to_path_buf);
    let loaded_config = Config::load(&config_path)?;
    let catalog = load_catalog(&loaded_config)?;

    let mut shown = 0usize;

    for pattern in catalog.patterns() {
        if let Some(group_filter) = group
            && !pattern.group.as_str().eq_ignore_ascii_case(group_filter)
        {
            continue;
        }

        if let Some(severity_filter) = severity
            && pattern.severity != severity_filter
        {
            continue;
        }

        print_pattern(pattern, verbose);
        shown += 1;
    }

    println!();
    println!(
        "{}",
        colors::muted().apply_to(format!("{shown} of {} patterns", catalog.len()))
    );

    Ok(())
}

fn print_pattern(pattern: &Pattern, verbose: bool) {
    let origin_note = match pattern.origin {
        Origin::Builtin => String::new(),
        Origin::User => format!(" {}", colors::accent().apply_to("(custom)")),
    };

    println!(
        "{:<9} {} {}{}",
        severity_style(pattern.severity).apply_to(pattern.severity.to_string()),
        colors::emphasis().apply_to(pattern.name.as_ref()),
        colors::muted().apply_to(format!("[{}]", pattern.group.as_str())),
        origin_note,
    );

    if verbose {
        println!("          {}", colors::secondary().apply_to(pattern.description.as_ref()));
        println!(
            "          {}",
            colors::muted().apply_to(format!("regex: {}", pattern.regex.as_str()))
        );
        if !pattern.keywords.is_empty() {
            println!(
                "          {}",
                colors::muted().apply_to(format!("keywords: {}", pattern.keywords.join(", ")))
            );
        }
        println!(
            "          {}",
            colors::muted().apply_to(format!("confidence: {:.2}", pattern.confidence))
        );
    }
}
