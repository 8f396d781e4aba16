//! Scan command - scans files or staged changes for secrets.

mod output;
mod runner;

use std::path::PathBuf;
use std::time::Instant;

use dct_core::prelude::*;

use self::output::ScanStats;
use crate::scanning::{build_scanner, configure_thread_pool, load_store};
use crate::ui::{self, exit};
use crate::{CONFIG_FILENAME, OutputFormat, ScanArgs};

/// Executes the `dct scan` command.
pub fn run(args: &ScanArgs) -> super::Result {
    configure_thread_pool(args.concurrency)?;

    let show_progress = should_show_progress(args);
    let start = Instant::now();

    if show_progress {
        ui::print_command_header("scan");
    }

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let config = Config::load(&config_path)?;
    let scanner = build_scanner(&config)?;
    let store = load_store(&config);

    let files = runner::collect_scan_files(args, &config);

    if files.is_empty() {
        runner::print_no_files(args.staged);
        return Ok(());
    }

    let max_file_size = args.max_file_size.or(config.max_file_size);
    let findings = runner::run_scan(&scanner, &store, &files, max_file_size, show_progress, args.staged);
    let findings = filter_by_severity(findings, args.severity.or(config.severity));

    let stats = ScanStats {
        file_count: files.len(),
        elapsed: start.elapsed(),
    };

    output::write_output(args, &findings, &stats)?;

    if !findings.is_empty() && !args.exit_zero {
        std::process::exit(exit::FINDINGS);
    }

    Ok(())
}

const fn should_show_progress(args: &ScanArgs) -> bool {
    args.output.is_none() && matches!(args.format, OutputFormat::Text)
}

fn filter_by_severity(findings: Vec<Finding>, minimum: Option<Severity>) -> Vec<Finding> {
    match minimum {
        None => findings,
        Some(min) => findings.into_iter().filter(|f| f.severity >= min).collect(),
    }
}
