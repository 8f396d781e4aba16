//! Output formatting for scan results.

mod json;
mod text;

use std::io::Write;
use std::time::Duration;

use dct_core::prelude::*;

use crate::{OutputFormat, ScanArgs};

/// Summary statistics for a completed scan.
#[derive(Debug)]
pub struct ScanStats {
    /// Number of files that were scanned.
    pub file_count: usize,
    /// Wall-clock duration of the scan.
    pub elapsed: Duration,
}

/// Renders findings in the requested format to stdout or the `--output` file.
pub fn write_output(args: &ScanArgs, findings: &[Finding], stats: &ScanStats) -> anyhow::Result<()> {
    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            let mut writer = std::io::BufWriter::new(file);
            write_format(args, findings, stats, &mut writer, false)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_format(args, findings, stats, &mut writer, true)?;
        }
    }

    Ok(())
}

fn write_format(
    args: &ScanArgs,
    findings: &[Finding],
    stats: &ScanStats,
    writer: &mut dyn Write,
    styled: bool,
) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Text => text::write(findings, stats, writer, styled, args.verbose),
        OutputFormat::Json => json::write(findings, writer),
    }
}
