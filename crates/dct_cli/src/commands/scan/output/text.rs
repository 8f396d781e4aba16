//! Text output formatting for scan results.
//!
//! Each finding renders as `file:line -> type`, the contract consumed by
//! pre-commit gates and editors parsing scan output.

use std::io::Write;

use dct_core::prelude::*;

use super::ScanStats;
use crate::ui::{colors, indicators, pluralise_word, severity_style};

/// Renders scan findings as human-readable text to the given writer.
pub fn write(
    findings: &[Finding],
    stats: &ScanStats,
    writer: &mut dyn Write,
    styled: bool,
    verbose: u8,
) -> anyhow::Result<()> {
    for finding in findings {
        write_finding(finding, writer, styled, verbose)?;
    }

    write_summary(findings, stats, writer, styled)
}

fn write_finding(finding: &Finding, writer: &mut dyn Write, styled: bool, verbose: u8) -> anyhow::Result<()> {
    if styled {
        writeln!(
            writer,
            "{} {} {}",
            severity_style(finding.severity).apply_to(indicators::ERROR),
            colors::emphasis().apply_to(finding.to_string()),
            severity_style(finding.severity).apply_to(format!("[{}]", finding.severity)),
        )?;
    } else {
        writeln!(writer, "{finding} [{}]", finding.severity)?;
    }

    if verbose > 0 {
        let detail = format!("{} = {}", finding.key, finding.masked_value());
        if styled {
            writeln!(writer, "    {}", colors::muted().apply_to(detail))?;
        } else {
            writeln!(writer, "    {detail}")?;
        }
    }

    Ok(())
}

fn write_summary(findings: &[Finding], stats: &ScanStats, writer: &mut dyn Write, styled: bool) -> anyhow::Result<()> {
    let elapsed_ms = stats.elapsed.as_millis();
    let files = format!(
        "{} {}",
        stats.file_count,
        pluralise_word(stats.file_count, "file", "files")
    );

    writeln!(writer)?;

    if findings.is_empty() {
        let message = format!("no secrets found in {files} ({elapsed_ms} ms)");
        if styled {
            writeln!(
                writer,
                "{} {}",
                colors::success().apply_to(indicators::SUCCESS),
                colors::secondary().apply_to(message)
            )?;
        } else {
            writeln!(writer, "{message}")?;
        }
        return Ok(());
    }

    let message = format!(
        "{} {} found in {files} ({elapsed_ms} ms)",
        findings.len(),
        pluralise_word(findings.len(), "secret", "secrets"),
    );

    if styled {
        writeln!(
            writer,
            "{} {}",
            colors::error().apply_to(indicators::ERROR),
            colors::secondary().apply_to(message)
        )?;
    } else {
        writeln!(writer, "{message}")?;
    }

    Ok(())
}
