//! JSON output formatter for scan findings.
//!
//! Raw secret values are deliberately absent: only the masked rendition is
//! serialised, so redirected output never leaks the matched text.

use std::io::Write;

use dct_core::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct JsonFinding {
    file: String,
    line: u32,
    #[serde(rename = "type")]
    kind: String,
    key: String,
    value_masked: String,
    severity: String,
}

fn to_json_finding(f: &Finding) -> JsonFinding {
    JsonFinding {
        file: f.file.display().to_string(),
        line: f.line,
        kind: f.kind.to_string(),
        key: f.key.clone(),
        value_masked: f.masked_value(),
        severity: f.severity.to_string(),
    }
}

/// Serialises scan findings as a pretty-printed JSON array to the given writer.
pub fn write(findings: &[Finding], writer: &mut dyn Write) -> anyhow::Result<()> {
    let json_findings: Vec<JsonFinding> = findings.iter().map(to_json_finding).collect();
    serde_json::to_writer_pretty(&mut *writer, &json_findings)?;
    writeln!(writer)?;
    Ok(())
}
