//! JSON Lines (JSONL) output writer.
//!
//! One flattened [`ReportRow`] per line, which suits line-oriented tools
//! (`jq`, `grep`, log shippers) and appending several runs to one file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::{ReportRow, flatten_report};
use crate::error::Result;
use crate::search::KeywordReport;

/// Writes a report to JSONL format, one match per line.
///
/// ```jsonl
/// {"keyword":"oi","count":2,"id":1,"timestamp":"2023-12-04T11:12:00Z","author":"Ana","excerpt":"oi","score":100}
/// {"keyword":"oi","count":2,"id":5,"timestamp":null,"author":"","excerpt":"oi?","score":100}
/// ```
pub fn write_jsonl(report: &[KeywordReport], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_rows(&flatten_report(report), &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts a report to a JSONL string.
pub fn to_jsonl(report: &[KeywordReport]) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(&flatten_report(report), &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_rows<W: Write>(rows: &[ReportRow], writer: &mut W) -> Result<()> {
    for row in rows {
        let line = serde_json::to_string(row)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
