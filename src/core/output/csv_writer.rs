//! CSV output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::{OutputConfig, ReportRow, flatten_report};
use crate::error::Result;
use crate::search::KeywordReport;

/// Column names, in output order.
pub const CSV_HEADER: [&str; 7] = [
    "keyword",
    "count",
    "id",
    "timestamp",
    "author",
    "excerpt",
    "score",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes a report to a CSV file, one row per match.
///
/// # Format
/// - Delimiter: from `OutputConfig` (default `,`)
/// - Columns: `keyword`, `count`, `id`, `timestamp`, `author`, `excerpt`, `score`
/// - Timestamps: `YYYY-MM-DD HH:MM:SS`, empty when unknown
/// - Encoding: UTF-8, with a byte-order mark if `include_bom` is set
pub fn write_csv(
    report: &[KeywordReport],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut out = BufWriter::new(file);
    write_csv_to(report, &mut out, config)?;
    out.flush()?;
    Ok(())
}

/// Converts a report to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(report: &[KeywordReport], config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_csv_to(report, &mut buf, config)?;
    Ok(String::from_utf8(buf)?)
}

fn write_csv_to<W: Write>(report: &[KeywordReport], out: &mut W, config: &OutputConfig) -> Result<()> {
    if config.include_bom {
        out.write_all(UTF8_BOM)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for row in flatten_report(report) {
        writer.write_record(build_record(&row))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(row: &ReportRow) -> [String; 7] {
    [
        row.keyword.clone(),
        row.count.to_string(),
        row.id.to_string(),
        row.timestamp
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        row.author.clone(),
        row.excerpt.clone(),
        row.score.to_string(),
    ]
}
