//! JSON output writer and report loader.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ChatsiftError, Result};
use crate::search::{HighlightedLine, KeywordReport};

/// Writes a report to a JSON file.
///
/// # Format
/// ```json
/// [
///   {"keyword": "oi", "count": 1, "matches": [
///     {"id": 1, "timestamp": "2023-12-04T11:12:00Z", "author": "Ana", "excerpt": "oi", "score": 100}
///   ]}
/// ]
/// ```
pub fn write_json(report: &[KeywordReport], output_path: impl AsRef<Path>) -> Result<()> {
    write_pretty(report, output_path.as_ref())
}

/// Converts a report to a pretty-printed JSON string.
///
/// Same format as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(report: &[KeywordReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes the highlighted transcript to a JSON file as an array of lines.
pub fn write_highlighted_json(lines: &[HighlightedLine], output_path: impl AsRef<Path>) -> Result<()> {
    write_pretty(lines, output_path.as_ref())
}

/// Converts the highlighted transcript to a pretty-printed JSON string.
pub fn highlighted_to_json(lines: &[HighlightedLine]) -> Result<String> {
    Ok(serde_json::to_string_pretty(lines)?)
}

fn write_pretty<T: Serialize + ?Sized>(value: &T, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Loads a report from a JSON export payload.
///
/// Accepts either a bare array of keyword reports, or an object carrying
/// the array in its `report` field. Field names from older exports
/// (`word`, `date`, `text_excerpt`) are accepted too.
///
/// # Errors
///
/// - [`ChatsiftError::MissingReport`] for an object without `report`
/// - [`ChatsiftError::InvalidFormat`] for any other top-level value
/// - [`ChatsiftError::Json`] for malformed JSON or report entries
///
/// # Example
///
/// ```rust
/// use chatsift::core::output::report_from_json;
///
/// let report = report_from_json(r#"{"report": [{"word": "oi", "count": 0, "matches": []}]}"#)?;
/// assert_eq!(report[0].keyword, "oi");
///
/// let err = report_from_json(r#"{"other": 1}"#).unwrap_err();
/// assert!(err.is_missing());
/// # Ok::<(), chatsift::ChatsiftError>(())
/// ```
pub fn report_from_json(payload: &str) -> Result<Vec<KeywordReport>> {
    let value: Value = serde_json::from_str(payload)?;
    let report = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("report").ok_or(ChatsiftError::MissingReport)?,
        other => {
            return Err(ChatsiftError::invalid_format(
                "report",
                format!("expected an array or an object, found {}", kind(&other)),
            ));
        }
    };
    Ok(serde_json::from_value(report)?)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
