//! Output format selection for reports.
//!
//! These types don't depend on CLI frameworks, so library users can pick a
//! format by name or by file extension.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatsift::Result<()> {
//! use chatsift::format::{OutputFormat, write_to_format};
//! use chatsift::core::models::OutputConfig;
//! use chatsift::{parse, search::search};
//!
//! let messages = parse(["04/12/2023 11:12 - Ana: oi"]);
//! let report = search(&messages, &["oi"], 0.0);
//!
//! // Write using format enum
//! write_to_format(&report, "report.csv", OutputFormat::Csv, &OutputConfig::new())?;
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("report.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::ChatsiftError;
use crate::search::KeywordReport;

/// Output format for reports.
///
/// - [`Csv`](OutputFormat::Csv) - one row per match, opens in spreadsheets
/// - [`Json`](OutputFormat::Json) - the nested report, can be loaded back
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per match
///
/// # Example
///
/// ```rust
/// use chatsift::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Comma-separated values, one row per match (default)
    #[default]
    Csv,

    /// Pretty-printed JSON array of keyword reports
    Json,

    /// JSON Lines - one flattened match per line.
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    ///
    /// ```rust
    /// use chatsift::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.mime_type(), "text/csv");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidFormat`] for a missing or unknown
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatsiftError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatsiftError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }

    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report to a file in the specified format.
///
/// `config` only affects CSV output.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    report: &[KeywordReport],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatsiftError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), %format, "writing report");

    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(report, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts a report to a string in the specified format.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "csv-output", feature = "json-output"))]
/// # fn main() -> chatsift::Result<()> {
/// use chatsift::format::{OutputFormat, to_format_string};
/// use chatsift::core::models::OutputConfig;
/// use chatsift::{Message, search::search};
///
/// let report = search(&[Message::new(1, "Ana", "oi")], &["oi"], 0.0);
/// let csv = to_format_string(&report, OutputFormat::Csv, &OutputConfig::new())?;
/// assert!(csv.starts_with("keyword,count,id"));
/// # Ok(())
/// # }
/// # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
/// # fn main() {}
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    report: &[KeywordReport],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatsiftError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(report, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(report),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatsiftError {
    ChatsiftError::invalid_format(
        "output",
        format!(
            "Output format {format} requires the '{}' feature to be enabled",
            format.feature()
        ),
    )
}
