//! Report writers.
//!
//! - [`write_csv`] / [`to_csv`] - one row per match, spreadsheet friendly - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - the nested report, pretty-printed - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per match - requires `json-output` feature
//!
//! [`report_from_json`] reads a JSON report back, so a saved report can be
//! re-exported in another format.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::core::output::{to_csv, write_json, write_jsonl};
//! use chatsift::core::models::OutputConfig;
//! use chatsift::search::search;
//! use chatsift::parse;
//!
//! let messages = parse(["04/12/2023 11:12 - Ana: oi"]);
//! let report = search(&messages, &["oi"], 0.0);
//!
//! write_json(&report, "report.json")?;
//! write_jsonl(&report, "report.jsonl")?;
//!
//! let csv_string = to_csv(&report, &OutputConfig::new().with_bom())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{
    highlighted_to_json, report_from_json, to_json, write_highlighted_json, write_json,
};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
