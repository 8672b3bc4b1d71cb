//! Report post-processing for chatsift.
//!
//! This module contains:
//! - [`models`] - Flattened report rows and output settings
//! - [`timeline`] - Match counts per day
//! - [`stats`] - Run summary
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatsift::core::{
//!     OutputConfig, SearchStats, flatten_report, matches_by_date,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod models;
pub mod output;
pub mod stats;
pub mod timeline;

pub use models::{OutputConfig, ReportRow, flatten_report};
pub use stats::SearchStats;
pub use timeline::{DateCount, matches_by_date};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{report_from_json, to_json, to_jsonl, write_json, write_jsonl};
