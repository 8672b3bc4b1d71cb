//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Cli`] - top-level arguments and the [`Command`] to run
//! - [`ScanArgs`] - search a transcript and export the report
//! - [`ExportArgs`] - re-export a saved JSON report
//! - [`OutputFormat`] - output format options
//!
//! ```rust
//! use clap::Parser;
//! use chatsift::cli::{Cli, Command};
//!
//! let cli = Cli::try_parse_from(["chatsift", "scan", "chat.txt", "-k", "oi"]).unwrap();
//! assert!(matches!(cli.command, Command::Scan(_)));
//! ```

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CONTEXT;
use crate::core::models::OutputConfig;

/// Search chat transcripts for keywords with exact and fuzzy matching,
/// and export the matches as CSV, JSON or JSON Lines.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift scan chat.txt -k pix -k boleto
    chatsift scan chat.txt --keywords-file words.txt --fuzzy 0.8 -o matches.csv --bom
    chatsift scan chat.txt -k oi -f json --highlighted transcript.json --timeline
    chatsift export matches.json -o matches.csv --delimiter ';'")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a transcript, search it and write the match report
    Scan(ScanArgs),

    /// Convert a saved JSON report to another format
    Export(ExportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Path to the transcript (.txt)
    pub input: PathBuf,

    /// Keyword or phrase to search for (repeatable)
    #[arg(short = 'k', long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// File with one keyword per line
    #[arg(long, value_name = "FILE")]
    pub keywords_file: Option<PathBuf>,

    /// Fuzzy threshold between 0 and 1 (0 disables fuzzy matching)
    #[arg(long, value_name = "T", default_value_t = 0.0, value_parser = parse_threshold)]
    pub fuzzy: f64,

    /// Characters of context around each match
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CONTEXT)]
    pub context: usize,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Also write the highlighted transcript as JSON
    #[arg(long, value_name = "FILE")]
    pub highlighted: Option<PathBuf>,

    /// Print match counts per day
    #[arg(long)]
    pub timeline: bool,

    /// Read the transcript line by line instead of all at once
    #[arg(long)]
    pub streaming: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// JSON report, either an array or an object with a `report` field
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Where and how to write a report.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Path to output file [default: report.<format extension>]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: from the output extension, else csv]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Start CSV output with a UTF-8 byte-order mark (for Excel)
    #[arg(long)]
    pub bom: bool,

    /// CSV field delimiter (a single ASCII character)
    #[arg(long, value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

impl OutputArgs {
    /// The format to write: `--format`, else the output extension, else CSV.
    pub fn resolved_format(&self) -> crate::format::OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| crate::format::OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }

    /// The output path, defaulting to `report.<ext>`.
    pub fn resolved_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            Path::new("report").with_extension(self.resolved_format().extension())
        })
    }

    pub fn output_config(&self) -> OutputConfig {
        let config = OutputConfig::new().with_delimiter(self.delimiter);
        if self.bom { config.with_bom() } else { config }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One row per match (default)
    #[default]
    Csv,

    /// Nested report, can be re-exported later
    Json,

    /// One JSON object per match
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(format!("{value} is outside 0..=1"));
    }
    Ok(value)
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    let s = if s == "\\t" { "\t" } else { s };
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}
