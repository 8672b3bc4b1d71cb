//! Header line recognition and timestamp parsing.
//!
//! A header line starts a new message. Two shapes are recognized, tried in
//! order:
//!
//! - Space-separated: `04/12/2023 11:12 - Ana: oi`
//! - Comma-separated: `01/12/2024, 14:22 - Bob: ok`
//!
//! Anything else is a continuation line, however header-like it looks.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

/// `date time - author: text`
const SPACE_SEPARATED: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4})\s+(\d{1,2}:\d{2})(?:\s*-\s*)(.*?):\s*(.*)$";

/// `date, time - author: text`
const COMMA_SEPARATED: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2})\s*-\s*(.*?):\s*(.*)$";

/// Tried in order; the first one that parses wins.
///
/// Two-digit years are widened to four digits before parsing, so only the
/// `%Y` forms are needed.
const TIMESTAMP_FORMATS: [&str; 2] = ["%d/%m/%Y %H:%M", "%d/%m/%Y %H:%M:%S"];

/// Two-digit years from this value up belong to the 1900s, the rest to the
/// 2000s (`69` is 1969, `68` is 2068).
const CENTURY_PIVOT: u32 = 69;

/// Captured parts of a header line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Date as written, e.g. `04/12/2023`
    pub date: &'a str,
    /// Time as written, e.g. `11:12`
    pub time: &'a str,
    /// Author, untrimmed
    pub author: &'a str,
    /// First line of the message, untrimmed
    pub text: &'a str,
}

impl Header<'_> {
    /// Parses the captured date and time.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.date, self.time)
    }
}

/// The two header patterns, compiled once per parser instance.
#[derive(Debug, Clone)]
pub struct HeaderGrammar {
    patterns: [Regex; 2],
}

impl HeaderGrammar {
    /// Compiles the header patterns.
    pub fn new() -> Self {
        let compile = |pattern: &str| {
            Regex::new(pattern).expect("header patterns are valid regular expressions")
        };
        Self {
            patterns: [compile(SPACE_SEPARATED), compile(COMMA_SEPARATED)],
        }
    }

    /// Matches `line` against the header patterns.
    ///
    /// Returns `None` for continuation lines.
    pub fn match_header<'a>(&self, line: &'a str) -> Option<Header<'a>> {
        let caps = self.patterns.iter().find_map(|re| re.captures(line))?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        Some(Header {
            date: group(1),
            time: group(2),
            author: group(3),
            text: group(4),
        })
    }

    /// Returns `true` if `line` starts a new message.
    pub fn is_header(&self, line: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(line))
    }
}

impl Default for HeaderGrammar {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a header's date and time strings.
///
/// Supports `day/month/year hour:minute` with four- or two-digit years, and
/// the same with seconds. Two-digit years `69`-`99` map to 1969-1999 and
/// `00`-`68` to 2000-2068. Returns `None` if no format fits.
///
/// # Example
///
/// ```rust
/// use chrono::Datelike;
/// use chatsift::parsing::parse_timestamp;
///
/// assert!(parse_timestamp("01/12/2024", "14:22").is_some());
/// assert_eq!(parse_timestamp("04/12/99", "11:12").unwrap().year(), 1999);
/// assert!(parse_timestamp("12/31/2024", "10:00").is_none()); // month 31
/// ```
pub fn parse_timestamp(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let (day_month, year) = date.rsplit_once('/')?;
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = match year.len() {
        4 => year.to_string(),
        2 => {
            let yy: u32 = year.parse().ok()?;
            let century = if yy >= CENTURY_PIVOT { 1900 } else { 2000 };
            (century + yy).to_string()
        }
        _ => return None,
    };
    let datetime = format!("{day_month}/{year} {time}");

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&datetime, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_space_separated_header() {
        let grammar = HeaderGrammar::new();
        let header = grammar.match_header("04/12/2023 11:12 - Ana: oi").unwrap();
        assert_eq!(header.date, "04/12/2023");
        assert_eq!(header.time, "11:12");
        assert_eq!(header.author, "Ana");
        assert_eq!(header.text, "oi");
    }

    #[test]
    fn test_comma_separated_header() {
        let grammar = HeaderGrammar::new();
        let header = grammar.match_header("01/12/2024, 14:22 - Bob: ok").unwrap();
        assert_eq!(header.date, "01/12/2024");
        assert_eq!(header.author, "Bob");
        assert_eq!(header.text, "ok");
    }

    #[test]
    fn test_author_stops_at_first_colon() {
        let grammar = HeaderGrammar::new();
        let header = grammar
            .match_header("01/12/2024, 14:22 - Bob: note: see 10:30")
            .unwrap();
        assert_eq!(header.author, "Bob");
        assert_eq!(header.text, "note: see 10:30");
    }

    #[test]
    fn test_non_headers() {
        let grammar = HeaderGrammar::new();
        assert!(!grammar.is_header("just text: with a colon"));
        assert!(!grammar.is_header("[1/15/24, 10:30:45 AM] Alice: Hello"));
        assert!(!grammar.is_header("15.01.2024, 10:30 - Alice: Hello"));
        // No colon after the author
        assert!(!grammar.is_header("01/12/2024, 14:22 - Messages are encrypted"));
        // Seconds are not part of the header grammar
        assert!(!grammar.is_header("01/12/2024 14:22:05 - Bob: ok"));
    }

    #[test]
    fn test_single_digit_day_and_hour() {
        let grammar = HeaderGrammar::new();
        let header = grammar.match_header("1/2/24 9:05 - Eve: hi").unwrap();
        assert_eq!(header.date, "1/2/24");
        assert_eq!(header.time, "9:05");
        let ts = header.timestamp().unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 2, 1));
        assert_eq!((ts.hour(), ts.minute()), (9, 5));
    }

    #[test]
    fn test_parse_timestamp_four_digit_year() {
        let ts = parse_timestamp("01/12/2024", "14:22").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 12, 1, 14, 22, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_two_digit_year() {
        let ts = parse_timestamp("04/12/23", "11:12").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2023, 12, 4, 11, 12, 0).unwrap());
    }

    #[test]
    fn test_two_digit_year_century_pivot() {
        let ts = parse_timestamp("01/01/69", "10:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(1969, 1, 1, 10, 0, 0).unwrap());

        let ts = parse_timestamp("01/01/68", "10:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2068, 1, 1, 10, 0, 0).unwrap());

        assert_eq!(parse_timestamp("31/12/99", "23:59").unwrap().year(), 1999);
        assert_eq!(parse_timestamp("01/01/00", "00:00").unwrap().year(), 2000);
        assert_eq!(parse_timestamp("01/01/69", "10:00:05").unwrap().year(), 1969);
    }

    #[test]
    fn test_parse_timestamp_with_seconds() {
        let ts = parse_timestamp("04/12/2023", "11:12:30").unwrap();
        assert_eq!(ts.second(), 30);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("31/02/2024", "10:00").is_none());
        assert!(parse_timestamp("01/13/2024", "10:00").is_none());
        assert!(parse_timestamp("01/12/202", "10:00").is_none());
        assert!(parse_timestamp("01/12/2024", "25:00").is_none());
        assert!(parse_timestamp("01/12/+1", "10:00").is_none());
        assert!(parse_timestamp("01/12/20245", "10:00").is_none());
    }
}
