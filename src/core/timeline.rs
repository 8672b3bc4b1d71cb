//! Match counts per calendar day.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::search::KeywordReport;

/// Key used for matches whose message has no timestamp.
pub const UNKNOWN_DATE: &str = "unknown";

/// Number of matches on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    /// `YYYY-MM-DD`, or [`UNKNOWN_DATE`]
    pub date: String,
    pub count: usize,
}

/// Counts matches per calendar day across all keywords.
///
/// A message matched by two keywords counts twice. Days are sorted
/// ascending; undated matches come last under [`UNKNOWN_DATE`].
///
/// # Example
///
/// ```rust
/// use chatsift::{parse, search::search};
/// use chatsift::core::timeline::matches_by_date;
///
/// let messages = parse([
///     "04/12/2023 11:12 - Ana: oi",
///     "05/12/2023 09:00 - Bia: oi oi",
///     "31/02/2023 10:00 - Ana: oi?",
/// ]);
/// let timeline = matches_by_date(&search(&messages, &["oi"], 0.0));
///
/// let days: Vec<_> = timeline.iter().map(|d| (d.date.as_str(), d.count)).collect();
/// assert_eq!(days, [("2023-12-04", 1), ("2023-12-05", 1), ("unknown", 1)]);
/// ```
pub fn matches_by_date(report: &[KeywordReport]) -> Vec<DateCount> {
    let mut days: BTreeMap<String, usize> = BTreeMap::new();

    for m in report.iter().flat_map(|entry| &entry.matches) {
        let key = m.timestamp.map_or_else(
            || UNKNOWN_DATE.to_string(),
            |ts| ts.date_naive().format("%Y-%m-%d").to_string(),
        );
        *days.entry(key).or_insert(0) += 1;
    }

    days.into_iter()
        .map(|(date, count)| DateCount { date, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MatchRecord;
    use chrono::{TimeZone, Utc};

    fn record(day: Option<u32>) -> MatchRecord {
        MatchRecord {
            id: 1,
            timestamp: day.map(|d| Utc.with_ymd_and_hms(2024, 1, d, 23, 59, 0).unwrap()),
            author: String::new(),
            excerpt: String::new(),
            score: 100,
        }
    }

    fn entry(keyword: &str, matches: Vec<MatchRecord>) -> KeywordReport {
        KeywordReport {
            keyword: keyword.into(),
            count: matches.len(),
            matches,
        }
    }

    #[test]
    fn test_counts_across_keywords() {
        let report = vec![
            entry("a", vec![record(Some(2)), record(None), record(Some(1))]),
            entry("b", vec![record(Some(2))]),
        ];
        let timeline = matches_by_date(&report);

        assert_eq!(
            timeline,
            vec![
                DateCount { date: "2024-01-01".into(), count: 1 },
                DateCount { date: "2024-01-02".into(), count: 2 },
                DateCount { date: UNKNOWN_DATE.into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_sum_equals_total_matches() {
        let report = vec![
            entry("a", vec![record(Some(3)), record(None)]),
            entry("b", vec![]),
            entry("c", vec![record(Some(3)), record(Some(4)), record(None)]),
        ];
        let total: usize = matches_by_date(&report).iter().map(|d| d.count).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_empty_report() {
        assert!(matches_by_date(&[]).is_empty());
    }
}
