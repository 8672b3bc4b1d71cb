//! Edge case tests for parsing, search and report loading.

use chatsift::config::HighlightConfig;
use chatsift::core::output::report_from_json;
use chatsift::prelude::*;
use chatsift::search::{excerpt, highlight_with};
use chrono::{TimeZone, Utc};

fn parse_one(line: &str) -> Message {
    let messages = TranscriptParser::new().parse_str(line);
    assert_eq!(messages.len(), 1, "expected one message from {line:?}");
    messages.into_iter().next().unwrap()
}

// =========================================================================
// Header recognition
// =========================================================================

#[test]
fn test_two_digit_year() {
    let msg = parse_one("04/12/23 11:12 - Ana: oi");
    assert_eq!(
        msg.timestamp,
        Some(Utc.with_ymd_and_hms(2023, 12, 4, 11, 12, 0).unwrap())
    );
}

#[test]
fn test_two_digit_year_before_2000() {
    let msg = parse_one("01/01/69 10:00 - Ana: oi");
    assert_eq!(
        msg.timestamp,
        Some(Utc.with_ymd_and_hms(1969, 1, 1, 10, 0, 0).unwrap())
    );

    let msg = parse_one("01/01/68, 10:00 - Ana: oi");
    assert_eq!(
        msg.timestamp,
        Some(Utc.with_ymd_and_hms(2068, 1, 1, 10, 0, 0).unwrap())
    );
}

#[test]
fn test_single_digit_fields() {
    let msg = parse_one("4/1/2024, 9:05 - Ana: oi");
    assert_eq!(
        msg.timestamp,
        Some(Utc.with_ymd_and_hms(2024, 1, 4, 9, 5, 0).unwrap())
    );
}

#[test]
fn test_author_stops_at_first_colon() {
    let msg = parse_one("04/12/2023 11:12 - Dr. Who: The Doctor: hi");
    assert_eq!(msg.author, "Dr. Who");
    assert_eq!(msg.text, "The Doctor: hi");
}

#[test]
fn test_author_and_text_trimmed() {
    let msg = parse_one("04/12/2023 11:12 -   Ana  :    oi   ");
    assert_eq!(msg.author, "Ana");
    assert_eq!(msg.text, "oi");
}

#[test]
fn test_empty_text_after_colon() {
    let msg = parse_one("04/12/2023 11:12 - Ana:");
    assert_eq!(msg.author, "Ana");
    assert_eq!(msg.text, "");
}

#[test]
fn test_system_line_without_author_is_continuation() {
    let messages = TranscriptParser::new().parse_str(
        "04/12/2023 11:12 - Ana: oi\n04/12/2023 11:13 - Messages were deleted",
    );
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "oi\n04/12/2023 11:13 - Messages were deleted");
}

#[test]
fn test_other_export_styles_are_continuations() {
    let messages = TranscriptParser::new().parse_str(
        "04/12/2023 11:12 - Ana: oi\n\
         [15.01.24, 10:30:45] Alice: bracketed\n\
         2024-01-15 10:30 - Bob: iso date\n\
         04/12/2023 11:12:30 - Eve: seconds",
    );
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text.lines().count(), 4);
}

#[test]
fn test_impossible_dates_still_open_messages() {
    let messages = TranscriptParser::new().parse_str(
        "12/31/2024 10:00 - Dan: month first\n\
         31/02/2024 10:00 - Eve: february\n\
         1/1/202 10:00 - Fay: three digit year",
    );
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|m| m.timestamp.is_none()));
    let authors: Vec<&str> = messages.iter().map(|m| m.author.as_str()).collect();
    assert_eq!(authors, ["Dan", "Eve", "Fay"]);
}

// =========================================================================
// Line handling
// =========================================================================

#[test]
fn test_empty_input() {
    assert!(TranscriptParser::new().parse_str("").is_empty());
    assert!(TranscriptParser::new().parse_str("\n\n   \n").is_empty());
    assert!(parse(Vec::<String>::new()).is_empty());
}

#[test]
fn test_orphan_preamble() {
    let messages = TranscriptParser::new().parse_str(
        "preamble one\npreamble two\n04/12/2023 11:12 - Ana: oi",
    );
    assert_eq!(messages.len(), 2);
    assert!(messages[0].is_orphan());
    assert_eq!(messages[0].text, "preamble one\npreamble two");
    assert_eq!(messages[1].id, 2);
}

#[test]
fn test_continuation_kept_verbatim() {
    let messages = TranscriptParser::new().parse_str("04/12/2023 11:12 - Ana: oi\n   indented  ");
    assert_eq!(messages[0].text, "oi\n   indented  ");
}

#[test]
fn test_blank_lines_between_continuations_dropped() {
    let messages = TranscriptParser::new().parse_str("04/12/2023 11:12 - Ana: a\n\nb\n\t\nc");
    assert_eq!(messages[0].text, "a\nb\nc");
}

#[test]
fn test_leading_bom_stripped() {
    let msg = parse_one("\u{feff}04/12/2023 11:12 - Ana: oi");
    assert_eq!(msg.author, "Ana");
    assert!(!msg.is_orphan());
}

#[test]
fn test_crlf_line_endings() {
    let messages =
        TranscriptParser::new().parse_str("04/12/2023 11:12 - Ana: oi\r\ntudo\r\n04/12/2023 11:13 - Bob: ok\r\n");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "oi\ntudo");
    assert_eq!(messages[1].text, "ok");
}

#[test]
fn test_classic_mac_line_endings() {
    let input = "04/12/2023 11:12 - Ana: oi\rtudo\r04/12/2023 11:13 - Bob: ok\r";
    let parser = TranscriptParser::new();
    let messages = parser.parse_str(input);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "oi\ntudo");
    assert_eq!(messages[1].text, "ok");

    let streamed: Vec<Message> = parser
        .stream(input.as_bytes())
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(streamed, messages);
}

#[test]
fn test_unicode_line_separators_split_lines() {
    let input = "04/12/2023 11:12 - Ana: oi\u{2028}04/12/2023 11:13 - Bob: ok\u{2029}fim\u{85}!";
    let parser = TranscriptParser::new();
    let messages = parser.parse_str(input);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "oi");
    assert_eq!(messages[1].text, "ok\nfim\n!");

    let streamed: Vec<Message> = parser
        .stream(input.as_bytes())
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(streamed, messages);
}

#[test]
fn test_invalid_utf8_replaced() {
    let messages = TranscriptParser::new().parse_bytes(b"04/12/2023 11:12 - Ana: ol\xff\n");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "ol\u{FFFD}");
}

#[test]
fn test_unicode_authors_and_text() {
    let msg = parse_one("04/12/2023 11:12 - 村上 🔥: Привет 😂");
    assert_eq!(msg.author, "村上 🔥");
    assert_eq!(msg.text, "Привет 😂");
}

// =========================================================================
// Search
// =========================================================================

#[test]
fn test_duplicate_keywords_reported_twice() {
    let messages = parse(["04/12/2023 11:12 - Ana: oi"]);
    let report = search(&messages, &["oi", "oi"], 0.0);
    assert_eq!(report.len(), 2);
    assert_eq!(report[0], report[1]);
}

#[test]
fn test_metacharacters_are_literal() {
    let messages = parse([
        "04/12/2023 11:12 - Ana: I write C++",
        "04/12/2023 11:13 - Bob: I write C",
        "04/12/2023 11:14 - Ana: (ok) $5.00?",
    ]);
    let report = search(&messages, &["c++", "(ok)", "$5.00?", "a.b"], 0.0);
    let counts: Vec<usize> = report.iter().map(|r| r.count).collect();
    assert_eq!(counts, [1, 1, 1, 0]);
}

#[test]
fn test_no_word_boundaries() {
    let messages = parse(["04/12/2023 11:12 - Ana: what a party"]);
    assert_eq!(search(&messages, &["art"], 0.0)[0].count, 1);
}

#[test]
fn test_search_matches_text_not_author() {
    let messages = parse(["04/12/2023 11:12 - Boleto Man: oi"]);
    assert_eq!(search(&messages, &["boleto"], 0.0)[0].count, 0);
}

#[test]
fn test_search_empty_inputs() {
    let report = search(&[], &["oi"], 0.8);
    assert_eq!(report[0].count, 0);
    assert!(search(&parse(["04/12/2023 11:12 - Ana: oi"]), &[] as &[&str], 0.0).is_empty());
}

#[test]
fn test_threshold_one_accepts_only_exact() {
    let messages = parse([
        "04/12/2023 11:12 - Ana: tomorrow",
        "04/12/2023 11:13 - Ana: tomorow",
    ]);
    let report = search(&messages, &["tomorrow"], 1.0);
    assert_eq!(report[0].count, 1);
    assert!(report[0].matches[0].is_exact());
}

#[test]
fn test_invalid_threshold_rejected() {
    for bad in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
        let err = SearchConfig::new().with_fuzzy_threshold(bad).unwrap_err();
        assert!(err.is_invalid_threshold(), "{bad} should be rejected");
    }
    assert!(!SearchConfig::new().with_fuzzy_threshold(0.0).unwrap().is_fuzzy());
}

#[test]
fn test_excerpt_context_zero() {
    assert_eq!(excerpt("hello world foo", "world", 0), "...world...");
}

#[test]
fn test_excerpt_at_text_edges() {
    assert_eq!(excerpt("world foo", "world", 2), "world f...");
    assert_eq!(excerpt("foo world", "world", 2), "...o world");
}

#[test]
fn test_excerpt_multibyte() {
    assert_eq!(excerpt("ação é ótima", "é", 2), "...o é ó...");
}

// =========================================================================
// Highlighting
// =========================================================================

#[test]
fn test_later_keyword_matches_inside_markers() {
    let messages = vec![Message::new(1, "Ana", "hello")];
    let lines = highlight(&messages, &["hello", "mark"]);
    assert_eq!(
        lines[0].html,
        "<<mark>mark</mark>><mark>hello</mark></<mark>mark</mark>>"
    );
}

#[test]
fn test_overlapping_keywords_nest() {
    let messages = vec![Message::new(1, "Ana", "boleto")];
    let lines = highlight(&messages, &["boleto", "bol"]);
    assert_eq!(lines[0].html, "<mark><mark>bol</mark>eto</mark>");
}

#[test]
fn test_highlight_preserves_case_and_html() {
    let messages = vec![Message::new(1, "Ana", "<b>OI</b>")];
    let lines = highlight(&messages, &["oi"]);
    assert_eq!(lines[0].html, "<b><mark>OI</mark></b>");
}

#[test]
fn test_custom_markers() {
    let config = HighlightConfig::new()
        .with_markers("**", "**")
        .with_line_break(" / ");
    let messages = vec![Message::new(1, "Ana", "oi\ntudo bem")];
    let lines = highlight_with(&messages, &["bem"], &config);
    assert_eq!(lines[0].html, "oi / tudo **bem**");
}

// =========================================================================
// Report loading
// =========================================================================

#[test]
fn test_report_from_json_legacy_fields() {
    let payload = r#"[{"word": "oi", "count": 1, "matches": [
        {"id": 1, "date": "2023-12-04T11:12:00Z", "author": "Ana",
         "text_excerpt": "oi", "score": 87.6}
    ]}]"#;
    let report = report_from_json(payload).unwrap();
    let m = &report[0].matches[0];
    assert_eq!(report[0].keyword, "oi");
    assert_eq!(m.excerpt, "oi");
    assert_eq!(m.score, 88);
    assert_eq!(
        m.timestamp,
        Some(Utc.with_ymd_and_hms(2023, 12, 4, 11, 12, 0).unwrap())
    );
}

#[test]
fn test_report_from_json_null_timestamp() {
    let payload = r#"[{"keyword": "oi", "count": 1, "matches": [
        {"id": 1, "timestamp": null, "author": "", "excerpt": "oi", "score": 100}
    ]}]"#;
    let report = report_from_json(payload).unwrap();
    assert!(report[0].matches[0].timestamp.is_none());
}

#[test]
fn test_report_from_json_errors() {
    assert!(report_from_json("42").unwrap_err().is_invalid_format());
    assert!(report_from_json(r#""report""#).unwrap_err().is_invalid_format());
    assert!(report_from_json("{}").unwrap_err().is_missing());
    assert!(matches!(
        report_from_json("not json").unwrap_err(),
        ChatsiftError::Json(_)
    ));
}

#[test]
fn test_report_from_json_score_out_of_range() {
    let payload = r#"[{"keyword": "oi", "count": 1, "matches": [
        {"id": 1, "excerpt": "oi", "score": 150}
    ]}]"#;
    assert!(report_from_json(payload).is_err());
}

#[test]
fn test_report_from_json_empty_array() {
    assert!(report_from_json("[]").unwrap().is_empty());
}
