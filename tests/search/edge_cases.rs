//! Inputs at the edges: blank queries, empty data, odd option values.

use crate::common::{device_fleet, facility, make_sensor};
use fieldrank::{
    score_with, search, search_default, FieldSelector, Record, ScoringConfig, SearchOptions,
};

#[test]
fn test_blank_query_returns_nothing() {
    let records = facility();
    assert!(search_default("", &records).is_empty());
    assert!(search_default("   ", &records).is_empty());
    assert!(search_default("\t\n", &records).is_empty());
}

#[test]
fn test_empty_record_list() {
    let records: Vec<Record> = Vec::new();
    assert!(search_default("motion", &records).is_empty());
}

#[test]
fn test_record_without_fields_never_matches() {
    let records = vec![Record::new(), Record::new().without("name")];
    assert!(search_default("anything", &records).is_empty());
}

#[test]
fn test_absent_selected_field_is_skipped() {
    let records = vec![make_sensor("1", "door", None)];
    let opts = SearchOptions::new().with_fields(FieldSelector::only(["zone"]));

    assert!(search("door", &records, &opts).is_empty());
}

#[test]
fn test_unknown_selected_field_is_not_an_error() {
    let records = device_fleet();
    let opts = SearchOptions::new().with_fields(FieldSelector::only(["serial", "deviceId"]));
    let results = search("DEV-001", &records, &opts);

    assert_eq!(results[0].item.id(), Some("1"));
    assert_eq!(results[0].matched_fields, vec!["deviceId".to_string()]);
}

#[test]
fn test_empty_selector_matches_nothing() {
    let records = device_fleet();
    let opts = SearchOptions::new().with_fields(FieldSelector::Only(Vec::new()));
    assert!(search("DEV-001", &records, &opts).is_empty());
}

#[test]
fn test_min_score_is_clamped() {
    let records = device_fleet();

    let negative = search("DEV-001", &records, &SearchOptions::new().with_min_score(-40));
    assert_eq!(negative.len(), search_default("DEV-001", &records).len());

    let huge = search("DEV-001", &records, &SearchOptions::new().with_min_score(1_000));
    assert_eq!(huge.len(), 1);
    assert_eq!(huge[0].score, 100);
}

#[test]
fn test_struct_literal_options_are_clamped() {
    let records = device_fleet();
    let opts = SearchOptions {
        min_score: 250,
        ..SearchOptions::default()
    };
    let results = search("DEV-001", &records, &opts);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id(), Some("1"));
}

#[test]
fn test_struct_literal_scoring_is_clamped() {
    let nan_floor = ScoringConfig {
        fuzzy_floor: f64::NAN,
        ..ScoringConfig::default()
    };
    let huge_scale = ScoringConfig {
        fuzzy_scale: 1e9,
        ..ScoringConfig::default()
    };

    assert_eq!(score_with("motoin", "motion", &nan_floor), 40);
    assert_eq!(score_with("motoin", "motion", &huge_scale), 40);
}

#[test]
fn test_query_is_not_trimmed_for_matching() {
    let records = vec![Record::new().with("id", "1").with("name", "Main Lobby")];

    // " lobby" is a substring of "main lobby", but "lobby " is not
    let leading = search_default(" lobby", &records);
    assert_eq!(leading[0].score, 60);

    let trailing = search_default("lobby ", &records);
    assert!(trailing.is_empty() || trailing[0].score < 60);
}

#[test]
fn test_unicode_fields() {
    let records = vec![
        Record::new().with("id", "1").with("name", "Tromsø Kontor"),
        Record::new().with("id", "2").with("name", "Ålesund"),
    ];

    let results = search_default("TROMSØ", &records);
    assert_eq!(results[0].item.id(), Some("1"));
    assert_eq!(results[0].score, 80);

    let results = search_default("ålesund", &records);
    assert_eq!(results[0].item.id(), Some("2"));
    assert_eq!(results[0].score, 100);
}
