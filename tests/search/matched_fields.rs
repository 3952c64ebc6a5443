//! Which fields get reported as the reason for a match.

use crate::common::{facility, make_sensor};
use fieldrank::{search, search_default, FieldSelector, Record, SearchOptions, Searchable};

#[test]
fn test_only_top_scoring_fields_reported() {
    let records = vec![Record::new()
        .with("id", "z")
        .with("name", "Main Lobby")
        .with("zone", "lobby")];
    let results = search_default("lobby", &records);

    assert_eq!(results[0].score, 100);
    assert_eq!(results[0].matched_fields, vec!["zone".to_string()]);
}

#[test]
fn test_all_fields_order_is_alphabetical_for_records() {
    let records = vec![make_sensor("s", "lobby", Some("Lobby"))];
    let results = search_default("lobby", &records);

    assert_eq!(results[0].matched_fields, vec!["type".to_string(), "zone".to_string()]);
}

#[test]
fn test_selected_fields_keep_selector_order() {
    let records = vec![make_sensor("s", "lobby", Some("Lobby"))];
    let opts = SearchOptions::new().with_fields(FieldSelector::only(["zone", "type", "zone"]));
    let results = search("lobby", &records, &opts);

    assert_eq!(results[0].matched_fields, vec!["zone".to_string(), "type".to_string()]);
}

#[test]
fn test_every_result_names_a_field() {
    let records = facility();
    for query in ["oslo", "dock", "dev", "motion", "berg", "securty"] {
        for result in search_default(query, &records) {
            assert!(result.score > 0);
            assert!(!result.matched_fields.is_empty(), "{:?} on {:?}", query, result.item);
            for field in &result.matched_fields {
                assert!(result.item.text_fields().iter().any(|(name, _)| name == field));
            }
        }
    }
}
