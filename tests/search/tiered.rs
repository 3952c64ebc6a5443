//! Tier behavior through the full search path.

use crate::common::{assert_ranked, facility, ids};
use fieldrank::{classify, search, search_default, FieldSelector, MatchTier, SearchOptions};

#[test]
fn test_exact_beats_prefix_beats_contains() {
    let records = vec![
        fieldrank::Record::new().with("id", "contains").with("name", "Main Lobby"),
        fieldrank::Record::new().with("id", "prefix").with("name", "Lobby East"),
        fieldrank::Record::new().with("id", "exact").with("name", "lobby"),
    ];
    let results = search_default("Lobby", &records);

    assert_eq!(ids(&results), vec!["exact", "prefix", "contains"]);
    let scores: Vec<u8> = results.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![100, 80, 60]);
}

#[test]
fn test_fuzzy_results_rank_below_substring_hits() {
    let records = vec![
        fieldrank::Record::new().with("id", "typo").with("name", "Loading Dok"),
        fieldrank::Record::new().with("id", "substring").with("name", "North Loading Dock"),
    ];
    let results = search_default("Loading Dock", &records);

    assert_eq!(ids(&results), vec!["substring", "typo"]);
    assert_eq!(results[0].score, 60);
    assert!(results[1].score > 0 && results[1].score < 60);
}

#[test]
fn test_typo_still_finds_sensor() {
    let records = facility();
    let results = search_default("moton", &records);

    assert!(!results.is_empty());
    assert_eq!(results[0].item.id(), Some("sensor-1"));
    assert!(matches!(classify("moton", "motion"), MatchTier::Fuzzy(_)));
    assert_ranked(&results, 0);
}

#[test]
fn test_min_score_cuts_fuzzy_tier() {
    let records = facility();
    let opts = SearchOptions::new().with_min_score(60);
    let results = search("moton", &records, &opts);

    assert!(results.is_empty());
}

#[test]
fn test_restricting_fields_changes_matches() {
    let records = facility();

    let everywhere = search_default("Headquarters", &records);
    assert_eq!(ids(&everywhere), vec!["site-1", "zone-1"]);

    let names_only = search(
        "Headquarters",
        &records,
        &SearchOptions::new().with_fields(FieldSelector::only(["name"])),
    );
    assert_eq!(ids(&names_only), vec!["site-1"]);
}
