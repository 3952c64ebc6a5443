//! Ordering of ranked results.

use crate::common::{assert_ranked, device_fleet, ids, make_device};
use fieldrank::{search, search_default, Record, SearchOptions};

#[test]
fn test_ties_keep_input_order() {
    let records = vec![
        make_device("c", "Gateway"),
        make_device("a", "Gateway"),
        make_device("b", "Gateway"),
    ];
    let results = search_default("gateway", &records);

    assert_eq!(ids(&results), vec!["c", "a", "b"]);
    assert!(results.iter().all(|r| r.score == 100));
    let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_scores_never_increase_down_the_list() {
    let records = device_fleet();
    let results = search_default("DEV-00", &records);

    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_ranked(&results, 0);
}

#[test]
fn test_prefix_tie_broken_by_index() {
    let records = device_fleet();
    let results = search_default("DEV-00", &records);

    // DEV-001 and DEV-002 are prefix hits, DEV-100 is only fuzzy
    assert_eq!(ids(&results), vec!["1", "2", "3"]);
    assert_eq!(results[0].score, 80);
    assert_eq!(results[1].score, 80);
    assert!(results[2].score < 60);
}

#[test]
fn test_min_score_is_inclusive() {
    let records = vec![
        Record::new().with("id", "p").with("name", "Lobby East"),
        Record::new().with("id", "c").with("name", "Main Lobby"),
    ];

    let at_prefix = search("lobby", &records, &SearchOptions::new().with_min_score(80));
    assert_eq!(ids(&at_prefix), vec!["p"]);

    let above_prefix = search("lobby", &records, &SearchOptions::new().with_min_score(81));
    assert!(above_prefix.is_empty());
}

#[test]
fn test_results_point_at_caller_records() {
    let records = device_fleet();
    let results = search_default("DEV-002", &records);

    let top = &results[0];
    assert!(std::ptr::eq(top.item, &records[top.index]));
}
