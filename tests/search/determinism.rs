//! Same input, same output: across runs, threads, and record types.

use std::collections::BTreeMap;

use crate::common::{facility, synthetic_fleet};
use fieldrank::{search, search_default, SearchOptions};

#[test]
fn test_repeated_search_is_identical() {
    let records = facility();
    let first = search_default("lobby", &records);
    for _ in 0..10 {
        assert_eq!(search_default("lobby", &records), first);
    }
}

#[test]
#[cfg(feature = "parallel")]
fn test_parallel_matches_sequential() {
    let records = synthetic_fleet(2_000);
    let options = SearchOptions::new();

    for query in ["DEV-0042", "motion", "lobby", "dock", "camra", "Parkin", "zzz"] {
        let sequential = search(query, &records, &options);
        let parallel = fieldrank::search_parallel(query, &records, &options);
        assert_eq!(sequential, parallel, "query {:?}", query);
    }
}

#[test]
fn test_synthetic_fleet_ties_in_input_order() {
    let records = synthetic_fleet(50);
    let results = search_default("camera", &records);

    assert_eq!(results.len(), 10);
    let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted);
}

#[test]
fn test_plain_maps_rank_like_records() {
    let records = facility();
    let maps: Vec<BTreeMap<String, Option<String>>> = records
        .iter()
        .map(|r| serde_json::from_value(serde_json::to_value(r).unwrap()).unwrap())
        .collect();

    let options = SearchOptions::new().with_min_score(40);
    let from_records: Vec<(usize, u8)> = search("main lobby", &records, &options)
        .iter()
        .map(|r| (r.index, r.score))
        .collect();
    let from_maps: Vec<(usize, u8)> = search("main lobby", &maps, &options)
        .iter()
        .map(|r| (r.index, r.score))
        .collect();

    assert!(!from_records.is_empty());
    assert_eq!(from_records, from_maps);
}
