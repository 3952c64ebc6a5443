// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the ranked search engine.
//!
//! Arbitrary records, queries and options. The result list must always be
//! sorted, respect the minimum score, and name the fields that matched.

#![no_main]

use arbitrary::Arbitrary;
use fieldrank::{check_ranked, search, FieldSelector, Record, SearchOptions, Searchable};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    records: Vec<Vec<(String, Option<String>)>>,
    fields: Option<Vec<String>>,
    min_score: i64,
}

fuzz_target!(|input: SearchInput| {
    if input.records.len() > 64 {
        return;
    }

    let query: String = input.query.chars().take(32).collect();
    let records: Vec<Record> = input
        .records
        .into_iter()
        .map(|fields| {
            fields
                .into_iter()
                .take(8)
                .map(|(name, value)| (name, value.map(|v| v.chars().take(64).collect::<String>())))
                .collect()
        })
        .collect();

    let selector = match input.fields {
        Some(names) => FieldSelector::Only(names),
        None => FieldSelector::All,
    };
    let options = SearchOptions::new()
        .with_fields(selector)
        .with_min_score(input.min_score);

    let results = search(&query, &records, &options);

    if let Err(err) = check_ranked(&results, options.min_score) {
        panic!("invalid ranked list: {}", err);
    }

    for result in &results {
        assert!(std::ptr::eq(result.item, &records[result.index]));
        for field in &result.matched_fields {
            assert!(result.item.field(field).is_some(), "matched field {:?} has no value", field);
        }
    }

    if query.trim().is_empty() {
        assert!(results.is_empty());
    }
});
