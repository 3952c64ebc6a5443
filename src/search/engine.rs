// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranked search engine.
//!
//! One pass over the records, one sort. Nothing is cached between calls: every
//! search recomputes every score, which keeps the engine stateless and safe to
//! call from any number of threads at once.
//!
//! ## Parallel search
//!
//! With the `parallel` feature, [`search_parallel`] scores records on the rayon
//! pool. Each record keeps its input index through the parallel stage and the
//! final sort uses `(score desc, index asc)`, so the output is identical to
//! [`search`] for every input.

use crate::config::SearchOptions;
use crate::contracts::check_ranked_contract;
use crate::scoring::ranking::rank;
use crate::search::fields::search_fields;
use crate::types::{MatchResult, Searchable};
use crate::utils::is_blank;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rank `records` against `query`.
///
/// - Blank query (empty or whitespace) returns `[]` without scoring anything.
/// - Records that match no field at all (score 0) are dropped, as are records
///   scoring below `options.min_score`.
/// - Survivors are sorted by score, highest first; ties keep input order.
/// - Options are clamped into range first, so a struct literal with
///   `min_score: 250` behaves like `min_score: 100`.
///
/// ```
/// use fieldrank::{search, Record, SearchOptions};
///
/// let records = vec![
///     Record::new().with("id", "1").with("deviceId", "DEV-001"),
///     Record::new().with("id", "2").with("deviceId", "DEV-002"),
/// ];
/// let results = search("DEV-001", &records, &SearchOptions::default());
///
/// assert_eq!(results[0].item.id(), Some("1"));
/// assert_eq!(results[0].score, 100);
/// ```
pub fn search<'a, R: Searchable>(
    query: &str,
    records: &'a [R],
    options: &SearchOptions,
) -> Vec<MatchResult<'a, R>> {
    if is_blank(query) {
        return Vec::new();
    }
    let options = options.clone().normalized();

    let mut results: Vec<MatchResult<'a, R>> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| score_record(query, index, record, &options))
        .collect();

    rank(&mut results);
    finish(query, records.len(), &options, results)
}

/// [`search`] with default options: all fields, no minimum score.
pub fn search_default<'a, R: Searchable>(query: &str, records: &'a [R]) -> Vec<MatchResult<'a, R>> {
    search(query, records, &SearchOptions::default())
}

/// [`search`] with per-record scoring spread over the rayon pool.
///
/// Output is identical to [`search`]; only the wall clock differs.
#[cfg(feature = "parallel")]
pub fn search_parallel<'a, R: Searchable + Sync>(
    query: &str,
    records: &'a [R],
    options: &SearchOptions,
) -> Vec<MatchResult<'a, R>> {
    if is_blank(query) {
        return Vec::new();
    }
    let options = options.clone().normalized();

    let mut results: Vec<MatchResult<'a, R>> = records
        .par_iter()
        .enumerate()
        .filter_map(|(index, record)| score_record(query, index, record, &options))
        .collect();

    crate::scoring::ranking::par_rank(&mut results);
    finish(query, records.len(), &options, results)
}

fn score_record<'a, R: Searchable>(
    query: &str,
    index: usize,
    record: &'a R,
    options: &SearchOptions,
) -> Option<MatchResult<'a, R>> {
    let hit = search_fields(query, record, &options.fields, &options.scoring);
    if hit.best == 0 || hit.best < options.min_score {
        return None;
    }

    Some(MatchResult {
        item: record,
        index,
        score: hit.best,
        matched_fields: hit.matched_fields,
    })
}

fn finish<'a, R>(
    query: &str,
    candidates: usize,
    options: &SearchOptions,
    results: Vec<MatchResult<'a, R>>,
) -> Vec<MatchResult<'a, R>> {
    check_ranked_contract(&results, options.min_score);
    tracing::debug!(
        query_len = query.chars().count(),
        candidates,
        matched = results.len(),
        min_score = options.min_score,
        "ranked search complete"
    );
    results
}
