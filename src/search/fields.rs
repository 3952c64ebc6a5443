// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The field searcher: score every selected field of one record.

use crate::config::ScoringConfig;
use crate::scoring::score_with;
use crate::types::{FieldScore, FieldSelector, Searchable};

/// Best score across the selected fields, and every field that reached it.
///
/// Fields without a value are skipped. If nothing scores above zero the result
/// is `best = 0` with no matched fields.
///
/// ```
/// use fieldrank::{search_fields, FieldSelector, Record, ScoringConfig};
///
/// let record = Record::new().with("name", "Lobby").with("zone", "lobby");
/// let hit = search_fields("lobby", &record, &FieldSelector::All, &ScoringConfig::default());
///
/// assert_eq!(hit.best, 100);
/// assert_eq!(hit.matched_fields, vec!["name", "zone"]);
/// ```
pub fn search_fields<R: Searchable + ?Sized>(
    query: &str,
    record: &R,
    selector: &FieldSelector,
    config: &ScoringConfig,
) -> FieldScore {
    let scored: Vec<(&str, u8)> = selector
        .resolve(record)
        .into_iter()
        .map(|(name, value)| (name, score_with(query, value, config)))
        .collect();

    let best = scored.iter().map(|&(_, s)| s).max().unwrap_or(0);
    if best == 0 {
        return FieldScore::default();
    }

    let matched_fields = scored
        .into_iter()
        .filter(|&(_, s)| s == best)
        .map(|(name, _)| name.to_string())
        .collect();

    FieldScore {
        best,
        matched_fields,
    }
}
