// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tier classification.
//!
//! Arbitrary query/text pairs and arbitrary tuning values must never panic,
//! and the fuzzy tier must never reach the contains tier.

#![no_main]

use arbitrary::Arbitrary;
use fieldrank::{
    classify_with, fuzzy_match, MatchTier, ScoringConfig, CONTAINS_SCORE, MAX_SCORE, PREFIX_SCORE,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ScoreInput {
    query: String,
    text: String,
    fuzzy_floor: f64,
    fuzzy_scale: f64,
    fuzzy_cap: u8,
    threshold: f64,
}

fuzz_target!(|input: ScoreInput| {
    let query: String = input.query.chars().take(48).collect();
    let text: String = input.text.chars().take(96).collect();

    let config = ScoringConfig::default()
        .with_fuzzy_floor(input.fuzzy_floor)
        .with_fuzzy_scale(input.fuzzy_scale)
        .with_fuzzy_cap(input.fuzzy_cap)
        .with_match_threshold(input.threshold);

    let tier = classify_with(&query, &text, &config);
    let score = tier.score();
    assert!(score <= MAX_SCORE);

    match tier {
        MatchTier::Fuzzy(s) => {
            assert!(s > 0 && s < CONTAINS_SCORE, "fuzzy score {} out of band", s);
            assert!(s <= config.fuzzy_cap);
        }
        MatchTier::Exact | MatchTier::Prefix | MatchTier::Contains => {
            assert!(fuzzy_match(&query, &text, input.threshold));
            assert!(score >= CONTAINS_SCORE);
        }
        MatchTier::None => assert_eq!(score, 0),
    }

    // Exact means equal after lower-casing, prefix means a real prefix
    if tier == MatchTier::Exact {
        assert_eq!(query.to_lowercase(), text.to_lowercase());
    }
    if score == PREFIX_SCORE {
        assert!(text.to_lowercase().starts_with(&query.to_lowercase()));
    }
});
