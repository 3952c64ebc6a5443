// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for JSON option and record parsing.
//!
//! Malformed input must come back as an error, never a panic, and anything
//! that parses must land inside the documented ranges.

#![no_main]

use fieldrank::{records_from_json, SearchOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(options) = SearchOptions::from_json_str(json) {
        assert!(options.min_score <= 100);
        let scoring = options.scoring;
        assert!((0.0..=1.0).contains(&scoring.fuzzy_floor));
        assert!((0.0..=60.0).contains(&scoring.fuzzy_scale));
        assert!(scoring.fuzzy_cap <= 59);
        assert!(scoring.match_threshold > 0.0 && scoring.match_threshold <= 1.0);
    }

    let _ = records_from_json(json);
});
