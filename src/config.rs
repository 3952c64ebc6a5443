// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Every knob has a default and a valid range. Nothing here ever fails on a
//! bad number: out-of-range values are pulled to the nearest bound and NaN
//! falls back to the default. The engine must not crash on caller input, and
//! a typo in a config file is caller input too.

use serde::{Deserialize, Deserializer, Serialize};

use crate::scoring::{CONTAINS_SCORE, DEFAULT_FUZZY_FLOOR, FUZZY_CAP, FUZZY_SCALE, MAX_SCORE};
use crate::types::FieldSelector;

/// Default threshold for the boolean [`fuzzy_match`](crate::fuzzy_match) predicate.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Tuning constants for the fuzzy tier.
///
/// Downstream ranking depends on the exact values, so they are data rather
/// than a formula baked into the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Similarity below this collapses to score 0. Range `[0, 1]`.
    pub fuzzy_floor: f64,
    /// Multiplier applied to similarity before rounding. Range `[0, 60]`.
    pub fuzzy_scale: f64,
    /// Highest score the fuzzy tier may produce. Range `[0, 59]`.
    #[serde(deserialize_with = "lenient_score")]
    pub fuzzy_cap: u8,
    /// Threshold for the boolean predicate. Range `(0, 1]`.
    pub match_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fuzzy_floor: DEFAULT_FUZZY_FLOOR,
            fuzzy_scale: FUZZY_SCALE,
            fuzzy_cap: FUZZY_CAP,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl ScoringConfig {
    pub fn with_fuzzy_floor(mut self, floor: f64) -> Self {
        self.fuzzy_floor = clamp_unit(floor, DEFAULT_FUZZY_FLOOR);
        self
    }

    pub fn with_fuzzy_scale(mut self, scale: f64) -> Self {
        self.fuzzy_scale = if scale.is_nan() {
            FUZZY_SCALE
        } else {
            scale.clamp(0.0, f64::from(CONTAINS_SCORE))
        };
        self
    }

    pub fn with_fuzzy_cap(mut self, cap: u8) -> Self {
        self.fuzzy_cap = cap.min(FUZZY_CAP);
        self
    }

    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = clamp_threshold(threshold);
        self
    }

    /// Pull every field back into range. The classifier calls this on every
    /// config it is handed, so struct literals get the same clamping.
    pub fn normalized(self) -> Self {
        Self::default()
            .with_fuzzy_floor(self.fuzzy_floor)
            .with_fuzzy_scale(self.fuzzy_scale)
            .with_fuzzy_cap(self.fuzzy_cap)
            .with_match_threshold(self.match_threshold)
    }
}

/// Options for [`search`](crate::search).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub fields: FieldSelector,
    /// Inclusive lower bound on result scores. Range `[0, 100]`.
    #[serde(deserialize_with = "lenient_score")]
    pub min_score: u8,
    pub scoring: ScoringConfig,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(mut self, fields: FieldSelector) -> Self {
        self.fields = fields;
        self
    }

    /// Accepts any integer; anything outside `[0, 100]` is clamped.
    pub fn with_min_score(mut self, min_score: i64) -> Self {
        self.min_score = min_score.clamp(0, i64::from(MAX_SCORE)) as u8;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring.normalized();
        self
    }

    /// Clamp `min_score` and the scoring config. Applied by every search entry
    /// point.
    pub fn normalized(self) -> Self {
        let min_score = i64::from(self.min_score);
        Self {
            fields: self.fields,
            min_score: 0,
            scoring: self.scoring.normalized(),
        }
        .with_min_score(min_score)
    }

    /// Parse options from JSON, then clamp. Unknown keys are ignored.
    ///
    /// ```
    /// use fieldrank::SearchOptions;
    ///
    /// let json = r#"{"minScore": 60, "fields": {"only": ["name"]}}"#;
    /// let opts = SearchOptions::from_json_str(json).unwrap();
    /// assert_eq!(opts.min_score, 60);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::normalized)
    }
}

/// Accept any JSON number for a score and clamp it into `[0, 100]`.
fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    Ok(if raw.is_nan() {
        0
    } else {
        raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
    })
}

fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// `(0, 1]`: zero is not a usable threshold, so it moves to the smallest
/// positive value instead.
pub(crate) fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_MATCH_THRESHOLD
    } else if threshold <= 0.0 {
        f64::EPSILON
    } else {
        threshold.min(1.0)
    }
}
