// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match classifier: one (query, text) pair in, one score out.
//!
//! Tiers are checked in precedence order and the first hit wins:
//!
//! | Tier     | Score   | Condition (case-insensitive)          |
//! |----------|---------|---------------------------------------|
//! | Exact    | 100     | `text == query`                       |
//! | Prefix   | 80      | `text` starts with `query`            |
//! | Contains | 60      | `text` contains `query`               |
//! | Fuzzy    | 1..=59  | `round(similarity * 60)`, floor 0.6   |
//! | None     | 0       | empty input, or similarity below floor|
//!
//! # Key Invariant: Tier Dominance
//!
//! Every fuzzy score is strictly below the contains tier, so a substring hit
//! always beats a near-miss. The fuzzy tier only runs when the first three missed,
//! which means similarity is already below 1.0; the cap at 59 covers the
//! rounding of values like 0.995.
//!
//! # Constants (downstream ranking depends on these exact values)
//!
//! | Constant              | Value |
//! |-----------------------|-------|
//! | `EXACT_SCORE`         | 100   |
//! | `PREFIX_SCORE`        | 80    |
//! | `CONTAINS_SCORE`      | 60    |
//! | `FUZZY_SCALE`         | 60.0  |
//! | `FUZZY_CAP`           | 59    |
//! | `DEFAULT_FUZZY_FLOOR` | 0.6   |

use std::fmt;

use crate::config::{clamp_threshold, ScoringConfig};
use crate::fuzzy::{levenshtein_within, max_distance_for, similarity_folded};
use crate::utils::fold;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Highest possible score.
pub const MAX_SCORE: u8 = 100;

/// Case-insensitive equality.
pub const EXACT_SCORE: u8 = 100;

/// Text starts with the query.
pub const PREFIX_SCORE: u8 = 80;

/// Text contains the query somewhere after the start.
pub const CONTAINS_SCORE: u8 = 60;

/// Similarity is multiplied by this before rounding.
pub const FUZZY_SCALE: f64 = 60.0;

/// Ceiling for fuzzy scores, one below the contains tier.
pub const FUZZY_CAP: u8 = 59;

/// Similarity below this is not a match at all.
pub const DEFAULT_FUZZY_FLOOR: f64 = 0.6;

/// Which tier a (query, text) pair landed in.
///
/// Ordered from best to worst, so `Exact < Prefix` under `Ord`. Fuzzy carries
/// its score; two fuzzy tiers compare by score, higher first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Prefix,
    Contains,
    Fuzzy(u8),
    None,
}

impl MatchTier {
    pub fn score(self) -> u8 {
        match self {
            MatchTier::Exact => EXACT_SCORE,
            MatchTier::Prefix => PREFIX_SCORE,
            MatchTier::Contains => CONTAINS_SCORE,
            MatchTier::Fuzzy(score) => score,
            MatchTier::None => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::Contains => "contains",
            MatchTier::Fuzzy(_) => "fuzzy",
            MatchTier::None => "none",
        }
    }

    pub fn is_match(self) -> bool {
        self.score() > 0
    }

    fn rank(self) -> u8 {
        match self {
            MatchTier::Exact => 0,
            MatchTier::Prefix => 1,
            MatchTier::Contains => 2,
            MatchTier::Fuzzy(_) => 3,
            MatchTier::None => 4,
        }
    }
}

impl PartialOrd for MatchTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MatchTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| other.score().cmp(&self.score()))
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Fuzzy(score) => write!(f, "fuzzy({})", score),
            other => f.write_str(other.label()),
        }
    }
}

/// Classify with the default tuning constants.
pub fn classify(query: &str, text: &str) -> MatchTier {
    classify_with(query, text, &ScoringConfig::default())
}

/// Classify a (query, text) pair. See the module table for the rules.
pub fn classify_with(query: &str, text: &str, config: &ScoringConfig) -> MatchTier {
    if query.is_empty() || text.is_empty() {
        return MatchTier::None;
    }
    let config = config.normalized();

    let q = fold(query);
    let t = fold(text);

    if t == q {
        return MatchTier::Exact;
    }
    if t.starts_with(&q) {
        return MatchTier::Prefix;
    }
    if t.contains(&q) {
        return MatchTier::Contains;
    }

    let q_chars: Vec<char> = q.chars().collect();
    let t_chars: Vec<char> = t.chars().collect();
    let max_len = q_chars.len().max(t_chars.len());

    // Cheap rejection before the full DP: the floor implies an edit budget.
    let budget = max_distance_for(config.fuzzy_floor, max_len);
    if !levenshtein_within(&q, &t, budget) {
        return MatchTier::None;
    }

    let sim = similarity_folded(&q_chars, &t_chars);
    if sim < config.fuzzy_floor {
        return MatchTier::None;
    }

    let score = fuzzy_score(sim, &config);
    tracing::trace!(query, text, similarity = sim, score, "fuzzy tier");
    if score == 0 {
        MatchTier::None
    } else {
        MatchTier::Fuzzy(score)
    }
}

/// `round(similarity * scale)`, held strictly below the contains tier.
///
/// Rounds half away from zero, so 0.675 * 60 = 40.5 scores 41.
pub fn fuzzy_score(similarity: f64, config: &ScoringConfig) -> u8 {
    let config = config.normalized();
    let similarity = if similarity.is_nan() { 0.0 } else { similarity.clamp(0.0, 1.0) };
    let raw = (similarity * config.fuzzy_scale).round();
    (raw as u8).min(config.fuzzy_cap).min(FUZZY_CAP)
}

/// Score a (query, text) pair in `[0, 100]` with the default constants.
///
/// ```
/// use fieldrank::score;
///
/// assert_eq!(score("hel", "hello"), 80);
/// assert_eq!(score("HELLO", "hello"), 100);
/// assert_eq!(score("", "hello"), 0);
/// ```
pub fn score(query: &str, text: &str) -> u8 {
    classify(query, text).score()
}

/// Score with explicit tuning constants.
pub fn score_with(query: &str, text: &str, config: &ScoringConfig) -> u8 {
    classify_with(query, text, config).score()
}

/// Loose yes/no match: substring hit, or similarity at least `threshold`.
///
/// A substring hit short-circuits regardless of threshold. `threshold` is
/// clamped into `(0, 1]`.
///
/// ```
/// use fieldrank::fuzzy_match;
///
/// assert!(fuzzy_match("lob", "Main Lobby", 0.9));
/// assert!(fuzzy_match("lobbby", "lobby", 0.6));
/// assert!(!fuzzy_match("", "lobby", 0.6));
/// ```
pub fn fuzzy_match(query: &str, text: &str, threshold: f64) -> bool {
    if query.is_empty() || text.is_empty() {
        return false;
    }

    let q = fold(query);
    let t = fold(text);
    if t.contains(&q) {
        return true;
    }

    let q_chars: Vec<char> = q.chars().collect();
    let t_chars: Vec<char> = t.chars().collect();
    similarity_folded(&q_chars, &t_chars) >= clamp_threshold(threshold)
}

/// [`fuzzy_match`] with the threshold taken from a scoring config.
pub fn fuzzy_match_with(query: &str, text: &str, config: &ScoringConfig) -> bool {
    fuzzy_match(query, text, config.match_threshold)
}
