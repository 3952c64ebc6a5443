// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant errors and the ranked-list validator.
//!
//! | Check                  | What's Guaranteed                              |
//! |------------------------|------------------------------------------------|
//! | `OutOfOrder`           | non-increasing score, ties in input order      |
//! | `BelowMinScore`        | no result under the caller's threshold         |
//! | `ScoreOutOfRange`      | every score in `[0, 100]`                      |
//! | `MissingMatchedFields` | a positive score names at least one field      |
//! | `StrayMatchedFields`   | a zero score names no fields                   |
//!
//! # Example
//!
//! ```
//! use fieldrank::{check_ranked, search, Record, SearchOptions};
//!
//! let records = vec![Record::new().with("name", "Lobby")];
//! let results = search("lob", &records, &SearchOptions::default());
//! assert!(check_ranked(&results, 0).is_ok());
//! ```

use crate::scoring::MAX_SCORE;
use crate::types::MatchResult;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Result at `position` should have come before its predecessor.
    OutOfOrder {
        position: usize,
        prev: (u8, usize),
        curr: (u8, usize),
    },
    /// A result scored under the minimum.
    BelowMinScore {
        position: usize,
        score: u8,
        min_score: u8,
    },
    /// Score above 100.
    ScoreOutOfRange { position: usize, score: u8 },
    /// Positive score with no matched fields.
    MissingMatchedFields { position: usize, score: u8 },
    /// Zero score that still lists matched fields.
    StrayMatchedFields { position: usize, fields: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::OutOfOrder {
                position,
                prev,
                curr,
            } => {
                write!(
                    f,
                    "result {} (score {}, index {}) outranks result before it (score {}, index {})",
                    position, curr.0, curr.1, prev.0, prev.1
                )
            }
            InvariantError::BelowMinScore {
                position,
                score,
                min_score,
            } => {
                write!(
                    f,
                    "result {} scored {} below min score {}",
                    position, score, min_score
                )
            }
            InvariantError::ScoreOutOfRange { position, score } => {
                write!(f, "result {} scored {} > {}", position, score, MAX_SCORE)
            }
            InvariantError::MissingMatchedFields { position, score } => {
                write!(f, "result {} scored {} with no matched fields", position, score)
            }
            InvariantError::StrayMatchedFields { position, fields } => {
                write!(f, "result {} scored 0 but lists {} matched fields", position, fields)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Validate a ranked result list, returning the first violation.
pub fn check_ranked<R>(
    results: &[MatchResult<'_, R>],
    min_score: u8,
) -> Result<(), InvariantError> {
    for (position, result) in results.iter().enumerate() {
        if result.score > MAX_SCORE {
            return Err(InvariantError::ScoreOutOfRange {
                position,
                score: result.score,
            });
        }
        if result.score < min_score {
            return Err(InvariantError::BelowMinScore {
                position,
                score: result.score,
                min_score,
            });
        }
        if result.score > 0 && result.matched_fields.is_empty() {
            return Err(InvariantError::MissingMatchedFields {
                position,
                score: result.score,
            });
        }
        if result.score == 0 && !result.matched_fields.is_empty() {
            return Err(InvariantError::StrayMatchedFields {
                position,
                fields: result.matched_fields.len(),
            });
        }

        if position > 0 {
            let prev = &results[position - 1];
            let in_order = prev.score > result.score
                || (prev.score == result.score && prev.index < result.index);
            if !in_order {
                return Err(InvariantError::OutOfOrder {
                    position,
                    prev: (prev.score, prev.index),
                    curr: (result.score, result.index),
                });
            }
        }
    }

    Ok(())
}
