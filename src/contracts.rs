//! Runtime contracts for ranked result lists.
//!
//! Debug-mode assertions that the engine's output obeys its ordering and
//! filtering rules. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the checks in [`verify`](crate::verify), which returns errors
//!    instead of panicking
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function         | Property                                         |
//! |---------------------------|--------------------------------------------------|
//! | `check_ranked_contract`   | sorted by (score desc, index asc), >= min score  |
//! | `check_matched_fields`    | matched fields non-empty exactly when score > 0  |
//! | tier assertions (const)   | exact > prefix > contains > every fuzzy score    |

use crate::scoring::{CONTAINS_SCORE, EXACT_SCORE, FUZZY_CAP, FUZZY_SCALE, MAX_SCORE, PREFIX_SCORE};
use crate::types::MatchResult;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that the tiers are strictly ordered.
/// If a constant is edited into the wrong range, the crate won't build.
const _: () = {
    assert!(EXACT_SCORE == MAX_SCORE);
    assert!(EXACT_SCORE > PREFIX_SCORE);
    assert!(PREFIX_SCORE > CONTAINS_SCORE);
    // Best possible fuzzy score stays under the contains tier
    assert!(FUZZY_CAP < CONTAINS_SCORE);
    assert!(FUZZY_SCALE <= CONTAINS_SCORE as f64);
};

// ============================================================================
// RESULT LIST CONTRACTS
// ============================================================================

/// Check a ranked list: ordering, minimum score, matched fields.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order, any result scores below
/// `min_score`, or any result breaks the matched-fields rule.
#[inline]
pub fn check_ranked_contract<R>(results: &[MatchResult<'_, R>], min_score: u8) {
    for window in results.windows(2) {
        let (prev, curr) = (&window[0], &window[1]);
        debug_assert!(
            prev.score > curr.score || (prev.score == curr.score && prev.index < curr.index),
            "Contract violation: ranked order - (score {}, index {}) before (score {}, index {})",
            prev.score,
            prev.index,
            curr.score,
            curr.index
        );
    }

    for result in results {
        debug_assert!(
            result.score >= min_score,
            "Contract violation: min score - index {} scored {} < {}",
            result.index,
            result.score,
            min_score
        );
        debug_assert!(
            result.score <= MAX_SCORE,
            "Contract violation: score range - index {} scored {}",
            result.index,
            result.score
        );
        check_matched_fields(result);
    }
}

/// Matched fields are non-empty whenever the score is positive, and empty
/// when it is zero.
#[inline]
pub fn check_matched_fields<R>(result: &MatchResult<'_, R>) {
    debug_assert!(
        (result.score > 0) == !result.matched_fields.is_empty(),
        "Contract violation: matched fields - index {} scored {} with {} matched fields",
        result.index,
        result.score,
        result.matched_fields.len()
    );
}
