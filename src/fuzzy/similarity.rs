// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalized similarity in `[0, 1]`.

use super::levenshtein::levenshtein_chars;
use crate::utils::fold_chars;

/// `1 - distance / max_len` over the lower-cased inputs.
///
/// Two empty strings are identical (1.0).
///
/// `max_len` is the char length of the *folded* strings, not of the raw
/// inputs. The two only differ for the few characters whose lower-case form
/// has a different length: `İ` folds to `i` plus a combining dot, so
/// `similarity("İ", "i")` is `1 - 1/2 = 0.5` here, where raw lengths would give
/// `1 - 1/1 = 0`. Measuring what the distance was computed on keeps the ratio
/// inside `[0, 1]` without relying on the clamp.
///
/// ```
/// use fieldrank::similarity;
///
/// assert_eq!(similarity("Hello", "hello"), 1.0);
/// assert!(similarity("cat", "bat") > 0.5);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = fold_chars(a);
    let b = fold_chars(b);
    similarity_folded(&a, &b)
}

/// Similarity over already-folded char buffers.
pub(crate) fn similarity_folded(a: &[char], b: &[char]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_chars(a, b);
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}

/// Edit budget that can still reach `floor` at this length.
///
/// similarity >= floor  <=>  distance <= (1 - floor) * max_len. Rounded up so
/// float error can only make the budget looser, never reject a real match.
pub(crate) fn max_distance_for(floor: f64, max_len: usize) -> usize {
    if floor <= 0.0 {
        return max_len;
    }
    (((1.0 - floor) * max_len as f64).ceil() as usize).min(max_len)
}
