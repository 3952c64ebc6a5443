// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance, full and bounded.
//!
//! Both functions count Unicode scalar values, not bytes, so "café" and "cafe"
//! are one substitution apart rather than two.
//!
//! The bounded variant exists for the classifier: once we know the similarity
//! floor cannot be reached, there is no point finishing the O(nm) DP.
//! `|len(a) - len(b)|` is a lower bound on edit distance, and so is the minimum
//! of any DP row, which gives two sound early exits.

/// Levenshtein distance between `a` and `b` with unit costs.
///
/// Rolling two-row DP over the shorter string: O(|a|·|b|) time,
/// O(min(|a|, |b|)) memory.
///
/// ```
/// use fieldrank::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// Same as [`levenshtein`], for callers that already hold char buffers.
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    // Keep the row as short as possible: distance is symmetric.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Are these strings within `max` edits of each other?
///
/// Agrees with `levenshtein(a, b) <= max` for every input, but bails out early:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum of a DP row exceeds `max`, abandon the DP
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}
