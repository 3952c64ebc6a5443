// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! Checks the metric laws on arbitrary UTF-8 and that the bounded check never
//! disagrees with the full computation.

#![no_main]

use arbitrary::Arbitrary;
use fieldrank::{levenshtein, levenshtein_within, similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to keep the O(nm) DP fast
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();

    let d = levenshtein(&a, &b);
    let (la, lb) = (a.chars().count(), b.chars().count());

    // INVARIANT 1: symmetric, zero on identity
    assert_eq!(d, levenshtein(&b, &a), "asymmetric for {:?} / {:?}", a, b);
    assert_eq!(levenshtein(&a, &a), 0);

    // INVARIANT 2: |la - lb| <= d <= max(la, lb)
    assert!(d >= la.abs_diff(lb), "distance {} below length gap", d);
    assert!(d <= la.max(lb), "distance {} above longer length", d);

    // INVARIANT 3: bounded check answers exactly d <= max
    let max = usize::from(input.max);
    assert_eq!(
        levenshtein_within(&a, &b, max),
        d <= max,
        "within({}) disagrees with distance {} for {:?} / {:?}",
        max,
        d,
        a,
        b
    );

    // INVARIANT 4: similarity stays in [0, 1]
    let s = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
});
