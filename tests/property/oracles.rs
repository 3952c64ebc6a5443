//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations with no shortcuts. The optimized
//! code must agree with them on every input.

#![allow(dead_code)]

use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Full-matrix Wagner-Fischer over chars. O(nm) time and space.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        d[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }
    d[a.len()][b.len()]
}

/// Similarity straight from the definition.
pub fn oracle_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - oracle_levenshtein(&a, &b) as f64 / max_len as f64
}

/// Tier scoring with the default constants, no edit-budget prefilter.
pub fn oracle_score(query: &str, text: &str) -> u8 {
    if query.is_empty() || text.is_empty() {
        return 0;
    }
    let q = query.to_lowercase();
    let t = text.to_lowercase();

    if t == q {
        100
    } else if t.starts_with(&q) {
        80
    } else if t.contains(&q) {
        60
    } else {
        let sim = oracle_similarity(&q, &t);
        if sim < 0.6 {
            0
        } else {
            ((sim * 60.0).round() as u8).min(59)
        }
    }
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Short lowercase words over a small alphabet, so near-misses are common.
pub fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,8}").unwrap()
}

/// Mixed-case ASCII with digits and separators, like ids and names.
pub fn field_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Ca-c0-2 -]{0,12}").unwrap()
}

/// Words with multi-byte and case-changing characters.
pub fn unicode_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "CAFÉ".to_string(),
        "cafe".to_string(),
        "naïve".to_string(),
        "Ålesund".to_string(),
        "tromsø".to_string(),
        "harīṣh".to_string(),
        "harish".to_string(),
        "తెలుగు".to_string(),
        "ΣΟΦΙΑ".to_string(),
        "σοφια".to_string(),
        "".to_string(),
    ])
}

// =============================================================================
// ORACLE SELF-CHECKS
// =============================================================================

#[test]
fn test_oracle_levenshtein_known_values() {
    assert_eq!(oracle_levenshtein("kitten", "sitting"), 3);
    assert_eq!(oracle_levenshtein("", "abc"), 3);
    assert_eq!(oracle_levenshtein("café", "cafe"), 1);
}

#[test]
fn test_oracle_score_known_values() {
    assert_eq!(oracle_score("hel", "hello"), 80);
    assert_eq!(oracle_score("cat", "bat"), 40);
    assert_eq!(oracle_score("", "x"), 0);
}
