//! Similarity properties.

use crate::oracles::{field_text, oracle_similarity, unicode_word};
use fieldrank::similarity;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_in_unit_range(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
    }

    #[test]
    fn prop_matches_oracle(a in field_text(), b in field_text()) {
        let s = similarity(&a, &b);
        let expected = oracle_similarity(&a, &b);
        prop_assert!((s - expected).abs() < 1e-12, "{} vs {}", s, expected);
    }

    #[test]
    fn prop_symmetric(a in field_text(), b in field_text()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    /// Equal up to case means fully similar.
    #[test]
    fn prop_case_blind(a in field_text()) {
        prop_assert_eq!(similarity(&a, &a.to_uppercase()), 1.0);
        prop_assert_eq!(similarity(&a, &a.to_lowercase()), 1.0);
    }

    #[test]
    fn prop_unicode_case_blind(a in unicode_word()) {
        prop_assert_eq!(similarity(&a, &a.to_uppercase()), 1.0);
    }
}
