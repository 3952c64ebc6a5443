//! Utility functions for string processing.

/// Case-fold a string for comparison: plain Unicode lower-casing.
///
/// No diacritic stripping and no whitespace collapsing: "café" and "cafe" stay
/// one edit apart, and "north  wing" keeps both spaces. Callers that want
/// accent-insensitive search should fold their records before handing them in.
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Fold into a char buffer, ready for the edit distance DP.
pub fn fold_chars(value: &str) -> Vec<char> {
    fold(value).chars().collect()
}

/// Empty or whitespace-only. Such queries mean "no query", not "match nothing".
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
