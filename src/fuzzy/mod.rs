// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching primitives: edit distance and the similarity ratio built on it.
//!
//! Distance works on raw characters. Similarity folds case first, so everything
//! above this layer is case-insensitive without having to think about it.

mod levenshtein;
mod similarity;

pub use levenshtein::{levenshtein, levenshtein_chars, levenshtein_within};
pub use similarity::similarity;
pub(crate) use similarity::{max_distance_for, similarity_folded};
