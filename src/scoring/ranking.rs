// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Sort key is `(score desc, index asc)`. The index is the record's position in
//! the caller's input, so equal scores keep input order. Making the index part
//! of the key (rather than trusting a stable sort) is what lets the parallel
//! path produce exactly the sequential output.

use crate::types::MatchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - higher wins
/// 2. **Index** - earlier input position wins
///
/// Two results from the same input never share an index, so this is a total
/// order over any one result list.
pub fn compare_results<R>(a: &MatchResult<'_, R>, b: &MatchResult<'_, R>) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index))
}

/// Sort a result list in place into ranked order.
pub fn rank<R>(results: &mut [MatchResult<'_, R>]) {
    results.sort_by(compare_results);
}

/// Sort in parallel. Same key, so same output as [`rank`].
#[cfg(feature = "parallel")]
pub fn par_rank<R: Sync>(results: &mut [MatchResult<'_, R>]) {
    use rayon::slice::ParallelSliceMut;
    results.par_sort_by(compare_results);
}
