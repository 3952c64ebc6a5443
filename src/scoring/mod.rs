// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Scores come in tiers (exact, prefix, contains, fuzzy) with fixed gaps between
//! them, so a better tier always outranks a worse one. Ordering then only has to
//! sort by score and fall back to input position.

mod core;
pub mod ranking;

pub use core::*;
