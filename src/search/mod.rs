// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: per-record field scoring, then ranking across records.
//!
//! `fields` answers "how well does this one record match", `engine` runs that
//! over a collection and sorts the survivors.

pub mod engine;
pub mod fields;

pub use engine::*;
pub use fields::*;
