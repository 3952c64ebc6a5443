// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checking ranked lists outside of debug builds.
//!
//! [`contracts`](crate::contracts) panics in debug builds when the engine breaks
//! its own rules. This module runs the same checks on any result list and
//! reports the first violation as an error, which is what callers want when the
//! list came from somewhere they don't control (a cache, a wire, a merge).

mod types;

pub use types::*;
