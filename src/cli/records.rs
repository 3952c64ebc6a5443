// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading records and options from disk for the CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fieldrank::{records_from_json, FieldSelector, Record, SearchOptions};

/// Read a JSON array of flat objects.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;
    records_from_json(&raw).with_context(|| format!("Invalid records JSON in {}", path.display()))
}

/// Build search options: config file first, then command-line overrides.
pub fn load_options(
    config: Option<&Path>,
    fields: Option<Vec<String>>,
    min_score: Option<i64>,
) -> Result<SearchOptions> {
    let mut options = match config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            SearchOptions::from_json_str(&raw)
                .with_context(|| format!("Invalid config JSON in {}", path.display()))?
        }
        None => SearchOptions::default(),
    };

    if let Some(fields) = fields {
        let fields: Vec<String> = fields
            .into_iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        if !fields.is_empty() {
            options = options.with_fields(FieldSelector::Only(fields));
        }
    }
    if let Some(min_score) = min_score {
        options = options.with_min_score(min_score);
    }

    Ok(options)
}
