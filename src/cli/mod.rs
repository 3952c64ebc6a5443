// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fieldrank command-line interface.
//!
//! Three subcommands: `search` to rank a JSON file of records, `score` to see
//! how one query/text pair is classified, and `distance` for raw edit distance.
//! Flags given on the command line override values from `--config`.

pub mod display;
pub mod records;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fieldrank",
    about = "Tiered fuzzy search and ranking over flat field records",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank records from a JSON file against a query
    Search {
        /// Path to a JSON array of flat objects
        #[arg(short, long)]
        records: String,

        /// Search query
        query: String,

        /// Comma-separated fields to search (default: every text field)
        #[arg(short, long, value_delimiter = ',')]
        fields: Option<Vec<String>>,

        /// Drop results scoring below this (clamped to 0-100)
        #[arg(long, allow_negative_numbers = true)]
        min_score: Option<i64>,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// JSON file with search options (fields, minScore, scoring)
        #[arg(long)]
        config: Option<String>,

        /// Field used to identify records in the output
        #[arg(long, default_value = fieldrank::DEFAULT_ID_FIELD)]
        id_field: String,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Score records on one thread
        #[arg(long)]
        sequential: bool,
    },

    /// Show how a query scores against a single text
    Score {
        /// Search query
        query: String,

        /// Field value to score against
        text: String,

        /// Threshold for the loose fuzzy-match predicate
        #[arg(long, default_value_t = fieldrank::DEFAULT_MATCH_THRESHOLD)]
        threshold: f64,
    },

    /// Print the edit distance between two strings
    Distance {
        a: String,
        b: String,
    },
}
