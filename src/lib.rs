//! Tiered fuzzy search and ranking over flat records.
//!
//! Give it a query and a slice of records (field name to optional text), get
//! back the records that match, best first. Every field is scored in tiers:
//! exact (100), prefix (80), contains (60), then an edit-distance fuzzy score
//! below 60. A record's score is its best field.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   fuzzy      │────▶│   scoring    │────▶│   search     │
//! │ (levenshtein,│     │ (classify,   │     │ (fields,     │
//! │  similarity) │     │  ranking)    │     │  engine)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │          types / config / contracts / verify             │
//! │  (Record, Searchable, SearchOptions, InvariantError)     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is a pure function. No state survives a call, nothing is
//! indexed, nothing blocks. Call it from as many threads as you like.
//!
//! # Usage
//!
//! ```
//! use fieldrank::{search, Record, SearchOptions};
//!
//! let records = vec![
//!     Record::new().with("id", "4").with("type", "motion"),
//!     Record::new().with("id", "5").with("deviceId", "DEV-001"),
//! ];
//! let results = search("motion", &records, &SearchOptions::default());
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].matched_fields, vec!["type"]);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
mod fuzzy;
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;
pub mod verify;

// Re-exports for public API
pub use config::{ScoringConfig, SearchOptions, DEFAULT_MATCH_THRESHOLD};
pub use fuzzy::{levenshtein, levenshtein_chars, levenshtein_within, similarity};
pub use scoring::ranking::{compare_results, rank};
pub use scoring::{
    classify, classify_with, fuzzy_match, fuzzy_match_with, fuzzy_score, score, score_with,
    MatchTier, CONTAINS_SCORE, DEFAULT_FUZZY_FLOOR, EXACT_SCORE, FUZZY_CAP, FUZZY_SCALE,
    MAX_SCORE, PREFIX_SCORE,
};
#[cfg(feature = "parallel")]
pub use search::search_parallel;
pub use search::{search, search_default, search_fields};
pub use types::{
    records_from_json, FieldScore, FieldSelector, MatchResult, Record, Searchable,
    DEFAULT_ID_FIELD,
};
pub use utils::{fold, is_blank};
pub use verify::{check_ranked, InvariantError};
