use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fieldrank::{
    classify_with, fuzzy_match, levenshtein, similarity, MatchResult, Record, ScoringConfig,
    SearchOptions,
};

mod cli;
use cli::display::*;
use cli::records::{load_options, load_records};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Search {
            records,
            query,
            fields,
            min_score,
            limit,
            config,
            id_field,
            json,
            sequential,
        } => run_search(SearchArgs {
            records: &records,
            query: &query,
            fields,
            min_score,
            limit,
            config: config.as_deref(),
            id_field: &id_field,
            json,
            sequential,
        }),
        Commands::Score {
            query,
            text,
            threshold,
        } => {
            run_score(&query, &text, threshold);
            Ok(())
        }
        Commands::Distance { a, b } => {
            println!("{}", levenshtein(&a, &b));
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean. RUST_LOG wins over -v.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct SearchArgs<'a> {
    records: &'a str,
    query: &'a str,
    fields: Option<Vec<String>>,
    min_score: Option<i64>,
    limit: usize,
    config: Option<&'a str>,
    id_field: &'a str,
    json: bool,
    sequential: bool,
}

fn run_search(args: SearchArgs<'_>) -> Result<()> {
    let records = load_records(Path::new(args.records))?;
    let options = load_options(args.config.map(Path::new), args.fields, args.min_score)?;
    tracing::debug!(records = records.len(), ?options, "search options resolved");

    let start = Instant::now();
    let results = rank_records(args.query, &records, &options, args.sequential);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let shown: Vec<&MatchResult<'_, Record>> = results.iter().take(args.limit).collect();

    if args.json {
        let out = serde_json::to_string_pretty(&shown).context("Failed to serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    print_results(args.query, &shown, results.len(), records.len(), args.id_field, elapsed_ms);
    Ok(())
}

#[cfg(feature = "parallel")]
fn rank_records<'a>(
    query: &str,
    records: &'a [Record],
    options: &SearchOptions,
    sequential: bool,
) -> Vec<MatchResult<'a, Record>> {
    if sequential {
        fieldrank::search(query, records, options)
    } else {
        fieldrank::search_parallel(query, records, options)
    }
}

#[cfg(not(feature = "parallel"))]
fn rank_records<'a>(
    query: &str,
    records: &'a [Record],
    options: &SearchOptions,
    _sequential: bool,
) -> Vec<MatchResult<'a, Record>> {
    fieldrank::search(query, records, options)
}

fn print_results(
    query: &str,
    shown: &[&MatchResult<'_, Record>],
    total: usize,
    candidates: usize,
    id_field: &str,
    elapsed_ms: f64,
) {
    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    row(&format!(
        " {} of {} records matched in {}",
        total,
        candidates,
        timing_ms(elapsed_ms)
    ));

    if shown.is_empty() {
        section_mid("RESULTS");
        row(&dim(" no matches"));
        section_bot();
        return;
    }

    section_mid("RESULTS");
    row(&format!(
        " {}  {}  {}  {}",
        pad_left("#", 3),
        pad_left("score", 5),
        pad_right("id", 24),
        "matched fields"
    ));
    for (rank, result) in shown.iter().enumerate() {
        let id = result
            .item
            .identity(id_field)
            .map(|id| truncate(id, 24))
            .unwrap_or_else(|| format!("[{}]", result.index));
        let fields = truncate(&result.matched_fields.join(", "), 40);
        row(&format!(
            " {}  {}  {}  {}",
            pad_left(&(rank + 1).to_string(), 3),
            score_value(result.score),
            pad_right(&id, 24),
            fields
        ));
    }
    if total > shown.len() {
        row(&dim(&format!(" … {} more", total - shown.len())));
    }
    section_bot();
}

fn run_score(query: &str, text: &str, threshold: f64) {
    let config = ScoringConfig::default().with_match_threshold(threshold);
    let tier = classify_with(query, text, &config);

    section_top("SCORE");
    row(&format!(" query       {}", truncate(query, 60)));
    row(&format!(" text        {}", truncate(text, 60)));
    section_mid("CLASSIFICATION");
    row(&format!(" tier        {}", tier_label(tier)));
    row(&format!(" score      {}", score_value(tier.score())));
    row(&format!(" similarity  {:.4}", similarity(query, text)));
    row(&format!(" distance    {}", levenshtein(&query.to_lowercase(), &text.to_lowercase())));
    row(&format!(
        " fuzzy match {} (threshold {:.2})",
        fuzzy_match(query, text, config.match_threshold),
        config.match_threshold
    ));
    section_bot();
}
