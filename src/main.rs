//! # Reajuste News
//!
//! A news discovery and enrichment pipeline that searches for recent
//! salary-adjustment coverage of a list of subjects, classifies each hit,
//! and writes the results to a tabular file.
//!
//! ## Features
//!
//! - Searches a news endpoint for "reajuste salarial" coverage per subject
//! - Normalizes absolute and relative pt-BR dates into `dd/mm/yy`
//! - Keeps only articles from the trailing 7-day window
//! - Classifies each title: relevance tier, subject verification, sentiment,
//!   adjustment probability
//! - Fetches full article text, degrading to inline error strings
//! - Writes a CSV table (and optionally a JSON export) once at the end
//!
//! ## Usage
//!
//! ```sh
//! reajuste_news -s subjects.txt -o salary_adjustment_news.csv
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Input**: read the subject names file
//! 2. **Discovery**: fetch the search-results page per subject
//! 3. **Enrichment**: normalize dates, gate on recency, classify titles,
//!    fetch article content, strictly sequential and in discovery order
//! 4. **Output**: write the CSV (and optional JSON) artifact

use chrono::Local;
use clap::Parser;
use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod dates;
mod models;
mod outputs;
mod pipeline;
mod relevance;
mod scrapers;
mod sentiment;
mod subjects;
mod utils;
mod verification;

use cli::Cli;
use utils::ensure_writable_parent;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("reajuste_news starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.subjects_file, ?args.output, ?args.base_url, "Parsed CLI arguments");

    // Early check: ensure output locations are writable
    if let Err(e) = ensure_writable_parent(&args.output).await {
        error!(
            path = %args.output,
            error = %e,
            "CSV output location is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }
    if let Some(ref json_path) = args.json_output {
        if let Err(e) = ensure_writable_parent(json_path).await {
            error!(
                path = %json_path,
                error = %e,
                "JSON output location is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Load subjects ----
    let names = subjects::read_subjects(&args.subjects_file).await?;
    if names.is_empty() {
        warn!(path = %args.subjects_file, "Subjects file contains no names; output will be empty");
    }

    // ---- Shared HTTP client ----
    let client = Client::builder()
        .user_agent(concat!("reajuste_news/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(args.fetch_timeout_secs))
        .build()?;

    // ---- Enrichment ----
    let today = Local::now().date_naive();
    info!(%today, query = %args.query, "Starting enrichment run");
    let rows = pipeline::run(&client, &args.base_url, &args.query, &names, today).await;
    info!(count = rows.len(), "Total enriched rows");

    // ---- Outputs ----
    outputs::csv::write_rows(&rows, &args.output).await?;

    if let Some(ref json_path) = args.json_output {
        if let Err(e) = outputs::json::write_rows(&rows, json_path).await {
            error!(path = %json_path, error = %e, "Failed to write JSON export");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
