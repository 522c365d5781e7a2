//! Optional JSON export of the enriched rows.
//!
//! Same data as the CSV artifact, pretty-printed for API consumers and ad
//! hoc inspection. Only written when the CLI asks for it.

use crate::models::EnrichedRow;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize `rows` and write them to `path`.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_rows(rows: &[EnrichedRow], path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json).await?;
    info!(path, row_count = rows.len(), "Wrote JSON export");
    Ok(())
}
