//! CSV output generation.
//!
//! The table carries a fixed header row and one line per enriched article.
//! Quoting is RFC-4180 style: fields containing a comma, quote, or line
//! break are wrapped in double quotes with embedded quotes doubled.
//! Article content regularly contains all three.

use crate::models::EnrichedRow;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Fixed output header, in column order.
pub const HEADER: [&str; 9] = [
    "Name",
    "Title",
    "Link",
    "Date",
    "Relevance",
    "SearchVerification",
    "Sentiment",
    "AdjustmentProbability",
    "Content",
];

/// Render the full CSV document for `rows`.
pub fn render(rows: &[EnrichedRow]) -> String {
    let mut out = String::new();
    out.push_str(&HEADER.join(","));
    out.push('\n');

    for row in rows {
        let verification = if row.search_verification { "1" } else { "0" };
        let fields = [
            row.name.clone(),
            row.title.clone(),
            row.link.clone(),
            row.date.clone(),
            row.relevance.to_string(),
            verification.to_string(),
            row.sentiment.to_string(),
            row.adjustment_probability.to_string(),
            row.content.clone(),
        ];
        let line = fields
            .iter()
            .map(|field| escape_field(field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write the rendered table to `path`.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_rows(rows: &[EnrichedRow], path: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, render(rows)).await?;
    info!(path, row_count = rows.len(), "Wrote CSV output");
    Ok(())
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
