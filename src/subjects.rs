//! Subject-name input.
//!
//! Subjects arrive as a line-delimited text file read once before processing
//! begins: one name per line, surrounding whitespace trimmed, blank lines
//! ignored. Failure to read this file is the one fatal input error of the
//! whole run.

use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Parse subject names out of file content.
pub fn parse_subjects(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse the subjects file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn read_subjects(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let content = fs::read_to_string(path).await?;
    let subjects = parse_subjects(&content);
    info!(count = subjects.len(), "Loaded subject names");
    Ok(subjects)
}
