//! The enrichment pipeline.
//!
//! Subjects are processed one at a time, and within a subject the discovered
//! candidates one at a time, in discovery order. Per candidate:
//!
//! 1. Normalize the raw date and gate on the trailing 7-day window.
//!    Dropped candidates cost nothing further, in particular no content
//!    fetch.
//! 2. Classify the title: relevance tier, subject verification, sentiment,
//!    adjustment probability.
//! 3. Fetch the full article text (failures become inline error strings).
//! 4. Append one [`EnrichedRow`].
//!
//! A failed search fetch skips that one subject and the run continues;
//! partial results always beat an aborted run.

use crate::dates;
use crate::models::{EnrichedRow, RawArticle};
use crate::relevance;
use crate::scrapers::{article, search};
use crate::sentiment;
use crate::utils::truncate_for_log;
use crate::verification;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Run the pipeline over every subject, returning all enriched rows.
#[instrument(level = "info", skip_all, fields(subject_count = subjects.len()))]
pub async fn run(
    client: &Client,
    base_url: &str,
    query: &str,
    subjects: &[String],
    today: NaiveDate,
) -> Vec<EnrichedRow> {
    let mut rows = Vec::new();
    for subject in subjects {
        let subject = subject.as_str();
        let subject_t0 = Instant::now();
        match search::fetch_candidates(client, base_url, query, subject).await {
            Ok(candidates) => {
                let enriched = enrich_subject(client, subject, candidates, today).await;
                info!(
                    subject,
                    rows = enriched.len(),
                    elapsed_ms = subject_t0.elapsed().as_millis() as u64,
                    "Subject processed"
                );
                rows.extend(enriched);
            }
            Err(e) => {
                error!(subject, error = %e, "Search fetch failed; skipping subject");
            }
        }
    }
    rows
}

/// Enrich every in-window candidate discovered for one subject.
async fn enrich_subject(
    client: &Client,
    subject: &str,
    candidates: Vec<RawArticle>,
    today: NaiveDate,
) -> Vec<EnrichedRow> {
    let discovered = candidates.len();
    let mut rows = Vec::new();

    for candidate in candidates {
        let Some(date) = admit(candidate.raw_date.as_deref(), today) else {
            debug!(subject, raw_date = ?candidate.raw_date, "Candidate outside recency window");
            continue;
        };

        let title = candidate.title.unwrap_or_default();
        let link = candidate.link.unwrap_or_default();

        let content = article::fetch_content(client, &link).await;
        debug!(
            subject,
            %title,
            content_preview = %truncate_for_log(&content, 120),
            "Fetched article content"
        );

        rows.push(build_row(subject, title, link, date, content));
    }

    debug!(subject, discovered, kept = rows.len(), "Applied recency gate");
    rows
}

/// Apply date normalization and the recency gate to one raw date.
///
/// Returns the canonical date only when it lies within the trailing 7-day
/// window ending at `today`; candidates rejected here receive no further
/// processing.
pub fn admit(raw_date: Option<&str>, today: NaiveDate) -> Option<String> {
    let date = dates::normalize(raw_date, today);
    dates::within_last_week(&date, today).then_some(date)
}

/// Classify one admitted candidate into its output row.
pub fn build_row(
    subject: &str,
    title: String,
    link: String,
    date: String,
    content: String,
) -> EnrichedRow {
    let relevance = relevance::score(&title);
    let search_verification = verification::verify(subject, &title);
    let (sentiment, adjustment_probability) = sentiment::classify(&title);

    EnrichedRow {
        name: subject.to_string(),
        title,
        link,
        date,
        relevance,
        search_verification,
        sentiment,
        adjustment_probability,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdjustmentProbability, RelevanceTier, SentimentLabel};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_admit_keeps_recent_candidates_with_canonical_date() {
        assert_eq!(admit(Some("3 dias"), today()), Some("07/06/24".to_string()));
        assert_eq!(admit(Some("2 horas"), today()), Some("10/06/24".to_string()));
    }

    #[test]
    fn test_admit_drops_old_and_unparseable_dates() {
        // 8 days ago is outside the inclusive window.
        assert_eq!(admit(Some("8 dias"), today()), None);
        // Absent and malformed dates land on the year-ago sentinel.
        assert_eq!(admit(None, today()), None);
        assert_eq!(admit(Some("em breve"), today()), None);
    }

    #[test]
    fn test_admit_keeps_the_window_boundary() {
        assert_eq!(admit(Some("7 dias"), today()), Some("03/06/24".to_string()));
    }

    // End-to-end classification of one admitted candidate.
    #[test]
    fn test_build_row_classifies_all_signals() {
        let date = admit(Some("3 dias"), today()).unwrap();
        let row = build_row(
            "Ana Souza",
            "Reajuste Salarial aprovado no Rio de Janeiro".to_string(),
            "https://jornal.example.com/materia".to_string(),
            date,
            "Texto completo da matéria.".to_string(),
        );

        assert_eq!(row.name, "Ana Souza");
        assert_eq!(row.date, "07/06/24");
        assert_eq!(row.relevance, RelevanceTier::High);
        // Neither the subject nor a state qualifier inside it appears in
        // the title, so verification stays off despite the state mention.
        assert!(!row.search_verification);
        assert_eq!(row.adjustment_probability, AdjustmentProbability::High);
        assert_eq!(row.sentiment, SentimentLabel::Positive);
        assert_eq!(row.content, "Texto completo da matéria.");
    }

    #[test]
    fn test_build_row_with_absent_title_classifies_from_empty_string() {
        let row = build_row(
            "Ana Souza",
            String::new(),
            String::new(),
            "07/06/24".to_string(),
            "Content not found or blocked.".to_string(),
        );
        assert_eq!(row.relevance, RelevanceTier::Low);
        assert!(!row.search_verification);
        assert_eq!(row.sentiment, SentimentLabel::Neutral);
        assert_eq!(row.adjustment_probability, AdjustmentProbability::Undefined);
    }

    #[test]
    fn test_build_row_verifies_region_qualified_subject() {
        let row = build_row(
            "Servidores, Bahia",
            "Governo da BA anuncia reajuste".to_string(),
            String::new(),
            "07/06/24".to_string(),
            String::new(),
        );
        assert!(row.search_verification);
        assert_eq!(row.relevance, RelevanceTier::Medium);
    }
}
