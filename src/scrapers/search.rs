//! Search-results fetching and candidate extraction.
//!
//! The search URL is the configured base endpoint with the topical query and
//! subject name appended as one percent-encoded `q` parameter. Results pages
//! list one `article` element per hit; inside it the heading, anchor, and
//! timestamp nodes are all optional, so extraction is best-effort and yields
//! `Option` fields for the pipeline's fallback paths to handle.

use crate::models::RawArticle;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};
use url::Url;

/// Build the search URL for one subject.
pub fn build_search_url(base_url: &str, query: &str, subject: &str) -> String {
    let term = format!("{query} {subject}");
    format!("{}&q={}", base_url, urlencoding::encode(&term))
}

/// Fetch the search-results page for `subject` and extract candidates.
///
/// # Errors
///
/// Fails on network errors and non-success HTTP statuses. Callers treat a
/// failure as "skip this subject", never as a fatal condition.
#[instrument(level = "info", skip(client, base_url, query))]
pub async fn fetch_candidates(
    client: &Client,
    base_url: &str,
    query: &str,
    subject: &str,
) -> Result<Vec<RawArticle>, Box<dyn Error>> {
    let url = build_search_url(base_url, query, subject);
    debug!(%url, "Fetching search results");

    let html = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let candidates = extract_candidates(&html, &url);
    info!(count = candidates.len(), "Extracted search candidates");
    Ok(candidates)
}

/// Extract one [`RawArticle`] per `article` element in `html`.
///
/// Takes the first `h3` for the title, the first `a[href]` for the link
/// (resolved against `page_url` when relative), and the first
/// `time[datetime]` for the raw date. Absent nodes become `None`.
pub fn extract_candidates(html: &str, page_url: &str) -> Vec<RawArticle> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse("article").unwrap();
    let title_selector = Selector::parse("h3").unwrap();
    let link_selector = Selector::parse("a[href]").unwrap();
    let time_selector = Selector::parse("time[datetime]").unwrap();

    let base = Url::parse(page_url).ok();

    let mut candidates = Vec::new();
    for element in document.select(&item_selector) {
        let title = element
            .select(&title_selector)
            .next()
            .map(|node| {
                node.text()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string()
            })
            .filter(|text| !text.is_empty());

        let link = element
            .select(&link_selector)
            .next()
            .and_then(|node| node.value().attr("href"))
            .map(|href| resolve_href(base.as_ref(), href));

        let raw_date = element
            .select(&time_selector)
            .next()
            .and_then(|node| node.value().attr("datetime"))
            .map(str::to_string);

        candidates.push(RawArticle {
            title,
            link,
            raw_date,
        });
    }
    candidates
}

/// Resolve a possibly-relative href against the results page URL.
fn resolve_href(base: Option<&Url>, href: &str) -> String {
    match base.and_then(|base| base.join(href).ok()) {
        Some(resolved) => resolved.to_string(),
        None => href.to_string(),
    }
}
