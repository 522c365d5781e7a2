//! Full article content fetching.
//!
//! Given an article link, fetch the page and concatenate the text of every
//! paragraph element. This function is total: a missing link, a network or
//! HTTP failure, or a page without paragraph text all produce descriptive
//! strings that go straight into the output row's content cell. The shared
//! client's generous timeout is the only time bound.

use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, instrument, warn};

/// Content cell value for pages that render no paragraph text.
pub const CONTENT_NOT_FOUND: &str = "Content not found or blocked.";

/// Fetch the full text of the article at `url`.
///
/// Never fails: fetch errors are folded into an inline error description,
/// empty extractions into [`CONTENT_NOT_FOUND`].
#[instrument(level = "debug", skip(client))]
pub async fn fetch_content(client: &Client, url: &str) -> String {
    match try_fetch(client, url).await {
        Ok(text) if text.is_empty() => {
            debug!(%url, "Article page carried no paragraph text");
            CONTENT_NOT_FOUND.to_string()
        }
        Ok(text) => text,
        Err(e) => {
            warn!(%url, error = %e, "Article content fetch failed");
            format!("Failed to retrieve article content: {e}")
        }
    }
}

async fn try_fetch(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    if url.is_empty() {
        return Err("article link is missing".into());
    }
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(extract_paragraph_text(&body))
}

/// Concatenate the whitespace-normalized text of every `p` element.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraph_selector = Selector::parse("p").unwrap();

    let mut paragraphs = Vec::new();
    for node in document.select(&paragraph_selector) {
        let text = node.text().collect::<Vec<_>>().join(" ");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }
    paragraphs.join(" ")
}
