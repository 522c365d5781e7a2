//! Data models for discovered articles and their enriched representations.
//!
//! This module defines the core data structures used throughout the application:
//! - [`RawArticle`]: Best-effort candidate extracted from a search-results page
//! - [`EnrichedRow`]: A fully classified article, one output-table row
//! - Classification types: [`RelevanceTier`], [`SentimentLabel`],
//!   [`AdjustmentProbability`]
//!
//! `RawArticle` fields are `Option`s on purpose: the search-results markup is
//! parsed best-effort and a missing heading, anchor, or timestamp node is an
//! expected condition, handled downstream by fallback paths rather than by
//! empty-string conventions.

use serde::Serialize;
use std::fmt;

/// A candidate article as extracted from a search-results page.
///
/// Every field is optional; extraction never fails, it just yields `None`
/// for nodes the markup did not carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawArticle {
    /// Heading text of the result, if a heading node was present.
    pub title: Option<String>,
    /// Article link, resolved to an absolute URL where possible.
    pub link: Option<String>,
    /// The raw datetime string as published, absolute or relative.
    pub raw_date: Option<String>,
}

/// Ordinal relevance of a title to salary-adjustment news.
///
/// Ordering is meaningful: `High` keywords are the most specific match and
/// take precedence over `Medium`; anything else is `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RelevanceTier {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl RelevanceTier {
    /// Numeric rank written to the output table (1–3).
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for RelevanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// Coarse sentiment label derived from the sign of a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Keyword-driven estimate of how likely a reported adjustment is to occur.
///
/// Independent of sentiment polarity; derived purely from trigger keywords
/// in the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdjustmentProbability {
    High,
    Low,
    Undefined,
}

impl fmt::Display for AdjustmentProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AdjustmentProbability::High => "High",
            AdjustmentProbability::Low => "Low",
            AdjustmentProbability::Undefined => "Undefined",
        };
        f.write_str(label)
    }
}

/// One fully enriched output row.
///
/// Created once per surviving article and never mutated afterwards. The
/// `content` field may hold a sentinel ("not found or blocked") or an inline
/// error description instead of article text; rows are emitted either way.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRow {
    /// The subject name the search was performed for.
    pub name: String,
    /// Article title (empty when the result carried no heading).
    pub title: String,
    /// Article link (empty when the result carried no anchor).
    pub link: String,
    /// Canonical publication date in `dd/mm/yy`.
    pub date: String,
    /// Keyword relevance tier of the title.
    pub relevance: RelevanceTier,
    /// Whether the searched subject is judged present in the title.
    pub search_verification: bool,
    /// Sentiment label derived from title polarity.
    pub sentiment: SentimentLabel,
    /// Keyword-driven adjustment-probability label.
    pub adjustment_probability: AdjustmentProbability,
    /// Full article text, or a sentinel/error string.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_article_defaults_to_absent_fields() {
        let article = RawArticle::default();
        assert_eq!(article.title, None);
        assert_eq!(article.link, None);
        assert_eq!(article.raw_date, None);
    }

    #[test]
    fn test_relevance_tier_ordering_and_rank() {
        assert!(RelevanceTier::High > RelevanceTier::Medium);
        assert!(RelevanceTier::Medium > RelevanceTier::Low);
        assert_eq!(RelevanceTier::Low.rank(), 1);
        assert_eq!(RelevanceTier::Medium.rank(), 2);
        assert_eq!(RelevanceTier::High.rank(), 3);
    }

    #[test]
    fn test_relevance_tier_displays_as_digit() {
        assert_eq!(RelevanceTier::High.to_string(), "3");
        assert_eq!(RelevanceTier::Low.to_string(), "1");
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
        assert_eq!(AdjustmentProbability::High.to_string(), "High");
        assert_eq!(AdjustmentProbability::Undefined.to_string(), "Undefined");
    }

    #[test]
    fn test_enriched_row_serializes() {
        let row = EnrichedRow {
            name: "Maria Silva".to_string(),
            title: "Reajuste aprovado".to_string(),
            link: "https://example.com/noticia".to_string(),
            date: "07/06/24".to_string(),
            relevance: RelevanceTier::Medium,
            search_verification: true,
            sentiment: SentimentLabel::Positive,
            adjustment_probability: AdjustmentProbability::High,
            content: "Texto da matéria".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("Maria Silva"));
        assert!(json.contains("\"relevance\":\"Medium\""));
        assert!(json.contains("\"search_verification\":true"));
    }
}
