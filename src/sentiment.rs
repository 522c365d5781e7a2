//! Title sentiment and adjustment-probability classification.
//!
//! Two independent signals are read off the same title:
//!
//! - **Adjustment probability** comes from fixed trigger keywords only:
//!   confirmation words mean High, speculation words mean Low, neither means
//!   Undefined. Confirmation wins when both appear.
//! - **Sentiment** is the sign of a polarity score in `[-1, 1]` produced by
//!   a static pt-BR lexicon: lowercase alphanumeric tokens are looked up and
//!   the matched weights averaged. No matches score exactly zero, which maps
//!   to Neutral.
//!
//! This is a heuristic, not an NLP pipeline; the lexicon is small and tuned
//! to the salary-news corpus.

use crate::models::{AdjustmentProbability, SentimentLabel};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Keywords reporting an adjustment as settled.
const HIGH_PROBABILITY_KEYWORDS: [&str; 5] =
    ["confirmado", "anunciado", "aprovado", "definido", "decidido"];

/// Keywords reporting an adjustment as speculative.
const LOW_PROBABILITY_KEYWORDS: [&str; 4] =
    ["possível", "planejado", "estudado", "considerado"];

static POLARITY_LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // favorable outcomes
        ("aumento", 0.5),
        ("reajuste", 0.4),
        ("aprovado", 0.6),
        ("aprovada", 0.6),
        ("confirmado", 0.5),
        ("confirmada", 0.5),
        ("garantido", 0.5),
        ("conquista", 0.7),
        ("ganho", 0.6),
        ("ganhos", 0.6),
        ("benefício", 0.5),
        ("melhoria", 0.6),
        ("avanço", 0.5),
        ("acordo", 0.3),
        ("valorização", 0.6),
        ("crescimento", 0.5),
        ("vitória", 0.7),
        ("bom", 0.5),
        ("boa", 0.5),
        // unfavorable outcomes
        ("corte", -0.7),
        ("cortes", -0.7),
        ("perda", -0.6),
        ("perdas", -0.6),
        ("redução", -0.5),
        ("atraso", -0.5),
        ("atrasado", -0.5),
        ("greve", -0.4),
        ("crise", -0.7),
        ("queda", -0.5),
        ("negado", -0.7),
        ("rejeitado", -0.7),
        ("vetado", -0.7),
        ("veto", -0.6),
        ("suspenso", -0.6),
        ("cancelado", -0.7),
        ("congelado", -0.6),
        ("congelamento", -0.6),
        ("inflação", -0.4),
        ("déficit", -0.6),
        ("dívida", -0.5),
        ("protesto", -0.4),
        ("ruim", -0.6),
    ]
    .into_iter()
    .collect()
});

/// Classify a title into its sentiment and adjustment-probability labels.
pub fn classify(title: &str) -> (SentimentLabel, AdjustmentProbability) {
    let probability = if HIGH_PROBABILITY_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword))
    {
        AdjustmentProbability::High
    } else if LOW_PROBABILITY_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword))
    {
        AdjustmentProbability::Low
    } else {
        AdjustmentProbability::Undefined
    };

    let score = polarity(title);
    let sentiment = if score > 0.0 {
        SentimentLabel::Positive
    } else if score < 0.0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    (sentiment, probability)
}

/// Polarity of `text` in `[-1, 1]`: the mean weight of lexicon tokens, 0.0
/// when nothing matches.
pub fn polarity(text: &str) -> f64 {
    let mut sum = 0.0;
    let mut matched = 0u32;
    for token in tokenize(text) {
        if let Some(weight) = POLARITY_LEXICON.get(token.as_str()) {
            sum += weight;
            matched += 1;
        }
    }
    if matched == 0 {
        0.0
    } else {
        (sum / f64::from(matched)).clamp(-1.0, 1.0)
    }
}

/// Lowercased alphanumeric tokens.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}
