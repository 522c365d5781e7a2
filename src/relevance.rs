//! Keyword relevance scoring for article titles.
//!
//! Titles are ranked into three tiers by plain substring containment against
//! fixed keyword lists, most specific first: an exact salary phrase beats a
//! bare adjustment word, and everything else is low. Matching is deliberately
//! not tokenized and not case-normalized; the lists enumerate the case
//! variants the source corpus actually uses.

use crate::models::RelevanceTier;

/// Multi-word phrases that tie an adjustment directly to salaries.
const HIGH_KEYWORDS: [&str; 4] = [
    "Aumento Salarial",
    "Reajuste Salarial",
    "aumento salarial",
    "reajuste salarial",
];

/// Bare adjustment words without the salary qualifier.
const MEDIUM_KEYWORDS: [&str; 4] = ["Aumento", "Reajuste", "reajuste", "aumento"];

/// Cost-of-living topics considered low relevance.
///
/// Carried as documentation of the intended low tier, but the scorer never
/// consults it: any title that misses the high and medium lists is low
/// whether or not it mentions one of these topics. See the tier tests.
#[cfg_attr(not(test), allow(dead_code))]
const LOW_KEYWORDS: [&str; 20] = [
    "Transporte público",
    "Tarifa dos ônibus",
    "Tarifa de metrô",
    "Combustível",
    "Gasolina",
    "Diesel",
    "Alimentação",
    "Supermercado",
    "Restaurantes",
    "Preço da comida",
    "Inflação",
    "Economia doméstica",
    "Preços de produtos",
    "Taxas de juros",
    "Custos de vida",
    "Transporte de carga",
    "Pedágios",
    "Passagens aéreas",
    "Gastos domésticos",
    "Despesas familiares",
];

/// Assign a relevance tier to a title, first match wins.
pub fn score(title: &str) -> RelevanceTier {
    if HIGH_KEYWORDS.iter().any(|keyword| title.contains(keyword)) {
        RelevanceTier::High
    } else if MEDIUM_KEYWORDS.iter().any(|keyword| title.contains(keyword)) {
        RelevanceTier::Medium
    } else {
        RelevanceTier::Low
    }
}
