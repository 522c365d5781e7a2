//! Subject verification against article titles.
//!
//! Search engines return co-occurrence matches that never mention the
//! searched subject. This check is the guard against that: the subject must
//! appear in the title directly. For subjects qualified with a Brazilian
//! state ("Maria Souza, Bahia"), a title mention of the state itself, by
//! full name or by its two-letter abbreviation, also counts.

use once_cell::sync::Lazy;

/// The 27 federative units and their abbreviations, case-folded once at
/// first use. Comparisons are plain substring containment on folded strings.
static STATES: Lazy<Vec<(String, String)>> = Lazy::new(|| {
    [
        ("Acre", "AC"),
        ("Alagoas", "AL"),
        ("Amapá", "AP"),
        ("Amazonas", "AM"),
        ("Bahia", "BA"),
        ("Ceará", "CE"),
        ("Distrito Federal", "DF"),
        ("Espírito Santo", "ES"),
        ("Goiás", "GO"),
        ("Maranhão", "MA"),
        ("Mato Grosso", "MT"),
        ("Mato Grosso do Sul", "MS"),
        ("Minas Gerais", "MG"),
        ("Pará", "PA"),
        ("Paraíba", "PB"),
        ("Paraná", "PR"),
        ("Pernambuco", "PE"),
        ("Piauí", "PI"),
        ("Rio de Janeiro", "RJ"),
        ("Rio Grande do Norte", "RN"),
        ("Rio Grande do Sul", "RS"),
        ("Rondônia", "RO"),
        ("Roraima", "RR"),
        ("Santa Catarina", "SC"),
        ("São Paulo", "SP"),
        ("Sergipe", "SE"),
        ("Tocantins", "TO"),
    ]
    .iter()
    .map(|(name, abbreviation)| (name.to_lowercase(), abbreviation.to_lowercase()))
    .collect()
});

/// Decide whether `subject` is genuinely referenced in `title`.
///
/// Case-folded direct substring first; otherwise, for every state whose name
/// occurs inside the subject, a mention of that state (name or abbreviation)
/// in the title counts as a match. First rule to fire wins.
pub fn verify(subject: &str, title: &str) -> bool {
    let subject_folded = subject.to_lowercase();
    let title_folded = title.to_lowercase();

    if title_folded.contains(&subject_folded) {
        return true;
    }

    for (name, abbreviation) in STATES.iter() {
        if subject_folded.contains(name)
            && (title_folded.contains(name) || title_folded.contains(abbreviation))
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_substring_match() {
        assert!(verify("Maria Silva", "Maria Silva recebe aumento"));
    }

    #[test]
    fn test_direct_match_is_case_folded() {
        assert!(verify("maria silva", "MARIA SILVA recebe aumento"));
    }

    #[test]
    fn test_state_abbreviation_fallback() {
        // "bahia" occurs in the subject, "ba" occurs in the title.
        assert!(verify("João, Bahia", "Governo da BA anuncia reajuste"));
    }

    #[test]
    fn test_state_full_name_fallback() {
        assert!(verify(
            "Servidores de São Paulo",
            "São Paulo confirma reajuste do funcionalismo"
        ));
    }

    #[test]
    fn test_unrelated_title_is_rejected() {
        assert!(!verify("Carlos", "Notícia sem relação"));
    }

    #[test]
    fn test_state_fallback_requires_state_in_subject() {
        // The title mentions a state, but the subject carries no state
        // qualifier, so the fallback must not fire.
        assert!(!verify("Carlos Pereira", "Bahia anuncia reajuste"));
    }

    #[test]
    fn test_accented_state_names_fold() {
        assert!(verify("Prefeitura, Pará", "Pará define novo piso"));
    }
}
