//! Pairwise equivalence tests between institution records

use super::keys::NameKeys;
use crate::domain::InstitutionRecord;

/// The exact lookup key of a record: `(country, normalized name)`,
/// country lowercased for case-insensitive comparison
pub fn exact_key(record: &InstitutionRecord) -> (String, String) {
    (
        record.country.trim().to_lowercase(),
        record.normalized_name.clone(),
    )
}

/// Exact-key strategy: records match iff their `(country, normalized
/// name)` tuples are identical
///
/// Deliberately conservative, with no fuzzy fallback: "Cornell
/// University" and "Cornell College" must stay distinct when folding
/// authoritative ranking tables together.
pub fn exact_key_match(a: &InstitutionRecord, b: &InstitutionRecord) -> bool {
    !a.normalized_name.is_empty() && exact_key(a) == exact_key(b)
}

/// Bracket-aware strategy: do two records denote the same institution?
///
/// Requires matching countries (case-insensitive, both present) and a
/// substantial name-key overlap (see [`NameKeys::substantial_overlap`]).
pub fn same_institution(a: &InstitutionRecord, b: &InstitutionRecord) -> bool {
    let country_a = a.country.trim().to_lowercase();
    let country_b = b.country.trim().to_lowercase();
    if country_a.is_empty() || country_b.is_empty() || country_a != country_b {
        return false;
    }

    same_institution_keyed(&NameKeys::build(&a.name), &NameKeys::build(&b.name))
}

/// Key-set comparison for callers that precompute [`NameKeys`]
pub(crate) fn same_institution_keyed(a: &NameKeys, b: &NameKeys) -> bool {
    a.substantial_overlap(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, country: &str) -> InstitutionRecord {
        InstitutionRecord::new(name, country)
    }

    #[test]
    fn test_exact_key_match() {
        let a = record("The University of Georgia", "United States of America");
        let b = record("university of georgia", "united states of america");
        assert!(exact_key_match(&a, &b));
    }

    #[test]
    fn test_exact_key_requires_same_country() {
        let a = record("University of Georgia", "United States of America");
        let b = record("University of Georgia", "Georgia");
        assert!(!exact_key_match(&a, &b));
    }

    #[test]
    fn test_exact_key_no_fuzzy_fallback() {
        let a = record("Cornell University", "United States of America");
        let b = record("Cornell College", "United States of America");
        assert!(!exact_key_match(&a, &b));
    }

    #[test]
    fn test_same_institution_via_alias() {
        let a = record(
            "Massachusetts Institute of Technology (MIT)",
            "United States of America",
        );
        let b = record("MIT", "United States of America");
        assert!(same_institution(&a, &b));
    }

    #[test]
    fn test_same_institution_rejects_discarded_alias() {
        let a = record("University of South Alabama (USA)", "United States of America");
        let b = record("USA", "United States of America");
        assert!(!same_institution(&a, &b));
    }

    #[test]
    fn test_same_institution_requires_country() {
        let a = record("MIT", "United States of America");
        let b = record("MIT", "");
        assert!(!same_institution(&a, &b));
    }

    #[test]
    fn test_generic_word_guard() {
        let a = record("University", "France");
        let b = record("University", "France");
        assert!(!same_institution(&a, &b));
    }
}
