//! Duplicate grouping over a merged table

use std::collections::HashSet;

use super::keys::NameKeys;
use super::matching::same_institution_keyed;
use crate::domain::InstitutionRecord;

/// Group records that denote the same institution
///
/// Single linear pass: each not-yet-consumed record seeds a group and
/// absorbs every later not-yet-consumed record it matches directly via
/// the bracket-aware strategy. Grouping is deliberately non-transitive:
/// records A and C only land in one group when the seed matches each of
/// them itself, not through an A-B-C chain. Returns index groups in
/// first-seen order; singleton groups are included.
pub fn group_duplicates(records: &[InstitutionRecord]) -> Vec<Vec<usize>> {
    let keys: Vec<NameKeys> = records.iter().map(|r| NameKeys::build(&r.name)).collect();
    let countries: Vec<String> = records
        .iter()
        .map(|r| r.country.trim().to_lowercase())
        .collect();

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut consumed: HashSet<usize> = HashSet::new();

    for i in 0..records.len() {
        if consumed.contains(&i) {
            continue;
        }

        let mut group = vec![i];
        consumed.insert(i);

        for j in (i + 1)..records.len() {
            if consumed.contains(&j) {
                continue;
            }

            if countries[i].is_empty() || countries[i] != countries[j] {
                continue;
            }

            if same_institution_keyed(&keys[i], &keys[j]) {
                group.push(j);
                consumed.insert(j);
            }
        }

        groups.push(group);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, country: &str) -> InstitutionRecord {
        InstitutionRecord::new(name, country)
    }

    #[test]
    fn test_groups_alias_spellings() {
        let records = vec![
            record(
                "Massachusetts Institute of Technology (MIT)",
                "United States of America",
            ),
            record("Harvard University", "United States of America"),
            record("MIT", "United States of America"),
        ];

        let groups = group_duplicates(&records);
        assert_eq!(groups, vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn test_same_name_different_country_not_grouped() {
        let records = vec![
            record("National University", "Singapore"),
            record("National University", "Philippines"),
        ];

        let groups = group_duplicates(&records);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_grouping_is_not_transitive() {
        // The seed matches B directly but not C; B would match C, yet B
        // is already consumed when C is considered.
        let records = vec![
            record("Paris Institute of Science", "France"),
            record("Paris Institute of Science (PSL)", "France"),
            record("PSL", "France"),
        ];

        let groups = group_duplicates(&records);
        assert_eq!(groups, vec![vec![0, 1], vec![2]]);
    }
}
