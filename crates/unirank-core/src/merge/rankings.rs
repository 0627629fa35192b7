//! Cross-table rank merging

use std::collections::HashMap;

use super::report::{MergeReport, ReportEntry};
use crate::dedup::matching::exact_key;
use crate::domain::{rank_ordinal, InstitutionRecord};

/// One source's ranking table, ready to merge
///
/// Each record is expected to carry at most its own source's rank.
#[derive(Clone, Debug)]
pub struct RankingTable {
    pub source: String,
    pub records: Vec<InstitutionRecord>,
}

impl RankingTable {
    pub fn new(source: impl Into<String>, records: Vec<InstitutionRecord>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }
}

/// Fold ranking tables into one set, one row per exact name+country key
///
/// The first table is the base. Each later table's rows are looked up
/// by exact `(country, normalized name)` key against the accumulating
/// set: a hit populates that source's own rank column on the matched
/// row (other sources' columns are never touched), a miss appends a
/// new row carrying only that source's rank. Table order decides which
/// source contributes the display name of a previously-unseen
/// institution, but not the rank values of matched ones.
pub fn merge_ranking_tables(tables: Vec<RankingTable>) -> (Vec<InstitutionRecord>, MergeReport) {
    let mut merged: Vec<InstitutionRecord> = Vec::new();
    let mut lookup: HashMap<(String, String), usize> = HashMap::new();
    let mut report = MergeReport::new();

    for (table_idx, table) in tables.into_iter().enumerate() {
        let mut matched = 0;
        let mut appended = 0;

        for record in table.records {
            let key = exact_key(&record);

            if table_idx > 0 {
                if let Some(&idx) = lookup.get(&key) {
                    let existing = &mut merged[idx];
                    if let Some(rank) = record.rank(&table.source) {
                        existing
                            .ranks
                            .insert(table.source.clone(), rank.to_string());
                    }
                    existing.sources.insert(table.source.clone());
                    matched += 1;
                    continue;
                }
            }

            lookup.entry(key).or_insert(merged.len());
            merged.push(record);
            appended += 1;
        }

        report.push(ReportEntry::TableApplied {
            source: table.source,
            matched,
            appended,
        });
    }

    (merged, report)
}

/// Order a merged table by one source's rank, missing ranks last
///
/// Rank strings that do not parse ("Reporter", "") sort with the
/// missing ones; ties and unranked rows keep their relative order.
pub fn sort_by_rank(records: &mut [InstitutionRecord], source: &str) {
    records.sort_by_key(|r| {
        let ordinal = r.rank(source).and_then(rank_ordinal);
        (ordinal.is_none(), ordinal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, country: &str, source: &str, rank: &str) -> InstitutionRecord {
        InstitutionRecord::new(name, country).with_rank(source, rank)
    }

    #[test]
    fn test_matched_row_gains_second_rank() {
        let qs = RankingTable::new(
            "qs",
            vec![row("MIT", "United States of America", "qs", "1")],
        );
        let the = RankingTable::new(
            "the",
            vec![row("MIT", "United States of America", "the", "2")],
        );

        let (merged, _) = merge_ranking_tables(vec![qs, the]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].rank("qs"), Some("1"));
        assert_eq!(merged[0].rank("the"), Some("2"));
        assert!(merged[0].sources.contains("the"));
    }

    #[test]
    fn test_unmatched_row_appends_with_only_its_rank() {
        let qs = RankingTable::new(
            "qs",
            vec![row("MIT", "United States of America", "qs", "1")],
        );
        let the = RankingTable::new(
            "the",
            vec![row("Leiden University", "Netherlands", "the", "77")],
        );

        let (merged, _) = merge_ranking_tables(vec![qs, the]);
        assert_eq!(merged.len(), 2);

        let leiden = &merged[1];
        assert_eq!(leiden.rank("qs"), None);
        assert_eq!(leiden.rank("the"), Some("77"));
    }

    #[test]
    fn test_exact_keys_keep_distinct_spellings_apart() {
        // Pure exact-key merge: the literal normalized strings differ,
        // so abbreviation and full name stay separate rows. Collapsing
        // them is the bracket-aware dedup pass's job.
        let qs = RankingTable::new(
            "qs",
            vec![row("MIT", "United States of America", "qs", "1")],
        );
        let the = RankingTable::new(
            "the",
            vec![row(
                "Massachusetts Institute of Technology",
                "United States of America",
                "the",
                "2",
            )],
        );

        let (merged, _) = merge_ranking_tables(vec![qs, the]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_country_mismatch_never_merges() {
        let qs = RankingTable::new("qs", vec![row("National University", "Singapore", "qs", "30")]);
        let the = RankingTable::new(
            "the",
            vec![row("National University", "Philippines", "the", "900")],
        );

        let (merged, _) = merge_ranking_tables(vec![qs, the]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_report_counts() {
        let qs = RankingTable::new(
            "qs",
            vec![
                row("MIT", "United States of America", "qs", "1"),
                row("Harvard University", "United States of America", "qs", "4"),
            ],
        );
        let the = RankingTable::new(
            "the",
            vec![
                row("MIT", "United States of America", "the", "2"),
                row("Leiden University", "Netherlands", "the", "77"),
            ],
        );

        let (_, report) = merge_ranking_tables(vec![qs, the]);
        assert_eq!(
            report.entries[1],
            ReportEntry::TableApplied {
                source: "the".to_string(),
                matched: 1,
                appended: 1,
            }
        );
    }

    #[test]
    fn test_sort_by_rank() {
        let mut records = vec![
            row("C", "X", "qs", "701-710"),
            row("A", "X", "qs", "1"),
            InstitutionRecord::new("D", "X"),
            row("B", "X", "qs", "=12"),
        ];

        sort_by_rank(&mut records, "qs");
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }
}
