//! Record merging and final deduplication
//!
//! Collapses a group of records that all denote the same institution
//! into one representative row, and runs the final dedup pass over a
//! fully cross-merged table.

mod rankings;
mod report;

pub use rankings::{merge_ranking_tables, sort_by_rank, RankingTable};
pub use report::{MergeReport, ReportEntry};

use crate::dedup::grouping::group_duplicates;
use crate::domain::InstitutionRecord;

/// Collapse a group of equivalent records into one
///
/// The representative is the most complete record (ties broken by
/// first-seen order). Its empty fields are backfilled from siblings in
/// completeness order; name and country are never overwritten, and a
/// rank column can only be filled for a source the representative does
/// not already carry. `sources` are unioned.
pub fn merge_group(group: Vec<InstitutionRecord>) -> (InstitutionRecord, ReportEntry) {
    debug_assert!(!group.is_empty());

    let member_names: Vec<String> = group.iter().map(|r| r.name.clone()).collect();

    // Stable sort keeps first-seen order among equally complete records
    let mut ordered = group;
    ordered.sort_by_key(|r| std::cmp::Reverse(r.completeness()));

    let mut representative = ordered[0].clone();
    let mut filled: Vec<String> = Vec::new();

    for sibling in &ordered[1..] {
        representative.sources.extend(sibling.sources.iter().cloned());

        if !representative.status.is_known() && sibling.status.is_known() {
            representative.status = sibling.status;
            filled.push(format!("status from {}", sibling.name));
        }

        if representative.coordinates.is_none() {
            if let Some(coords) = sibling.coordinates {
                representative.coordinates = Some(coords);
                filled.push(format!("coordinates from {}", sibling.name));
            }
        }

        for (source, rank) in &sibling.ranks {
            if rank.trim().is_empty() {
                continue;
            }
            let missing = representative
                .rank(source)
                .map(|r| r.trim().is_empty())
                .unwrap_or(true);
            if missing {
                representative.ranks.insert(source.clone(), rank.clone());
                filled.push(format!("{} rank from {}", source, sibling.name));
            }
        }
    }

    let entry = ReportEntry::GroupCollapsed {
        country: representative.country.clone(),
        member_names,
        kept_name: representative.name.clone(),
        filled,
    };

    (representative, entry)
}

/// Final dedup pass over a fully cross-merged table
///
/// Groups records with the bracket-aware strategy (one-pass,
/// non-transitive; see [`group_duplicates`]) and collapses each
/// multi-record group via [`merge_group`]. Returns the surviving
/// records in first-seen order plus the audit report.
pub fn deduplicate(records: Vec<InstitutionRecord>) -> (Vec<InstitutionRecord>, MergeReport) {
    let groups = group_duplicates(&records);
    let mut by_index: Vec<Option<InstitutionRecord>> = records.into_iter().map(Some).collect();

    let mut kept = Vec::with_capacity(groups.len());
    let mut report = MergeReport::new();

    for group_indices in groups {
        if group_indices.len() == 1 {
            if let Some(record) = by_index[group_indices[0]].take() {
                kept.push(record);
            }
            continue;
        }

        let group: Vec<InstitutionRecord> = group_indices
            .iter()
            .filter_map(|&idx| by_index[idx].take())
            .collect();

        let (merged, entry) = merge_group(group);
        report.push(entry);
        kept.push(merged);
    }

    (kept, report)
}
