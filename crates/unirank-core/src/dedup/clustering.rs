//! Greedy fuzzy clustering of raw cross-source name lists
//!
//! Used when unifying name dumps from sources that share no stable
//! identifiers at all (e.g. UniRanks vs ARWU exports): a record joins
//! the first already-accepted record whose folded name is similar
//! enough, otherwise it starts a new cluster.
//!
//! First-match wins over a linear scan, so the output depends on input
//! row order. That is inherent to the single-pass design; callers who
//! need stable results must feed records in a stable order.

use strsim::normalized_levenshtein;

use super::normalization::fold_name;
use crate::domain::InstitutionRecord;

/// Configuration for [`unify_sources`]
#[derive(Clone)]
pub struct UnifyConfig {
    /// Minimum similarity (0.0 - 1.0) for a record to join a cluster
    pub threshold: f64,
    /// Symmetric, character-level similarity over folded names
    pub similarity: fn(&str, &str) -> f64,
}

impl Default for UnifyConfig {
    fn default() -> Self {
        Self {
            threshold: 0.9,
            similarity: normalized_levenshtein,
        }
    }
}

/// Collapse near-identical names from different sources into one record
///
/// Joining a cluster unions the record's `sources` into the canonical
/// record and backfills its country when the canonical record has none.
/// The canonical record keeps its own name, ranks, and remaining fields;
/// this pass unifies identity, it does not merge field data (see
/// [`crate::merge`] for that).
pub fn unify_sources(records: Vec<InstitutionRecord>, config: &UnifyConfig) -> Vec<InstitutionRecord> {
    let mut accepted: Vec<InstitutionRecord> = Vec::new();
    let mut folded: Vec<String> = Vec::new();

    for record in records {
        let key = fold_name(&record.name);

        let matched = folded
            .iter()
            .position(|existing| (config.similarity)(&key, existing) >= config.threshold);

        match matched {
            Some(idx) => {
                let canonical = &mut accepted[idx];
                canonical.sources.extend(record.sources.iter().cloned());
                if canonical.country.trim().is_empty() && !record.country.trim().is_empty() {
                    canonical.country = record.country.clone();
                }
            }
            None => {
                folded.push(key);
                accepted.push(record);
            }
        }
    }

    accepted
}
