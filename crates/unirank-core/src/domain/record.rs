//! Institution record model

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::dedup::normalization::normalize_name;

/// Whether an institution is publicly or privately run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstitutionStatus {
    Public,
    Private,
    Unknown,
}

impl InstitutionStatus {
    pub fn is_known(&self) -> bool {
        !matches!(self, InstitutionStatus::Unknown)
    }

    /// Label used in the output table; `Unknown` renders as empty.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstitutionStatus::Public => "Public",
            InstitutionStatus::Private => "Private",
            InstitutionStatus::Unknown => "",
        }
    }
}

/// Geographic coordinates of a campus
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One row of institution data
///
/// Before merging, a record represents one row of a single source table;
/// after merging, one real-world institution with the contributing
/// sources unioned into `sources` and one rank per source in `ranks`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InstitutionRecord {
    /// Raw name as published by the source
    pub name: String,
    /// Derived comparison key; always `normalize_name(name)`
    pub normalized_name: String,
    /// Canonical country name (empty when the source gave none)
    pub country: String,
    /// Raw rank string per source id (e.g. "1", "701-710")
    pub ranks: BTreeMap<String, String>,
    pub status: InstitutionStatus,
    pub coordinates: Option<Coordinates>,
    /// Source ids that contributed to this record
    pub sources: BTreeSet<String>,
}

impl InstitutionRecord {
    /// Create a record with the name key derived from the raw name
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        let name = name.into();
        let normalized_name = normalize_name(&name);
        Self {
            name,
            normalized_name,
            country: country.into(),
            ranks: BTreeMap::new(),
            status: InstitutionStatus::Unknown,
            coordinates: None,
            sources: BTreeSet::new(),
        }
    }

    /// Record the rank this record carries for one source
    pub fn with_rank(mut self, source: &str, rank: impl Into<String>) -> Self {
        self.ranks.insert(source.to_string(), rank.into());
        self.sources.insert(source.to_string());
        self
    }

    /// Number of populated fields, used to pick the most complete record
    /// of a duplicate group. Each populated rank column counts once.
    pub fn completeness(&self) -> usize {
        let mut score = 0;
        if !self.name.trim().is_empty() {
            score += 1;
        }
        if !self.country.trim().is_empty() {
            score += 1;
        }
        score += self.ranks.values().filter(|r| !r.trim().is_empty()).count();
        if self.status.is_known() {
            score += 1;
        }
        if self.coordinates.is_some() {
            score += 1;
        }
        score
    }

    /// Rank string for one source, if populated
    pub fn rank(&self, source: &str) -> Option<&str> {
        self.ranks.get(source).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_name_derived() {
        let record = InstitutionRecord::new("The University of Georgia", "United States of America");
        assert_eq!(record.normalized_name, "university of georgia");
    }

    #[test]
    fn test_completeness_counts_ranks() {
        let bare = InstitutionRecord::new("A", "X");
        let ranked = InstitutionRecord::new("A", "X")
            .with_rank("qs", "5")
            .with_rank("the", "7");
        assert_eq!(bare.completeness(), 2);
        assert_eq!(ranked.completeness(), 4);
    }

    #[test]
    fn test_completeness_ignores_empty_fields() {
        let mut record = InstitutionRecord::new("A", "");
        record.ranks.insert("qs".to_string(), "  ".to_string());
        assert_eq!(record.completeness(), 1);

        record.status = InstitutionStatus::Private;
        record.coordinates = Some(Coordinates {
            latitude: 42.36,
            longitude: -71.09,
        });
        assert_eq!(record.completeness(), 3);
    }
}
