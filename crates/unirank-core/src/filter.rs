//! Country exclusion filtering
//!
//! Runs apply an optional exclusion list before any matching; the
//! comparison is against the raw region string, trimmed, because
//! sources spell excluded regions in several ways ("Hong Kong SAR,
//! China" vs "Hong Kong") that the alias map deliberately does not
//! collapse.

use std::collections::HashSet;

use crate::domain::InstitutionRecord;

/// A configured set of excluded countries/regions
#[derive(Clone, Debug, Default)]
pub struct CountryFilter {
    excluded: HashSet<String>,
}

impl CountryFilter {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded
                .into_iter()
                .map(|s| s.into().trim().to_string())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    pub fn is_excluded(&self, country: &str) -> bool {
        self.excluded.contains(country.trim())
    }

    /// Drop records whose country is excluded; returns kept records and
    /// the number dropped
    pub fn apply(&self, records: Vec<InstitutionRecord>) -> (Vec<InstitutionRecord>, usize) {
        if self.excluded.is_empty() {
            return (records, 0);
        }

        let before = records.len();
        let kept: Vec<InstitutionRecord> = records
            .into_iter()
            .filter(|r| !self.is_excluded(&r.country))
            .collect();
        let dropped = before - kept.len();
        (kept, dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excludes_configured_regions() {
        let filter = CountryFilter::new(["Atlantis", "Mu"]);
        let records = vec![
            InstitutionRecord::new("A", "Atlantis"),
            InstitutionRecord::new("B", "France"),
        ];

        let (kept, dropped) = filter.apply(records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "B");
        assert_eq!(dropped, 1);
    }

    #[test]
    fn test_trims_before_comparing() {
        let filter = CountryFilter::new([" Atlantis "]);
        assert!(filter.is_excluded("Atlantis"));
        assert!(!filter.is_excluded("Atlantis Minor"));
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = CountryFilter::default();
        let records = vec![InstitutionRecord::new("A", "Anywhere")];
        let (kept, dropped) = filter.apply(records);
        assert_eq!(kept.len(), 1);
        assert_eq!(dropped, 0);
    }
}
