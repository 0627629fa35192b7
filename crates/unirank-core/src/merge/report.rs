//! Audit trail of merge decisions
//!
//! Merge calls return a [`MergeReport`] value instead of appending to
//! process-wide state; the caller decides whether to render or drop it.

/// One recorded merge decision
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportEntry {
    /// A source table was folded into the accumulating set
    TableApplied {
        source: String,
        matched: usize,
        appended: usize,
    },
    /// A duplicate group was collapsed into its representative
    GroupCollapsed {
        country: String,
        member_names: Vec<String>,
        kept_name: String,
        /// "field from <raw name>" descriptions for backfilled fields
        filled: Vec<String>,
    },
}

/// Human-readable log of one merge run, not meant for programmatic
/// consumption
#[derive(Clone, Debug, Default)]
pub struct MergeReport {
    pub entries: Vec<ReportEntry>,
}

impl MergeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Append another report's entries, preserving order
    pub fn extend(&mut self, other: MergeReport) {
        self.entries.extend(other.entries);
    }

    /// Number of duplicate groups that were collapsed
    pub fn groups_collapsed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, ReportEntry::GroupCollapsed { .. }))
            .count()
    }

    /// Render the report as an append-friendly text log
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                ReportEntry::TableApplied {
                    source,
                    matched,
                    appended,
                } => {
                    out.push_str(&format!(
                        "MERGE: source '{}': {} matched, {} new institutions\n",
                        source, matched, appended
                    ));
                }
                ReportEntry::GroupCollapsed {
                    country,
                    member_names,
                    kept_name,
                    filled,
                } => {
                    out.push_str(&format!(
                        "DEDUP: [{}] {}\n",
                        country,
                        member_names.join(" | ")
                    ));
                    out.push_str(&format!("  -> keep: {}\n", kept_name));
                    if !filled.is_empty() {
                        out.push_str(&format!("  -> filled: {}\n", filled.join(", ")));
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_group() {
        let mut report = MergeReport::new();
        report.push(ReportEntry::GroupCollapsed {
            country: "United States of America".to_string(),
            member_names: vec!["MIT".to_string(), "M.I.T.".to_string()],
            kept_name: "MIT".to_string(),
            filled: vec!["status from M.I.T.".to_string()],
        });

        let text = report.render();
        assert!(text.contains("MIT | M.I.T."));
        assert!(text.contains("-> keep: MIT"));
        assert!(text.contains("status from M.I.T."));
        assert_eq!(report.groups_collapsed(), 1);
    }

    #[test]
    fn test_render_table_applied() {
        let mut report = MergeReport::new();
        report.push(ReportEntry::TableApplied {
            source: "the".to_string(),
            matched: 12,
            appended: 3,
        });
        assert!(report.render().contains("source 'the': 12 matched, 3 new"));
    }
}
