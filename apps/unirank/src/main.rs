//! unirank merge CLI
//!
//! Reads the source ranking tables named in a TOML run configuration,
//! folds them into one deduplicated dataset, and writes the merged CSV
//! plus an optional audit log of every merge decision.

mod config;

use std::error::Error;

use tracing::info;

use unirank_core::filter::CountryFilter;
use unirank_core::merge::{deduplicate, merge_ranking_tables, sort_by_rank, RankingTable};
use unirank_io::{read_table, write_merged};

use crate::config::RunConfig;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .ok_or("usage: unirank <config.toml>")?;
    let config = RunConfig::load(&config_path)?;
    let sources = config.sources();

    let filter = CountryFilter::new(config.exclude_countries.iter().cloned());

    let mut tables = Vec::new();
    for table in &config.tables {
        let records = read_table(&table.path, &table.spec)?;
        let (records, dropped) = filter.apply(records);
        info!(
            source = %table.spec.source,
            rows = records.len(),
            excluded = dropped,
            "table loaded"
        );
        tables.push(RankingTable::new(table.spec.source.clone(), records));
    }

    let (mut merged, mut report) = merge_ranking_tables(tables);
    info!(rows = merged.len(), "ranking tables merged");

    if config.dedup.enabled {
        let (kept, dedup_report) = deduplicate(merged);
        info!(
            rows = kept.len(),
            groups_collapsed = dedup_report.groups_collapsed(),
            "duplicates collapsed"
        );
        merged = kept;
        report.extend(dedup_report);
    }

    // The first configured table is the primary ranking for ordering
    if let Some(base) = sources.first() {
        sort_by_rank(&mut merged, base);
    }

    write_merged(&config.output, &merged, &sources)?;
    info!(path = %config.output, rows = merged.len(), "merged table written");

    if let Some(log_path) = &config.audit_log {
        std::fs::write(log_path, report.render())?;
        info!(path = %log_path, "audit log written");
    }

    Ok(())
}
