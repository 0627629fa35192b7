//! Core library for the unirank ranking merger
//!
//! Resolves university records scraped from different ranking sources
//! (QS, THE, US News, ...) to real-world institutions and folds their
//! per-source ranking tables into one deduplicated dataset.
//!
//! The library is batch-oriented and side-effect free: it consumes fully
//! materialized record tables and returns the merged table together with
//! a [`merge::MergeReport`] describing every merge decision.

pub mod dedup;
pub mod domain;
pub mod filter;
pub mod merge;

pub use domain::{Coordinates, InstitutionRecord, InstitutionStatus};
pub use filter::CountryFilter;
pub use merge::{MergeReport, ReportEntry};
