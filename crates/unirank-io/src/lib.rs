//! Table I/O for unirank
//!
//! Reads per-source ranking tables from CSV into
//! [`unirank_core::InstitutionRecord`]s, with fail-fast validation of
//! the configured column mapping, and writes the merged table back out.

pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod schema;

pub use csv_reader::read_table;
pub use csv_writer::write_merged;
pub use error::{IoError, IoResult};
pub use schema::TableSpec;
