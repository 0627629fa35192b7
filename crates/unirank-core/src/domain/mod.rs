//! Domain models for institution records

mod rank;
mod record;

pub use rank::rank_ordinal;
pub use record::{Coordinates, InstitutionRecord, InstitutionStatus};
