//! Entity resolution for institution records
//!
//! Three equivalence strategies coexist, used in different merge
//! contexts:
//!
//! - exact `(country, normalized name)` keys for folding authoritative
//!   ranking tables together ([`matching::exact_key_match`]),
//! - bracket-aware key sets for deduplicating an already-merged table
//!   ([`matching::same_institution`]),
//! - fuzzy ratio clustering for unifying raw cross-source name lists
//!   ([`clustering::unify_sources`]).

pub mod clustering;
pub mod grouping;
pub mod keys;
pub mod matching;
pub mod normalization;

pub use clustering::{unify_sources, UnifyConfig};
pub use grouping::group_duplicates;
pub use keys::NameKeys;
pub use matching::{exact_key, exact_key_match, same_institution};
