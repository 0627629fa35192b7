//! Text normalization for institution comparison
//!
//! All functions are pure and total over arbitrary text; missing values
//! normalize to the empty string or `Unknown` rather than failing.

use lazy_static::lazy_static;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

use crate::domain::InstitutionStatus;

lazy_static! {
    /// Canonical country names for the spellings sources actually use.
    /// Idempotent: no value appears as a key.
    static ref COUNTRY_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("United States", "United States of America");
        m.insert("USA", "United States of America");
        m.insert("US", "United States of America");
        m.insert("UK", "United Kingdom");
        m.insert("South Korea", "Republic of Korea");
        m.insert("North Korea", "Democratic People's Republic of Korea");
        m.insert("Holland", "Netherlands");
        m.insert("Macao", "Macau");
        m.insert("Russia", "Russian Federation");
        m.insert("Czech Republic", "Czechia");
        m
    };
}

const PRIVATE_INDICATORS: [&str; 4] = ["private", "not for profit", "independent", "proprietary"];
const PUBLIC_INDICATORS: [&str; 4] = ["public", "government", "state", "federal"];

/// Normalize an institution name into its comparison key
///
/// Lowercases, replaces commas with spaces (so "University of
/// California, Berkeley" collides with "University of California
/// Berkeley"), collapses whitespace, and strips leading "the" tokens.
/// Idempotent.
pub fn normalize_name(raw: &str) -> String {
    let mut result = collapse_whitespace(&raw.trim().to_lowercase().replace(',', " "));

    while let Some(rest) = result.strip_prefix("the ") {
        result = rest.to_string();
    }

    result.trim().to_string()
}

/// Aggressively fold a name for fuzzy cross-source comparison
///
/// Unicode NFKD, keep only ASCII alphanumerics and spaces, lowercase,
/// collapse whitespace. Unlike [`normalize_name`] this also drops
/// punctuation and diacritics, which matters when comparing names
/// transliterated differently by different sources.
pub fn fold_name(raw: &str) -> String {
    let filtered: String = raw
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect();

    collapse_whitespace(&filtered.to_lowercase())
        .trim()
        .to_string()
}

/// Map a raw country/region string to its canonical country name
///
/// Unmapped values pass through trimmed, so the function is total; the
/// alias table maps no value back onto a key, so it is idempotent.
pub fn normalize_country(raw: &str) -> String {
    let trimmed = raw.trim();
    match COUNTRY_ALIASES.get(trimmed) {
        Some(canonical) => canonical.to_string(),
        None => trimmed.to_string(),
    }
}

/// Classify an institution's running status from free text
///
/// Case-insensitive substring match; private indicators take precedence
/// when both lists match ("private state-approved" is Private).
pub fn normalize_status(raw: &str) -> InstitutionStatus {
    let status = raw.trim().to_lowercase();
    if status.is_empty() {
        return InstitutionStatus::Unknown;
    }

    if PRIVATE_INDICATORS.iter().any(|term| status.contains(term)) {
        return InstitutionStatus::Private;
    }
    if PUBLIC_INDICATORS.iter().any(|term| status.contains(term)) {
        return InstitutionStatus::Public;
    }

    InstitutionStatus::Unknown
}

/// Collapse multiple whitespace characters into a single space
pub(crate) fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result
}
