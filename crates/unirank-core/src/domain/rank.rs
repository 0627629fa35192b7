//! Rank string parsing
//!
//! Sources publish ranks as single integers ("12"), tied ranks ("=12"),
//! ranges ("701-710"), or open bands ("1201+"). Only the first number is
//! numerically significant.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RANK_RE: Regex = Regex::new(r"^\s*=?\s*(\d+)").expect("valid rank regex");
}

/// Extract the ordinal position from a raw rank string
///
/// Returns `None` for malformed input; a missing ordinal is a matching
/// miss for callers, never an error.
pub fn rank_ordinal(raw: &str) -> Option<u32> {
    RANK_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integer() {
        assert_eq!(rank_ordinal("1"), Some(1));
        assert_eq!(rank_ordinal("  42 "), Some(42));
    }

    #[test]
    fn test_range_takes_first_number() {
        assert_eq!(rank_ordinal("701-710"), Some(701));
        assert_eq!(rank_ordinal("1201+"), Some(1201));
    }

    #[test]
    fn test_tied_rank() {
        assert_eq!(rank_ordinal("=12"), Some(12));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(rank_ordinal(""), None);
        assert_eq!(rank_ordinal("Reporter"), None);
        assert_eq!(rank_ordinal("n/a"), None);
    }
}
