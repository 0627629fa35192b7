//! Bracket-aware name key sets
//!
//! Sources write the same institution as "Massachusetts Institute of
//! Technology (MIT)", "MIT", or the bare full name. A [`NameKeys`] set
//! holds every normalized spelling a record could be matched under: the
//! full name, the name with the bracketed alias stripped, the alias
//! itself when it looks like a real alias, and a known abbreviation
//! expansion.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeSet, HashMap, HashSet};

use super::normalization::normalize_name;

lazy_static! {
    static ref BRACKET_RE: Regex =
        Regex::new(r"^(.*?)\s*\((.*?)\)\s*$").expect("valid bracket regex");

    /// Bracketed suffixes that are not institution aliases: country
    /// codes, campus markers, renaming notes.
    static ref ALIAS_STOPLIST: HashSet<&'static str> = [
        // Country codes and names
        "usa", "uk", "u.k.", "us", "u.s.", "china", "prc", "canada",
        "australia", "nz", "n.z.", "singapore", "sg", "hong kong", "hk",
        "taiwan", "japan", "jp", "south korea", "korea", "india", "in",
        "germany", "de", "france", "fr",
        // Campus markers
        "main campus", "main campus.", "main", "branch", "branch campus",
        "campus", "state", "city", "center", "centre",
        // Renaming notes
        "formerly", "f.k.a", "f.k.a.", "aka", "previously", "merged from",
    ]
    .into_iter()
    .collect();

    /// Expansions for abbreviations that unambiguously name one school.
    static ref ABBREVIATIONS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("mit", "massachusetts institute of technology");
        m.insert("caltech", "california institute of technology");
        m.insert("eth zurich", "swiss federal institute of technology zurich");
        m.insert("eth", "swiss federal institute of technology");
        m.insert("nus", "national university of singapore");
        m.insert("ntu singapore", "nanyang technological university singapore");
        m.insert("ucl", "university college london");
        m.insert("uc berkeley", "university of california berkeley");
        m.insert("ucla", "university of california los angeles");
        m.insert("usc", "university of southern california");
        m.insert("ucsd", "university of california san diego");
        m.insert("nyu", "new york university");
        m.insert("uc", "university of california");
        m.insert("lse", "london school of economics");
        m
    };

    /// Words that never identify an institution on their own.
    static ref GENERIC_WORDS: HashSet<&'static str> = [
        "university", "college", "institute", "school", "academy",
        "center", "centre",
    ]
    .into_iter()
    .collect();
}

/// Split a raw name into its base and a bracketed alias
///
/// The alias is discarded (returned empty) when it equals or starts
/// with a stoplist entry. Both parts come back lowercased but not yet
/// normalized.
pub fn extract_base_and_alias(name: &str) -> (String, String) {
    let name = name.trim().to_lowercase();

    if let Some(caps) = BRACKET_RE.captures(&name) {
        let base = caps[1].trim().to_string();
        let alias = caps[2].trim().to_string();

        let discard = ALIAS_STOPLIST.contains(alias.as_str())
            || ALIAS_STOPLIST
                .iter()
                .any(|pattern| alias.starts_with(pattern));

        if discard {
            return (base, String::new());
        }
        return (base, alias);
    }

    (name, String::new())
}

/// The set of normalized name keys a record can be matched under
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameKeys {
    keys: BTreeSet<String>,
}

impl NameKeys {
    /// Build the key set for a raw institution name
    pub fn build(name: &str) -> Self {
        let (base, alias) = extract_base_and_alias(name);
        let name_norm = normalize_name(name);
        let base_norm = normalize_name(&base);
        let alias_norm = normalize_name(&alias);

        let mut keys = BTreeSet::new();
        if !name_norm.is_empty() {
            keys.insert(name_norm);
        }
        if !base_norm.is_empty() {
            keys.insert(base_norm);
        }

        if !alias_norm.is_empty() {
            // Short aliases are too ambiguous to stand alone as keys
            if alias_norm.len() > 2 && !ALIAS_STOPLIST.contains(alias_norm.as_str()) {
                keys.insert(alias_norm.clone());
            }
            if let Some(expansion) = ABBREVIATIONS.get(alias_norm.as_str()) {
                keys.insert(expansion.to_string());
            }
        }

        Self { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.as_str())
    }

    /// True when the key sets share at least one substantial key
    ///
    /// A shared key made up entirely of generic institutional words
    /// ("university", "college", ...) does not count; two unrelated
    /// schools sharing the word "University" must not merge.
    pub fn substantial_overlap(&self, other: &NameKeys) -> bool {
        self.keys
            .intersection(&other.keys)
            .any(|key| is_substantial(key))
    }
}

/// Whether a key carries any non-generic word
fn is_substantial(key: &str) -> bool {
    key.split_whitespace()
        .any(|word| !GENERIC_WORDS.contains(word))
}
