//! The typo-to-correction mapping backing the fallback corrector.

use std::collections::HashMap;

/// An immutable mapping from known misspellings to their corrections.
///
/// Keys may be single words or whole multi-word phrases and are lowercased
/// at construction. Duplicate keys resolve last-write-wins, matching the
/// behavior of the datasets this is loaded from. The map is built once at
/// startup and only read afterwards, so it can be shared across threads
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct CorrectionMap {
    entries: HashMap<String, String>,
    /// Keys in lexicographic order, for deterministic fuzzy-match scans.
    sorted_keys: Vec<String>,
}

impl CorrectionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        CorrectionMap {
            entries: HashMap::new(),
            sorted_keys: Vec::new(),
        }
    }

    /// Build a map from typo/correction pairs.
    ///
    /// Keys are lowercased; a key appearing more than once keeps the last
    /// value seen.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (typo, correction) in pairs {
            entries.insert(typo.as_ref().to_lowercase(), correction.into());
        }

        let mut sorted_keys: Vec<String> = entries.keys().cloned().collect();
        sorted_keys.sort();

        CorrectionMap {
            entries,
            sorted_keys,
        }
    }

    /// Look up the correction for a typo. The lookup key is lowercased.
    pub fn get(&self, typo: &str) -> Option<&str> {
        self.entries.get(&typo.to_lowercase()).map(|s| s.as_str())
    }

    /// Check whether a typo is present in the map.
    pub fn contains(&self, typo: &str) -> bool {
        self.entries.contains_key(&typo.to_lowercase())
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all (typo, correction) entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All typo keys in lexicographic order.
    ///
    /// The fuzzy matcher scans keys in this order so that equal-scoring
    /// candidates resolve reproducibly.
    pub fn sorted_keys(&self) -> &[String] {
        &self.sorted_keys
    }

    /// The built-in correction map of common search-query typos.
    ///
    /// These entries come from real home-improvement search logs and cover
    /// both single-word misspellings and whole mistyped phrases.
    pub fn builtin() -> Self {
        CorrectionMap::from_pairs([
            ("steele stake", "steel stake"),
            ("gas mowe", "gas mower"),
            ("metal plate cover gcfi", "metal plate cover gfci"),
            ("lawn sprkinler", "lawn sprinkler"),
            ("basemetnt window", "basement window"),
            ("vynal grip strip", "vinyl grip strip"),
            ("lawn mower- electic", "lawn mower- electric"),
            ("artric air portable", "arctic air portable"),
            ("roll roofing lap cemet", "roll roofing lap cement"),
            ("cieling", "ceiling"),
            ("celling light", "ceiling light"),
            ("vynal", "vinyl"),
            ("electic", "electric"),
            ("tolet", "toilet"),
            ("toliet", "toilet"),
            ("flourescent", "fluorescent"),
            ("florescent", "fluorescent"),
        ])
    }
}
