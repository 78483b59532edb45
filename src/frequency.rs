use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Occurrence count of every distinct token in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable(BTreeMap<String, usize>);

impl FrequencyTable {
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Zero for tokens that never occurred.
    pub fn count(&self, token: &str) -> usize {
        self.0.get(token).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(token, count)| (token.as_str(), *count))
    }

    pub fn vocabulary(&self) -> VocabularySet {
        VocabularySet(self.0.keys().cloned().collect())
    }
}

/// Distinct tokens of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VocabularySet(BTreeSet<String>);

impl VocabularySet {
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self(
            tokens
                .into_iter()
                .map(|token| token.as_ref().to_string())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn intersection<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a str> {
        self.0.intersection(&other.0).map(String::as_str)
    }

    pub fn union_len(&self, other: &Self) -> usize {
        self.0.union(&other.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_matches_token_count() {
        let tokens = ["a", "b", "a", "c", "a"];
        let table = FrequencyTable::from_tokens(tokens);
        assert_eq!(table.total(), tokens.len());
        assert_eq!(table.count("a"), 3);
        assert_eq!(table.count("missing"), 0);
    }

    #[test]
    fn key_set_equals_vocabulary() {
        let tokens = ["x", "y", "x", "z"];
        let table = FrequencyTable::from_tokens(tokens);
        assert_eq!(table.vocabulary(), VocabularySet::from_tokens(tokens));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn empty_tokens_build_empty_structures() {
        let tokens: [&str; 0] = [];
        assert!(FrequencyTable::from_tokens(tokens).is_empty());
        assert!(VocabularySet::from_tokens(tokens).is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let table = FrequencyTable::from_tokens(["b", "a", "b"]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"a":1,"b":2}"#);
    }
}
