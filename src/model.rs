//! Unigram and bigram frequency tables.
//!
//! A `FrequencyModel` is filled once (by the trainer, a plain-text import or
//! a load from disk) and then handed to a [`Corrector`](crate::corrector::Corrector),
//! which only ever reads it.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyModel {
    /// word → number of occurrences.
    unigrams: AHashMap<String, u64>,
    /// preceding word → following word → number of co-occurrences.
    /// Pairs never observed have no entry.
    bigrams: AHashMap<String, AHashMap<String, u64>>,
}

impl FrequencyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`, following `previous` in the same
    /// document when there is one.
    pub fn observe(&mut self, previous: Option<&str>, token: &str) {
        self.add_count(token, 1);
        if let Some(previous) = previous {
            self.add_bigram(previous, token, 1);
        }
    }

    pub fn add_count(&mut self, word: &str, count: u64) {
        let entry = self.unigrams.entry(word.to_string()).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    pub fn add_bigram(&mut self, previous: &str, next: &str, count: u64) {
        let entry = self
            .bigrams
            .entry(previous.to_string())
            .or_default()
            .entry(next.to_string())
            .or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Replace the count of `word`, as opposed to adding to it.
    pub fn set_count(&mut self, word: &str, count: u64) {
        self.unigrams.insert(word.to_string(), count);
    }

    pub fn set_bigram(&mut self, previous: &str, next: &str, count: u64) {
        self.bigrams
            .entry(previous.to_string())
            .or_default()
            .insert(next.to_string(), count);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.unigrams.contains_key(word)
    }

    /// Occurrence count of `word`, zero if unknown.
    pub fn count(&self, word: &str) -> u64 {
        self.unigrams.get(word).copied().unwrap_or(0)
    }

    /// Recorded count for `previous` followed by `next`, if that pair was
    /// ever observed.
    pub fn bigram_count(&self, previous: &str, next: &str) -> Option<u64> {
        self.bigrams.get(previous)?.get(next).copied()
    }

    pub fn words(&self) -> impl Iterator<Item = (&str, u64)> {
        self.unigrams.iter().map(|(word, &count)| (word.as_str(), count))
    }

    pub fn bigrams(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.bigrams.iter().flat_map(|(previous, followers)| {
            followers
                .iter()
                .map(move |(next, &count)| (previous.as_str(), next.as_str(), count))
        })
    }

    /// Number of distinct words.
    pub fn vocabulary_len(&self) -> usize {
        self.unigrams.len()
    }

    /// Number of distinct ordered pairs.
    pub fn bigram_len(&self) -> usize {
        self.bigrams.values().map(|followers| followers.len()).sum()
    }

    pub fn total_tokens(&self) -> u64 {
        self.unigrams.values().fold(0u64, |acc, &count| acc.saturating_add(count))
    }

    pub fn is_empty(&self) -> bool {
        self.unigrams.is_empty() && self.bigrams.is_empty()
    }
}
