// symspell.rs - Symmetric-delete candidate index
// Maps every one-deletion variant of a vocabulary word back to the word, so
// that words within edit distance 1 of an input are found without scanning
// the whole vocabulary.

use crate::model::FrequencyModel;
use ahash::{AHashMap, AHashSet};

pub struct CandidateIndex {
    // Delete dictionary: variant -> words producing it (the word itself included)
    deletes: AHashMap<String, Vec<String>>,
}

impl CandidateIndex {
    /// Build the index from the final vocabulary of `model`.
    pub fn build(model: &FrequencyModel) -> Self {
        let mut index = Self {
            deletes: AHashMap::new(),
        };
        for (word, _) in model.words() {
            index.insert(word);
        }
        log::debug!(
            "Candidate index built: {} keys for {} words",
            index.key_count(),
            model.vocabulary_len()
        );
        index
    }

    fn insert(&mut self, word: &str) {
        for variant in Self::generate_deletes(word) {
            self.deletes
                .entry(variant)
                .or_default()
                .push(word.to_string());
        }
    }

    /// Vocabulary words sharing a variant with `input`.
    ///
    /// Contains every word within edit distance 1 of `input`; it may also
    /// contain some words at distance 2 (adjacent swaps, for instance), so
    /// callers that need an exact bound must verify the distance.
    pub fn lookup(&self, input: &str) -> Vec<&str> {
        let mut seen = AHashSet::new();
        let mut candidates = Vec::new();

        for variant in Self::generate_deletes(input) {
            if let Some(words) = self.deletes.get(&variant) {
                for word in words {
                    if seen.insert(word.as_str()) {
                        candidates.push(word.as_str());
                    }
                }
            }
        }

        candidates.sort_unstable();
        candidates
    }

    /// `word` itself plus every string obtained by removing one character.
    fn generate_deletes(word: &str) -> AHashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut deletes = AHashSet::with_capacity(chars.len() + 1);
        deletes.insert(word.to_string());

        for i in 0..chars.len() {
            let mut new_word = String::with_capacity(word.len());
            for (j, &c) in chars.iter().enumerate() {
                if i != j {
                    new_word.push(c);
                }
            }
            deletes.insert(new_word);
        }

        deletes
    }

    /// Number of distinct variant keys.
    pub fn key_count(&self) -> usize {
        self.deletes.len()
    }
}
