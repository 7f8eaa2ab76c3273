//! Sentence correction: candidate generation, context scoring and the
//! request/response record.
//!
//! Tokens are processed left to right. A token already in the vocabulary is
//! always kept, and so is anything that is not a word (numbers, `14h`,
//! punctuation, URLs, other scripts). An unknown word is replaced by the candidate with the
//! highest score, where
//!
//! ```text
//! score(c) = count(c) + bigram_count(previous_output, c) * context_weight
//! ```
//!
//! Ties go to the lexicographically smallest candidate. The chosen word, not
//! the misspelling, is the context for the next token.

use crate::distance::levenshtein_within;
use crate::model::FrequencyModel;
use crate::symspell::CandidateIndex;
use crate::tokenizer::{Token, TokenKind, Tokenizer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Default weight of one observed bigram relative to one unigram occurrence.
pub const DEFAULT_CONTEXT_WEIGHT: u64 = 1000;
/// Default largest edit distance considered for a candidate.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// How request text is split before correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestTokenization {
    /// Lower-case and split on whitespace only; each run is one token.
    #[default]
    Whitespace,
    /// Split on whitespace, then run the training tokenizer over each run so
    /// `chat,` becomes `chat` and `,`. Runs it cannot fully cover stay whole.
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionSettings {
    pub max_edit_distance: usize,
    pub context_weight: u64,
    pub tokenization: RequestTokenization,
}

impl Default for CorrectionSettings {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            context_weight: DEFAULT_CONTEXT_WEIGHT,
            tokenization: RequestTokenization::Whitespace,
        }
    }
}

/// A ranked replacement candidate for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub term: String,
    pub distance: usize,
    pub frequency: u64,
    pub score: u64,
}

/// Result of one correction request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResponse {
    pub original: String,
    #[serde(rename = "corrige")]
    pub corrected: String,
}

/// The correction engine: a frozen frequency model plus its candidate index.
///
/// Every method takes `&self`, so one `Corrector` can serve any number of
/// threads through an `Arc` without locking.
pub struct Corrector {
    model: FrequencyModel,
    index: CandidateIndex,
    tokenizer: Tokenizer,
    settings: CorrectionSettings,
}

impl Corrector {
    /// Freeze `model` and build its candidate index.
    pub fn new(model: FrequencyModel, settings: CorrectionSettings) -> Self {
        let index = CandidateIndex::build(&model);
        Self {
            model,
            index,
            tokenizer: Tokenizer::new(),
            settings,
        }
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Correct `input` and return the corrected tokens joined by single spaces.
    pub fn correct(&self, input: &str) -> String {
        let mut output: Vec<String> = Vec::new();

        for token in self.split(input) {
            let chosen = {
                let previous = output.last().map(String::as_str);
                self.choose(token, previous)
            };
            output.push(chosen);
        }

        output.join(" ")
    }

    /// Correct `input` and pair the result with the original text.
    pub fn respond(&self, input: &str) -> CorrectionResponse {
        if input.is_empty() {
            return CorrectionResponse::default();
        }
        CorrectionResponse {
            original: input.to_string(),
            corrected: self.correct(input),
        }
    }

    /// Ranked candidates for `token` following `previous`, best first.
    ///
    /// Sorted by score (descending) then term (ascending); the first entry
    /// is what [`correct`](Self::correct) would pick for an unknown token.
    pub fn suggest(&self, token: &str, previous: Option<&str>) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = self
            .candidates(token)
            .into_iter()
            .map(|(term, distance)| {
                let frequency = self.model.count(term);
                Suggestion {
                    term: term.to_string(),
                    distance,
                    frequency,
                    score: self.score(term, previous),
                }
            })
            .collect();

        suggestions.sort_by(|a, b| match b.score.cmp(&a.score) {
            Ordering::Equal => a.term.cmp(&b.term),
            other => other,
        });

        suggestions
    }

    /// Vocabulary words within the configured edit distance of `token`,
    /// with their distance.
    ///
    /// Distance-1 recall comes from the candidate index. When the bound is
    /// above 1 the rest of the vocabulary is scanned for the farther matches.
    pub fn candidates(&self, token: &str) -> BTreeMap<&str, usize> {
        let max_distance = self.settings.max_edit_distance;
        let mut found: BTreeMap<&str, usize> = BTreeMap::new();

        for word in self.index.lookup(token) {
            if let Some(distance) = levenshtein_within(token, word, max_distance) {
                found.insert(word, distance);
            }
        }

        if max_distance > 1 {
            for (word, _) in self.model.words() {
                if found.contains_key(word) {
                    continue;
                }
                if let Some(distance) = levenshtein_within(token, word, max_distance) {
                    found.insert(word, distance);
                }
            }
        }

        found
    }

    fn choose(&self, token: Token, previous: Option<&str>) -> String {
        if token.kind() != TokenKind::Word || self.model.contains(token.as_str()) {
            return token.into_string();
        }
        let token = token.into_string();

        let best = self
            .candidates(&token)
            .into_keys()
            .map(|candidate| (self.score(candidate, previous), candidate))
            .max_by(|(score_a, term_a), (score_b, term_b)| {
                score_a.cmp(score_b).then_with(|| term_b.cmp(term_a))
            });

        match best {
            Some((_, candidate)) => {
                log::debug!("Corrected {token:?} -> {candidate:?}");
                candidate.to_string()
            }
            None => token,
        }
    }

    fn score(&self, candidate: &str, previous: Option<&str>) -> u64 {
        let frequency = self.model.count(candidate);
        let context = previous
            .and_then(|previous| self.model.bigram_count(previous, candidate))
            .unwrap_or(0);
        frequency.saturating_add(context.saturating_mul(self.settings.context_weight))
    }

    fn split(&self, input: &str) -> Vec<Token> {
        match self.settings.tokenization {
            RequestTokenization::Whitespace => self.tokenizer.split_whitespace(input),
            RequestTokenization::Full => self.tokenizer.tokenize_runs(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::levenshtein;
    use crate::trainer::Trainer;

    fn corrector(unigrams: &[(&str, u64)], bigrams: &[(&str, &str, u64)]) -> Corrector {
        let mut model = FrequencyModel::new();
        for (word, count) in unigrams {
            model.add_count(word, *count);
        }
        for (previous, next, count) in bigrams {
            model.add_bigram(previous, next, *count);
        }
        Corrector::new(model, CorrectionSettings::default())
    }

    fn full(corrector: Corrector) -> Corrector {
        let settings = CorrectionSettings {
            tokenization: RequestTokenization::Full,
            ..corrector.settings
        };
        Corrector::new(corrector.model, settings)
    }

    #[test]
    fn test_context_overrides_frequency() {
        let corrector = corrector(
            &[("le", 100), ("chat", 5), ("chien", 50), ("chats", 1)],
            &[("le", "chat", 10)],
        );
        assert_eq!(corrector.correct("le chatt"), "le chat");
    }

    #[test]
    fn test_frequency_wins_without_context() {
        let corrector = corrector(&[("chat", 5), ("char", 50)], &[]);
        assert_eq!(corrector.correct("chax"), "char");
    }

    #[test]
    fn test_known_words_are_never_replaced() {
        let corrector = corrector(
            &[("le", 100), ("chat", 1), ("char", 500), ("dort", 10)],
            &[("le", "char", 99)],
        );
        assert_eq!(corrector.correct("le chat dort"), "le chat dort");
    }

    #[test]
    fn test_tie_breaks_lexicographically() {
        let corrector = corrector(&[("bat", 3), ("cat", 3), ("rat", 3)], &[]);
        for _ in 0..5 {
            assert_eq!(corrector.correct("zat"), "bat");
        }
    }

    #[test]
    fn test_uncorrectable_token_passes_through() {
        let corrector = corrector(&[("chat", 5)], &[]);
        assert_eq!(corrector.correct("le xylophone"), "le xylophone");
    }

    #[test]
    fn test_corrections_compound_left_to_right() {
        // "chatt" becomes "chat", which then makes "dort" the best fix for "dorr".
        let corrector = corrector(
            &[("le", 10), ("chat", 5), ("dort", 1), ("mort", 40), ("dors", 30)],
            &[("le", "chat", 3), ("chat", "dort", 2)],
        );
        assert_eq!(corrector.correct("le chatt dorr"), "le chat dort");
    }

    #[test]
    fn test_finds_distance_two_candidates() {
        let corrector = corrector(&[("maison", 10)], &[]);
        assert_eq!(corrector.correct("mazsonn"), "maison");
        assert_eq!(corrector.correct("mzzzonn"), "mzzzonn");
    }

    #[test]
    fn test_distance_one_bound_uses_index_only() {
        let mut model = FrequencyModel::new();
        model.add_count("maison", 10);
        model.add_count("chat", 1);
        let settings = CorrectionSettings {
            max_edit_distance: 1,
            ..CorrectionSettings::default()
        };
        let corrector = Corrector::new(model, settings);

        assert_eq!(corrector.correct("maisn"), "maison");
        assert_eq!(corrector.correct("mazsonn"), "mazsonn");
        // An adjacent swap is distance 2 and must be rejected at this bound.
        assert_eq!(corrector.correct("caht"), "caht");
    }

    #[test]
    fn test_index_and_scan_agree() {
        let words = ["chat", "chats", "chien", "char", "été", "ete", "le", "la", "les", "maison"];
        let unigrams: Vec<(&str, u64)> = words.iter().map(|w| (*w, 1)).collect();
        let corrector = corrector(&unigrams, &[]);

        for token in ["cht", "chatt", "éta", "l", "mason", "chein", ""] {
            let candidates = corrector.candidates(token);
            for word in words {
                let distance = levenshtein(token, word);
                if distance <= 2 {
                    assert_eq!(candidates.get(word), Some(&distance), "{word:?} for {token:?}");
                } else {
                    assert!(!candidates.contains_key(word));
                }
            }
        }
    }

    #[test]
    fn test_suggest_ranks_by_score() {
        let corrector = corrector(
            &[("le", 100), ("chat", 5), ("chien", 50), ("chas", 5)],
            &[("le", "chat", 1)],
        );

        let ranked = corrector.suggest("chat", Some("le"));
        let terms: Vec<&str> = ranked.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["chat", "chas"]);
        assert_eq!(ranked[0].score, 1005);
        assert_eq!(ranked[0].distance, 0);
        assert_eq!(ranked[1].distance, 1);

        let ranked = corrector.suggest("chat", None);
        assert_eq!(ranked[0].term, "chas");
        assert_eq!(ranked[1].term, "chat");
    }

    #[test]
    fn test_empty_and_punctuation_input() {
        assert_eq!(full(corrector(&[("a", 1), (".", 2)], &[])).correct("a?!"), "a ? !");

        let corrector = corrector(&[("a", 1), (".", 2)], &[]);

        assert_eq!(corrector.correct(""), "");
        assert_eq!(corrector.correct("   "), "");
        // Punctuation is kept as typed, never rewritten to a nearby token.
        assert_eq!(corrector.correct("?!"), "?!");
        assert_eq!(corrector.correct("? !"), "? !");
        assert_eq!(corrector.correct("."), ".");
        assert!(corrector.candidates("").contains_key("a"));
        assert_eq!(corrector.suggest("", None)[0].term, ".");

        let response = corrector.respond("");
        assert_eq!(response, CorrectionResponse::default());
    }

    #[test]
    fn test_whitespace_tokenization() {
        let corrector = corrector(&[("chat,", 1), ("chat", 9)], &[]);
        assert_eq!(corrector.correct("Chat,  CHATT"), "chat, chat");
    }

    #[test]
    fn test_non_words_pass_through_unchanged() {
        let unigrams = [("j'ai", 4), ("chats", 3), ("a", 50), ("rendez-vous", 2), ("à", 40)];
        for corrector in [corrector(&unigrams, &[]), full(corrector(&unigrams, &[]))] {
            assert_eq!(corrector.correct("J'ai 3 chats"), "j'ai 3 chats");
            assert_eq!(corrector.correct("rendez-vous à 14h"), "rendez-vous à 14h");
            assert_eq!(corrector.correct("Москва chats"), "москва chats");
            assert_eq!(corrector.correct("j'ai 2 chatz"), "j'ai 2 chats");
        }
    }

    #[test]
    fn test_idempotent_on_training_text() {
        let mut model = FrequencyModel::new();
        let text = "Le petit chat dort sur le canapé, près de la fenêtre.";
        Trainer::new().train_text(&mut model, text);
        let settings = CorrectionSettings {
            tokenization: RequestTokenization::Full,
            ..CorrectionSettings::default()
        };
        let corrector = Corrector::new(model, settings);

        let expected = "le petit chat dort sur le canapé , près de la fenêtre .";
        assert_eq!(corrector.correct(text), expected);
        assert_eq!(corrector.correct(expected), expected);
    }

    #[test]
    fn test_accented_input() {
        let corrector = corrector(&[("été", 10), ("ete", 1), ("tête", 4)], &[]);
        assert_eq!(corrector.correct("étè"), "été");
    }

    #[test]
    fn test_response_serializes() {
        let corrector = corrector(&[("le", 10), ("chat", 5)], &[("le", "chat", 1)]);
        let response = corrector.respond("Le chatt");

        assert_eq!(response.original, "Le chatt");
        assert_eq!(response.corrected, "le chat");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"original":"Le chatt","corrige":"le chat"}"#);
    }
}
