//! Bigram Autocorrect - a context-aware statistical spell corrector.
//!
//! # Overview
//!
//! A model of word and word-pair frequencies is learned from a corpus of
//! plain-text files. Out-of-vocabulary tokens are then replaced by the
//! vocabulary word within a small edit distance that scores best, where a
//! word that has been seen after the previous output token wins over a word
//! that is merely frequent.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Input text     │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Tokenizer      │ ← words, punctuation, URLs, emails (tokenizer.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Corrector      │ ← keeps known words, scores candidates (corrector.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Candidate Index │ ← distance-1 lookup by deletion variants (symspell.rs)
//! │ + distance scan │ ← bounded Levenshtein (distance.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Frequency Model │ ← unigram + bigram counts (model.rs)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - `tokenizer`: Text to lower-cased tokens
//! - `distance`: Code-point Levenshtein distance
//! - `model`: Unigram and bigram tables
//! - `symspell`: Deletion-variant candidate index
//! - `trainer`: Corpus training
//! - `store`: Binary model persistence
//! - `dictionary`: Plain-text count files
//! - `corrector`: Scoring and the request/response record
//! - `shared`: Atomically swappable corrector snapshot
//! - `bootstrap`: Load-or-train startup
//! - `config`: User configuration

pub mod bootstrap;
pub mod config;
pub mod corrector;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod model;
pub mod shared;
pub mod store;
pub mod symspell;
pub mod tokenizer;
pub mod trainer;

pub use corrector::{CorrectionResponse, CorrectionSettings, Corrector};
pub use error::{Error, Result};
pub use model::FrequencyModel;
