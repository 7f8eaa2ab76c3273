//! Corpus training.
//!
//! Each document is tokenized line by line and every token is counted,
//! together with the pair it forms with the token before it. The preceding
//! token carries over line breaks but never crosses into the next document.
//!
//! ```rust
//! use bigram_autocorrect::model::FrequencyModel;
//! use bigram_autocorrect::trainer::Trainer;
//!
//! let mut model = FrequencyModel::new();
//! Trainer::new().train_text(&mut model, "le chat dort\nle chien aboie");
//! assert_eq!(model.bigram_count("dort", "le"), Some(1));
//! ```

use crate::error::{Error, Result};
use crate::model::FrequencyModel;
use crate::tokenizer::Tokenizer;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Totals for one training run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingReport {
    pub files_trained: usize,
    pub files_skipped: usize,
    pub tokens: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Trainer {
    tokenizer: Tokenizer,
}

impl Trainer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Train on one in-memory document. Returns the number of tokens counted.
    pub fn train_text(&self, model: &mut FrequencyModel, text: &str) -> u64 {
        let mut previous: Option<String> = None;
        let mut tokens = 0;
        for line in text.lines() {
            tokens += self.train_line(model, line, &mut previous);
        }
        tokens
    }

    /// Train on one document read from `reader`.
    ///
    /// Lines are decoded lossily so a stray invalid byte only affects the
    /// characters it covers.
    pub fn train_reader<R: BufRead>(&self, model: &mut FrequencyModel, mut reader: R) -> Result<u64> {
        let mut previous: Option<String> = None;
        let mut tokens = 0;
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            tokens += self.train_line(model, &line, &mut previous);
        }

        Ok(tokens)
    }

    pub fn train_file(&self, model: &mut FrequencyModel, path: &Path) -> Result<u64> {
        let file = File::open(path)?;
        self.train_reader(model, BufReader::new(file))
    }

    /// Train on every regular file directly inside `dir`, in path order.
    ///
    /// A directory that cannot be listed is fatal. A file that cannot be
    /// read is logged and skipped.
    pub fn train_directory(&self, model: &mut FrequencyModel, dir: &Path) -> Result<TrainingReport> {
        let entries = fs::read_dir(dir).map_err(|source| Error::CorpusUnavailable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_dir() {
                        log::debug!("Skipping subdirectory {}", path.display());
                    } else {
                        files.push(path);
                    }
                }
                Err(err) => log::warn!("Skipping unreadable entry in {}: {err}", dir.display()),
            }
        }
        files.sort();

        let mut report = TrainingReport::default();
        for path in &files {
            match self.train_file(model, path) {
                Ok(tokens) => {
                    log::debug!("Trained on {} ({tokens} tokens)", path.display());
                    report.files_trained += 1;
                    report.tokens += tokens;
                }
                Err(err) => {
                    log::warn!("Skipping {}: {err}", path.display());
                    report.files_skipped += 1;
                }
            }
        }

        log::info!(
            "Training done: {} files, {} skipped, {} tokens, {} unique words",
            report.files_trained,
            report.files_skipped,
            report.tokens,
            model.vocabulary_len()
        );
        Ok(report)
    }

    fn train_line(&self, model: &mut FrequencyModel, line: &str, previous: &mut Option<String>) -> u64 {
        let mut tokens = 0;
        for token in self.tokenizer.tokenize(line) {
            let token = token.into_string();
            model.observe(previous.as_deref(), &token);
            *previous = Some(token);
            tokens += 1;
        }
        tokens
    }
}
