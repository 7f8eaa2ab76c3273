use crate::corrector::{
    CorrectionSettings, RequestTokenization, DEFAULT_CONTEXT_WEIGHT, DEFAULT_MAX_EDIT_DISTANCE,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "bigram-autocorrect";
const CONFIG_NAME: &str = "config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model_path: PathBuf,
    pub corpus_dir: PathBuf,
    pub max_edit_distance: i32,
    pub context_weight: u64,
    pub request_tokenizer: RequestTokenization,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            corpus_dir: PathBuf::from("data"),
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE as i32,
            context_weight: DEFAULT_CONTEXT_WEIGHT,
            request_tokenizer: RequestTokenization::Whitespace,
        }
    }
}

impl Config {
    /// Load from `path`, or from the platform config directory when `None`.
    /// A config that cannot be read falls back to the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let loaded = match path {
            Some(path) => confy::load_path(path),
            None => confy::load(APP_NAME, Some(CONFIG_NAME)),
        };

        match loaded {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to load config, using defaults: {err}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => confy::store_path(path, self)?,
            None => confy::store(APP_NAME, Some(CONFIG_NAME), self)?,
        }
        Ok(())
    }

    pub fn settings(&self) -> CorrectionSettings {
        CorrectionSettings {
            max_edit_distance: self.max_edit_distance.max(0) as usize,
            context_weight: self.context_weight,
            tokenization: self.request_tokenizer,
        }
    }
}

/// `<data dir>/bigram-autocorrect/model.bin`, or `model.bin` in the working
/// directory when the platform has no data directory.
fn default_model_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(mut path) => {
            path.push(APP_NAME);
            path.push("model.bin");
            path
        }
        None => PathBuf::from("model.bin"),
    }
}
