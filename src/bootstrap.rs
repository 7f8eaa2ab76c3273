//! Startup sequence: load the persisted model, or train one from the corpus
//! and persist it, then build the corrector.

use crate::config::Config;
use crate::corrector::Corrector;
use crate::error::Result;
use crate::model::FrequencyModel;
use crate::store;
use crate::trainer::Trainer;

/// Load the model at `config.model_path`, training and saving a new one from
/// `config.corpus_dir` when no usable model exists.
pub fn load_or_train(config: &Config) -> Result<FrequencyModel> {
    if let Some(model) = store::load_if_present(&config.model_path) {
        return Ok(model);
    }

    log::info!(
        "No model found, training from {}",
        config.corpus_dir.display()
    );
    train_and_save(config)
}

/// Train from `config.corpus_dir` unconditionally and persist the result.
///
/// A save failure is logged and the freshly trained model is still returned.
pub fn train_and_save(config: &Config) -> Result<FrequencyModel> {
    let mut model = FrequencyModel::new();
    Trainer::new().train_directory(&mut model, &config.corpus_dir)?;

    if let Err(err) = store::save_to_disk(&model, &config.model_path) {
        log::error!(
            "Failed to save model to {}: {err}",
            config.model_path.display()
        );
    }
    Ok(model)
}

pub fn build_corrector(config: &Config) -> Result<Corrector> {
    let model = load_or_train(config)?;
    Ok(Corrector::new(model, config.settings()))
}
