//! Binary persistence of a [`FrequencyModel`].
//!
//! The file holds the vocabulary followed by the bigram table, bincode
//! encoded. The candidate index is derived data and is rebuilt after loading.

use crate::error::Result;
use crate::model::FrequencyModel;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `model` to `path`, replacing any previous file atomically.
pub fn save_to_disk(model: &FrequencyModel, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, model)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    log::info!(
        "Model saved to {} ({} words, {} pairs)",
        path.display(),
        model.vocabulary_len(),
        model.bigram_len()
    );
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<FrequencyModel> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let model: FrequencyModel = bincode::deserialize_from(reader)?;
    Ok(model)
}

/// Load the model at `path`, treating a missing or unreadable file as "no
/// model yet".
pub fn load_if_present(path: &Path) -> Option<FrequencyModel> {
    match load_from_disk(path) {
        Ok(model) => {
            log::info!(
                "Model loaded from {} ({} words)",
                path.display(),
                model.vocabulary_len()
            );
            Some(model)
        }
        Err(err) => {
            log::warn!("No usable model at {}: {err}", path.display());
            None
        }
    }
}
