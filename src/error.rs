//! Error type shared by the library modules.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("model encoding error: {0}")]
    ModelEncoding(#[from] bincode::Error),

    #[error("configuration error: {0}")]
    Config(#[from] confy::ConfyError),

    /// The corpus directory could not be listed. Without a persisted model
    /// this leaves nothing to serve from.
    #[error("corpus directory {} is unavailable: {source}", .path.display())]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move model into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, Error>;
