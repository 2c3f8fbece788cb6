use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort processing of a single file, never the batch
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {path}")]
    NotUtf8 { path: PathBuf },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}
