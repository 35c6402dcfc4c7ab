use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {key}: {message}")]
    Config { key: &'static str, message: String },

    #[error("{0}")]
    Builder(&'static str),

    #[error("no library snapshot configured (set SHELF_LIBRARY_PATH)")]
    NotConfigured,
}

pub type Result<T> = std::result::Result<T, ShelfError>;
