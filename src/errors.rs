// src/errors.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{field} is {value}, which JSON cannot represent")]
    NonFinite { field: String, value: f64 },
}

impl PromptError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PromptError::Io {
            path: path.into(),
            source,
        }
    }
}
