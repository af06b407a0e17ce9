use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticleGuardError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArticleGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
