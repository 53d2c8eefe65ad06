//! Error types for loading and rendering.
//!
//! Loader and check mode return [`DocError`]; `main` wraps it with `anyhow`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// Signature or description directory does not exist.
    #[error("directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid JSON, or JSON that does not match the expected shape.
    #[error("malformed JSON in {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid scan pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// `--check` found a missing or outdated output file.
    #[error("{} is out of date", path.display())]
    Stale { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, DocError>;

impl DocError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
