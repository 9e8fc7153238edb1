//! Error types for loading game data

use std::path::PathBuf;
use thiserror::Error;

/// Game data loading errors
#[derive(Debug, Error)]
pub enum DataError {
    /// A required table file is absent
    #[error("Required data file missing: {0}")]
    Missing(PathBuf),

    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not the JSON shape the table expects
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Note-tag pattern failed to compile
    #[error("Failed to compile note tag pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, DataError>;
