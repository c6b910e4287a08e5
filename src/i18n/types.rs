//! i18n error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum I18nError {
    /// Error when failing to read a dictionary file
    #[error("Failed to read translation file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error when a dictionary file is not valid JSON
    #[error("Failed to parse translation file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The dictionary root is not a JSON object
    #[error("Translation file {0:?} must contain a JSON object at the top level")]
    InvalidRoot(PathBuf),
    /// The site root cannot be walked
    #[error("Site root {0:?} is not a directory")]
    InvalidSiteRoot(PathBuf),
    /// Invalid dictionary file pattern
    #[error("Invalid translation file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to write locale preference: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode locale preference: {0}")]
    Encode(#[from] serde_json::Error),
}
