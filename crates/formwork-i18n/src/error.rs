//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading message catalogs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum I18nError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog text is not valid TOML or misses required keys.
    #[error("Failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// Catalog declares a blank locale.
    #[error("Catalog {origin} declares an empty locale")]
    EmptyLocale { origin: String },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, I18nError>;
