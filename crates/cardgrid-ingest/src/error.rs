//! Error types for loading deck collections.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening a collection.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Collection root is missing or not a directory.
    #[error("collection directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// A deck file is not valid CSV.
    #[error("failed to parse deck {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A collection or template configuration file is not valid TOML.
    #[error("invalid configuration in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // === Lookup Errors ===
    /// No deck with this name (or any child of it) exists.
    #[error("unknown deck '{deck}'")]
    UnknownDeck { deck: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DirectoryNotFound {
            path: PathBuf::from("/decks/missing"),
        };
        assert_eq!(err.to_string(), "collection directory not found: /decks/missing");

        let err = IngestError::UnknownDeck {
            deck: "Spanish::Nouns".into(),
        };
        assert_eq!(err.to_string(), "unknown deck 'Spanish::Nouns'");
    }
}
