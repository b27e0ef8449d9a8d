//! Error types for preview and schema ingestion.

use std::path::PathBuf;
use thiserror::Error;

use colmap_model::ModelError;

/// Errors that can occur while reading previews and field schemas.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Schema Errors ===
    /// Field schema is not valid TOML or has the wrong shape.
    #[error("failed to parse field schema {path}: {source}")]
    SchemaParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Field schema parsed but its content is invalid.
    #[error("invalid field schema {path}: {source}")]
    InvalidSchema {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    /// Field schema defines no fields.
    #[error("field schema {path} defines no fields")]
    NoFields { path: PathBuf },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
