//! Error types for roster loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading and resolving a roster file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The roster file does not exist at the configured path.
    #[error("roster file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The roster file exists but could not be read or parsed.
    #[error("failed to load roster {path}: {source}")]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column could not be resolved even via fallback search.
    #[error("roster schema unresolved: {reason}")]
    SchemaResolution { reason: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
