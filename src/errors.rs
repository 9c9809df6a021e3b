//! Error types
//!
//! Only collaborator failures and bad configuration are errors. Empty or
//! degenerate input flows through the pipeline as empty results.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the summarization engine
#[derive(Debug, Error)]
pub enum Error {
    /// The linguistic model could not be loaded. Fatal for the whole pipeline.
    #[error("language model '{language}' is unavailable: {reason}")]
    ModelUnavailable { language: String, reason: String },

    /// The document to load does not exist
    #[error("document not found: {0}")]
    NotFound(PathBuf),

    /// The document exists but no text could be extracted from it
    #[error("text extraction failed for {path}: {reason}")]
    Extraction { path: PathBuf, reason: String },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error must abort the pipeline rather than degrade to an
    /// empty report
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ModelUnavailable { .. } | Error::InvalidConfig(_))
    }
}
