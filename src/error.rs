//! Error types for the sieve pipeline.
//!
//! Rejecting a word is not an error; only I/O trouble on the input or
//! output side ends a run.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures that abort a run immediately.
#[derive(Debug, Error)]
pub enum SieveError {
    /// The input list could not be opened.
    #[error("cannot open input {path:?}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input list failed mid-read.
    #[error("read error on input {path:?}: {source}")]
    InputReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("cannot write output {path:?}: {source}")]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SieveError {
    /// The path the failure is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::InputNotFound { path, .. } => path,
            Self::InputReadFailure { path, .. } => path,
            Self::OutputWriteFailure { path, .. } => path,
        }
    }
}
