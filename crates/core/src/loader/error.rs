//! Error types for loader failures.
//!
//! Responsibilities:
//! - Define the variants a loader uses to report that it cannot fulfill its contract.
//!
//! Does NOT handle:
//! - Attributing the failure to a loader (see `ConfigError::Loader`).
//!
//! Invariants:
//! - Parse errors for key/value files carry the position of the failure, never
//!   the offending line, so secrets in those files do not leak into logs.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors a loader may return from `Loader::load`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("Failed to read {path}: {kind}")]
    Io { path: PathBuf, kind: ErrorKind },

    #[error("Failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Unknown configuration point '{name}'")]
    UnknownPoint { name: String },

    #[error("Configuration point '{name}' was given more than once")]
    DuplicateArgument { name: String },

    #[error("{0}")]
    Custom(String),
}
