//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` and `InputError` to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use layerconf_core::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Structured exit codes for layerconf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Naming error - two points share a canonical name or a name is invalid.
    ///
    /// Fix the manifest; retrying will not help.
    NamingError = 2,

    /// Loader error - a configuration source is missing or malformed.
    LoaderError = 3,

    /// Invalid input - unreadable manifest or a bad command-line assignment.
    InvalidInput = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Naming { .. } => ExitCode::NamingError,
            ConfigError::Loader { .. } => ExitCode::LoaderError,
            ConfigError::InvalidValue { .. } => ExitCode::InvalidInput,
            ConfigError::AlreadyConstructed => ExitCode::GeneralError,
        }
    }
}

/// Errors in what the user handed to the CLI.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read manifest at {path}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown configuration point '{0}' in --set")]
    UnknownPoint(String),
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<InputError>().is_some() {
                return ExitCode::InvalidInput;
            }
        }
        ExitCode::GeneralError
    }
}
