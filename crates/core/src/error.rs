//! Error types for resolver construction and lookup.
//!
//! Responsibilities:
//! - Define the fatal startup errors: naming failures and loader failures.
//! - Define usage errors (double construction) and typed lookup failures.
//!
//! Does NOT handle:
//! - Loader-specific failure details (see `loader::LoaderError`).
//! - Printing diagnostics (see `diagnostics.rs`).
//!
//! Invariants:
//! - `ConfigError::Naming` always holds at least one error; its `source()` is
//!   the first one and `naming_errors()` exposes the full list, first included.
//! - Absence of a value is never an error.

use thiserror::Error;

use crate::loader::LoaderError;
use crate::naming::NamingError;

/// Errors that can occur while constructing, resetting, or reading a resolver.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Registry construction found one or more naming errors.
    #[error("{}", naming_summary(.errors.len()))]
    Naming {
        #[source]
        first: NamingError,
        errors: Vec<NamingError>,
    },

    /// A loader could not fulfill its contract; the load sequence was aborted.
    #[error("Loader '{loader}' failed")]
    Loader {
        loader: String,
        #[source]
        source: LoaderError,
    },

    /// Explicit first-time construction was attempted on an existing instance.
    #[error("Resolver already constructed; use reset() to replace its configuration")]
    AlreadyConstructed,

    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}

impl ConfigError {
    /// Every naming error behind a `Naming` failure; empty for other variants.
    pub fn naming_errors(&self) -> &[NamingError] {
        match self {
            ConfigError::Naming { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Wrap a non-empty list of naming errors; `None` when the list is empty.
    pub(crate) fn naming(errors: Vec<NamingError>) -> Option<Self> {
        let first = errors.first()?.clone();
        Some(ConfigError::Naming { first, errors })
    }
}

fn naming_summary(count: usize) -> String {
    if count == 1 {
        "Unable to continue with configuration loading because there is a single naming error. \
         See the cause for the error and the diagnostic output for the points involved."
            .to_string()
    } else {
        format!(
            "Unable to continue with configuration loading because there are {count} naming errors. \
             The cause holds the first of them; see the diagnostic output for the full list."
        )
    }
}
