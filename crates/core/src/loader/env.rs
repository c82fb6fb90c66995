//! Environment variable loader.
//!
//! Responsibilities:
//! - Derive an environment variable name for every registered point.
//! - Read those variables with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - `.env` file loading; applications call `dotenvy` themselves before resolving.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Variable names are upper-case ASCII with every non-alphanumeric character
//!   replaced by `_`, e.g. `com.example.Server.port` -> `COM_EXAMPLE_SERVER_PORT`.

use super::error::LoaderError;
use super::{Loader, LoaderContext};
use crate::layer::ValueLayer;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// The environment variable consulted for a canonical name.
pub fn env_var_name(prefix: Option<&str>, canonical: &str) -> String {
    let body: String = canonical
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}{body}"),
        _ => body,
    }
}

/// Loads values from process environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prefix` verbatim to every derived variable name.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl Loader for EnvLoader {
    fn name(&self) -> &str {
        "env"
    }

    fn load(&self, ctx: &LoaderContext<'_>) -> Result<ValueLayer, LoaderError> {
        let mut layer = ValueLayer::new(self.name());

        for (name, point) in ctx.registry().named_points() {
            let var = env_var_name(self.prefix.as_deref(), name.as_str());
            if let Some(value) = env_var_or_none(&var) {
                tracing::trace!(var = %var, point = %name, "Read environment variable");
                layer.insert(point.clone(), value);
            }
        }

        Ok(layer)
    }
}
