//! Command-line argument loader.
//!
//! Responsibilities:
//! - Read `name=value` arguments and map `name` through the registry's canonical names.
//!
//! Does NOT handle:
//! - Application flags; anything without `=` is left to the application.
//!
//! Invariants:
//! - Leading dashes are stripped and the name is trimmed; the value is kept verbatim.
//! - A point given twice is an error rather than a silent last-one-wins.

use super::error::LoaderError;
use super::{Loader, LoaderContext};
use crate::layer::ValueLayer;

/// Loads values from the resolver's command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct CmdLineLoader {
    strict: bool,
}

impl CmdLineLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject `name=value` arguments whose name is not a registered point.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

impl Loader for CmdLineLoader {
    fn name(&self) -> &str {
        "cmdline"
    }

    fn load(&self, ctx: &LoaderContext<'_>) -> Result<ValueLayer, LoaderError> {
        let mut layer = ValueLayer::new(self.name());

        for arg in ctx.args() {
            let Some((key, value)) = arg.trim_start_matches('-').split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            match ctx.registry().point_by_name(key) {
                Some(point) => {
                    if !layer.insert_if_absent(point.clone(), value) {
                        return Err(LoaderError::DuplicateArgument {
                            name: key.to_string(),
                        });
                    }
                }
                None if self.strict => {
                    return Err(LoaderError::UnknownPoint {
                        name: key.to_string(),
                    });
                }
                None => tracing::debug!(name = key, "Ignoring argument for unknown point"),
            }
        }

        Ok(layer)
    }
}
