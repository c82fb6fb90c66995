//! Loader contract and the standard loaders.
//!
//! Responsibilities:
//! - Define the `Loader` trait and the read-only `LoaderContext` each loader receives.
//! - Provide the standard loaders: command-line arguments, environment variables,
//!   key/value property files, JSON files and fixed in-memory values.
//!
//! Does NOT handle:
//! - Ordering loaders or merging their layers (see `resolver`).
//!
//! Invariants / Assumptions:
//! - A loader only ever adds values for points present in the context's registry.
//! - Returning an empty layer is a normal outcome, not an error.
//! - Loaders never mutate the process environment.

mod cmdline;
mod env;
mod error;
mod fixed;
mod json;
mod properties;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use cmdline::CmdLineLoader;
pub use env::{EnvLoader, env_var_name, env_var_or_none};
pub use error::LoaderError;
pub use fixed::FixedLoader;
pub use json::JsonFileLoader;
pub use properties::PropertiesFileLoader;

use crate::layer::ValueLayer;
use crate::point::ConfigPoint;
use crate::registry::Registry;

/// A pluggable source of configuration values.
pub trait Loader: Send + Sync {
    /// Label used for diagnostics and as the source of the produced layer.
    fn name(&self) -> &str;

    /// Produce the values this source can supply.
    ///
    /// Layers produced by earlier loaders are visible through `ctx`; whether to
    /// skip points that are already resolved is up to the loader.
    ///
    /// A loader may read `Resolver::instance()`, but must not reload or reset
    /// the resolver that is running it: that call would wait on itself.
    fn load(&self, ctx: &LoaderContext<'_>) -> Result<ValueLayer, LoaderError>;
}

/// Read-only state handed to each loader in turn.
#[derive(Debug, Clone, Copy)]
pub struct LoaderContext<'a> {
    args: &'a [String],
    registry: &'a Registry,
    layers: &'a [Arc<ValueLayer>],
}

impl<'a> LoaderContext<'a> {
    pub fn new(args: &'a [String], registry: &'a Registry, layers: &'a [Arc<ValueLayer>]) -> Self {
        Self {
            args,
            registry,
            layers,
        }
    }

    /// Command-line arguments, verbatim and in order.
    pub fn args(&self) -> &'a [String] {
        self.args
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Layers produced before this loader ran, highest precedence first.
    pub fn layers(&self) -> &'a [Arc<ValueLayer>] {
        self.layers
    }

    /// The value earlier layers resolved for `point`, if any.
    pub fn value(&self, point: &ConfigPoint) -> Option<&'a str> {
        self.layers.iter().find_map(|layer| layer.get(point))
    }

    pub fn is_resolved(&self, point: &ConfigPoint) -> bool {
        self.value(point).is_some()
    }
}
