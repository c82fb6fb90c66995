//! The resolver: ordered multi-source configuration with first-match-wins lookup.
//!
//! Responsibilities:
//! - Own the current `Resolution` (registry, loaders, layers) and answer lookups.
//! - Replace the whole resolution atomically on construction and reset.
//! - Provide the process-wide instance (see `global.rs`).
//!
//! Does NOT handle:
//! - Naming points or reading sources (delegated to `NamingStrategy` and `Loader`).
//!
//! Invariants / Assumptions:
//! - Construction, reset and load of one resolver are serialized by a single lock
//!   held across building the registry and running every loader.
//! - Readers never take that lock: they load the current `Arc<Resolution>` and see
//!   either the complete old generation or the complete new one.
//! - A failed reset leaves the installed resolution untouched.

mod global;
mod options;
mod resolution;


use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

pub use options::ResolverOptions;
pub use resolution::Resolution;

use crate::error::ConfigError;
use crate::layer::ValueLayer;
use crate::point::{ConfigPoint, PointGroup};

/// Orchestrates registry validation, loading and precedence-ordered lookup.
pub struct Resolver {
    current: ArcSwap<Resolution>,
    reload_lock: Mutex<()>,
}

impl Resolver {
    /// Build a standalone resolver.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Naming` if any point cannot be named or two points share a name.
    /// - `ConfigError::Loader` if a loader fails.
    pub fn new(options: ResolverOptions) -> Result<Self, ConfigError> {
        let resolution = Resolution::resolve(options, 1)?;
        log_installed(&resolution);
        Ok(Self::from_resolution(resolution))
    }

    pub(crate) fn unconfigured() -> Self {
        Self::from_resolution(Resolution::unconfigured())
    }

    fn from_resolution(resolution: Resolution) -> Self {
        Self {
            current: ArcSwap::from_pointee(resolution),
            reload_lock: Mutex::new(()),
        }
    }

    /// Replace registry, loaders and layers with a fresh resolution.
    ///
    /// All-or-nothing: on error the previous resolution stays installed.
    pub fn reload(&self, options: ResolverOptions) -> Result<(), ConfigError> {
        let _guard = self.reload_lock.lock();
        let generation = self.current.load().generation() + 1;
        let next = Resolution::resolve(options, generation)?;
        log_installed(&next);
        self.current.store(Arc::new(next));
        Ok(())
    }

    /// Take over the installed resolution of `other`.
    pub(crate) fn adopt(&self, other: Resolver) {
        let _guard = self.reload_lock.lock();
        self.current.store(other.current.load_full());
    }

    /// The installed resolution.
    ///
    /// Holding the returned `Arc` keeps several lookups on one generation even if
    /// a reset happens in between.
    pub fn resolution(&self) -> Arc<Resolution> {
        self.current.load_full()
    }

    /// The effective value of `point`, or `None` if no layer defines it.
    pub fn get_value(&self, point: &ConfigPoint) -> Option<String> {
        self.current.load().value(point).map(str::to_string)
    }

    pub fn is_present(&self, point: &ConfigPoint) -> bool {
        self.current.load().is_present(point)
    }

    /// Source label of the layer supplying the effective value.
    pub fn source_of(&self, point: &ConfigPoint) -> Option<String> {
        self.current.load().source_of(point).map(str::to_string)
    }

    /// The effective value, falling back to the point's declared default.
    pub fn value_or_default(&self, point: &ConfigPoint) -> Option<String> {
        self.current
            .load()
            .value_or_default(point)
            .map(str::to_string)
    }

    /// Parse the effective value of `point`.
    ///
    /// Surrounding whitespace is ignored. Returns `Ok(None)` when the point is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the value does not parse as `T`.
    pub fn get_parsed<T>(&self, point: &ConfigPoint) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let resolution = self.current.load();
        let Some(raw) = resolution.value(point) else {
            return Ok(None);
        };
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                name: resolution.display_name(point),
                message: e.to_string(),
            })
    }

    /// Registered points, in declaration order.
    pub fn points(&self) -> Vec<ConfigPoint> {
        self.current.load().points().to_vec()
    }

    /// Registered groups, in declaration order.
    pub fn groups(&self) -> Vec<PointGroup> {
        self.current.load().groups().to_vec()
    }

    /// Installed layers in precedence order.
    pub fn layers(&self) -> Vec<Arc<ValueLayer>> {
        self.current.load().layers().to_vec()
    }

    /// Arguments handed to the loaders of the installed resolution.
    pub fn args(&self) -> Vec<String> {
        self.current.load().args().to_vec()
    }

    /// Generation counter of the installed resolution; 0 means unconfigured.
    pub fn generation(&self) -> u64 {
        self.current.load().generation()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("current", &*self.current.load())
            .finish()
    }
}

fn log_installed(resolution: &Resolution) {
    tracing::info!(
        generation = resolution.generation(),
        points = resolution.points().len(),
        layers = resolution.layers().len(),
        "Installed configuration"
    );
}
