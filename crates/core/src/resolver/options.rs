//! Resolver construction parameters.
//!
//! Responsibilities:
//! - Collect the naming strategy, point groups, ordered loaders, command-line
//!   arguments, forced values and diagnostic sink for one construction or reset.
//!
//! Does NOT handle:
//! - Building the registry or running loaders (see `resolution.rs`).
//!
//! Invariants / Assumptions:
//! - Loaders run in the order they were added.
//! - Forced values always form the highest-precedence layer.
//! - Defaults: `BasicNamingStrategy`, no groups, no loaders, `StderrSink`.

use std::fmt;
use std::sync::Arc;

use crate::diagnostics::{DiagnosticSink, StderrSink};
use crate::layer::{FORCED_SOURCE, ValueLayer};
use crate::loader::Loader;
use crate::naming::{BasicNamingStrategy, NamingStrategy};
use crate::point::{ConfigPoint, PointGroup};

/// Parameters for `Resolver::new`, `Resolver::init`, `Resolver::reset` and `Resolver::reload`.
pub struct ResolverOptions {
    pub(crate) naming: Arc<dyn NamingStrategy>,
    pub(crate) groups: Vec<PointGroup>,
    pub(crate) loaders: Vec<Arc<dyn Loader>>,
    pub(crate) args: Vec<String>,
    pub(crate) forced: ValueLayer,
    pub(crate) diagnostics: Arc<dyn DiagnosticSink>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self {
            naming: Arc::new(BasicNamingStrategy),
            groups: Vec::new(),
            loaders: Vec::new(),
            args: Vec::new(),
            forced: ValueLayer::new(FORCED_SOURCE),
            diagnostics: Arc::new(StderrSink),
        }
    }

    /// Replace the naming strategy.
    pub fn with_naming(mut self, naming: impl NamingStrategy + 'static) -> Self {
        self.naming = Arc::new(naming);
        self
    }

    /// Register a point group. Groups are scanned in registration order.
    pub fn with_group(mut self, group: PointGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn with_groups<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = PointGroup>,
    {
        self.groups.extend(groups);
        self
    }

    /// Append a loader after the ones already added.
    pub fn with_loader(mut self, loader: impl Loader + 'static) -> Self {
        self.loaders.push(Arc::new(loader));
        self
    }

    /// Append an already shared loader.
    pub fn with_shared_loader(mut self, loader: Arc<dyn Loader>) -> Self {
        self.loaders.push(loader);
        self
    }

    /// Command-line arguments forwarded verbatim to every loader.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Force a value for a point, overriding every loader.
    pub fn with_forced(mut self, point: ConfigPoint, value: impl Into<String>) -> Self {
        self.forced.insert(point, value);
        self
    }

    /// Send the full naming error list somewhere other than standard error.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }
}

impl fmt::Debug for ResolverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverOptions")
            .field("groups", &self.groups.len())
            .field(
                "loaders",
                &self.loaders.iter().map(|l| l.name()).collect::<Vec<_>>(),
            )
            .field("args", &self.args)
            .field("forced", &self.forced.len())
            .finish_non_exhaustive()
    }
}
