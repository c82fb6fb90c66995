//! One complete, immutable generation of resolver state.
//!
//! Responsibilities:
//! - Build the registry, report naming errors, and run the load sequence.
//! - Answer lookups by walking layers in precedence order.
//!
//! Does NOT handle:
//! - Installing a generation or serializing resets (see `mod.rs`).
//!
//! Invariants:
//! - The forced layer, when non-empty, is always first; loader layers follow in
//!   loader order; empty loader layers are not kept.
//! - A lookup returns the value from the first layer defining the point, never a merge.
//! - A `Resolution` is never mutated after construction.

use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::layer::ValueLayer;
use crate::loader::{Loader, LoaderContext};
use crate::naming::{BasicNamingStrategy, NamingStrategy};
use crate::point::{ConfigPoint, PointGroup};
use crate::registry::Registry;

use super::options::ResolverOptions;

/// Registry, loaders and layers of one configuration generation.
pub struct Resolution {
    generation: u64,
    registry: Registry,
    naming: Arc<dyn NamingStrategy>,
    loaders: Vec<Arc<dyn Loader>>,
    args: Vec<String>,
    layers: Vec<Arc<ValueLayer>>,
}

impl Resolution {
    /// The state of a resolver constructed without parameters.
    pub(crate) fn unconfigured() -> Self {
        Self {
            generation: 0,
            registry: Registry::empty(),
            naming: Arc::new(BasicNamingStrategy),
            loaders: Vec::new(),
            args: Vec::new(),
            layers: Vec::new(),
        }
    }

    /// Validate names and run every loader in order.
    pub(crate) fn resolve(options: ResolverOptions, generation: u64) -> Result<Self, ConfigError> {
        let ResolverOptions {
            naming,
            groups,
            loaders,
            args,
            forced,
            diagnostics,
        } = options;

        let (registry, errors) = Registry::build(groups, naming.as_ref());
        if let Some(err) = ConfigError::naming(errors) {
            for naming_error in err.naming_errors() {
                tracing::error!(error = %naming_error, "Configuration naming error");
            }
            diagnostics.naming_errors(err.naming_errors());
            return Err(err);
        }

        let mut layers: Vec<Arc<ValueLayer>> = Vec::with_capacity(loaders.len() + 1);
        if !forced.is_empty() {
            for (point, _) in forced.iter() {
                if !registry.contains(point) {
                    tracing::debug!(point = %point, "Forced value for unregistered point");
                }
            }
            layers.push(Arc::new(forced));
        }

        for loader in &loaders {
            let ctx = LoaderContext::new(&args, &registry, &layers);
            let layer = loader.load(&ctx).map_err(|source| {
                tracing::error!(loader = loader.name(), error = %source, "Loader failed");
                ConfigError::Loader {
                    loader: loader.name().to_string(),
                    source,
                }
            })?;
            tracing::debug!(loader = loader.name(), values = layer.len(), "Loader finished");
            if !layer.is_empty() {
                layers.push(Arc::new(layer));
            }
        }

        Ok(Self {
            generation,
            registry,
            naming,
            loaders,
            args,
            layers,
        })
    }

    /// The value from the highest-precedence layer defining `point`.
    pub fn value(&self, point: &ConfigPoint) -> Option<&str> {
        self.layer_for(point).and_then(|layer| layer.get(point))
    }

    pub fn is_present(&self, point: &ConfigPoint) -> bool {
        self.layer_for(point).is_some()
    }

    /// The layer that supplies the effective value of `point`.
    pub fn layer_for(&self, point: &ConfigPoint) -> Option<&ValueLayer> {
        self.layers
            .iter()
            .map(|layer| &**layer)
            .find(|layer| layer.contains(point))
    }

    /// Source label of the layer supplying `point`.
    pub fn source_of(&self, point: &ConfigPoint) -> Option<&str> {
        self.layer_for(point).map(ValueLayer::source)
    }

    /// The effective value, or the point's declared default.
    pub fn value_or_default<'a>(&'a self, point: &'a ConfigPoint) -> Option<&'a str> {
        self.value(point).or_else(|| point.default_value())
    }

    /// Canonical name if registered, otherwise the declared name.
    pub fn display_name(&self, point: &ConfigPoint) -> String {
        self.registry
            .name_of(point)
            .map(|name| name.to_string())
            .unwrap_or_else(|| point.name().to_string())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn points(&self) -> &[ConfigPoint] {
        self.registry.points()
    }

    pub fn groups(&self) -> &[PointGroup] {
        self.registry.groups()
    }

    pub fn naming(&self) -> &dyn NamingStrategy {
        self.naming.as_ref()
    }

    /// Names of the installed loaders, in run order.
    pub fn loader_names(&self) -> Vec<&str> {
        self.loaders.iter().map(|loader| loader.name()).collect()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Layers in precedence order.
    pub fn layers(&self) -> &[Arc<ValueLayer>] {
        &self.layers
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("generation", &self.generation)
            .field("points", &self.registry.len())
            .field("loaders", &self.loader_names())
            .field(
                "layers",
                &self.layers.iter().map(|l| l.source()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
