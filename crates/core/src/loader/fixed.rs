//! In-memory loader keyed by canonical name.

use super::error::LoaderError;
use super::{Loader, LoaderContext};
use crate::layer::ValueLayer;

/// Supplies a fixed set of `canonical name -> value` pairs.
///
/// Names that do not match a registered point are ignored.
#[derive(Debug, Clone)]
pub struct FixedLoader {
    label: String,
    values: Vec<(String, String)>,
}

impl FixedLoader {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push((name.into(), value.into()));
        self
    }
}

impl Loader for FixedLoader {
    fn name(&self) -> &str {
        &self.label
    }

    fn load(&self, ctx: &LoaderContext<'_>) -> Result<ValueLayer, LoaderError> {
        let mut layer = ValueLayer::new(self.name());
        for (name, value) in &self.values {
            if let Some(point) = ctx.registry().point_by_name(name) {
                layer.insert(point.clone(), value.clone());
            }
        }
        Ok(layer)
    }
}
