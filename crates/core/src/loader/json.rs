//! JSON file loader.
//!
//! Nested objects are flattened with `.`, so `{"app": {"port": 8080}}` supplies
//! the point named `app.port`. Strings, numbers and booleans become strings;
//! arrays and nulls are rejected.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::error::LoaderError;
use super::{Loader, LoaderContext};
use crate::layer::ValueLayer;

/// Loads values from a JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    label: String,
    path: PathBuf,
    optional: bool,
}

impl JsonFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            label: format!("json:{}", path.display()),
            path,
            optional: false,
        }
    }

    /// Treat a missing file as an empty source instead of an error.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_error(&self, message: String) -> LoaderError {
        LoaderError::Parse {
            source_name: self.path.display().to_string(),
            message,
        }
    }
}

impl Loader for JsonFileLoader {
    fn name(&self) -> &str {
        &self.label
    }

    fn load(&self, ctx: &LoaderContext<'_>) -> Result<ValueLayer, LoaderError> {
        let mut layer = ValueLayer::new(self.name());

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if self.optional && e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Optional JSON file not found");
                return Ok(layer);
            }
            Err(e) => {
                return Err(LoaderError::Io {
                    path: self.path.clone(),
                    kind: e.kind(),
                });
            }
        };

        let root: Value = serde_json::from_str(&content)
            .map_err(|e| self.parse_error(format!("invalid JSON at line {}", e.line())))?;
        let Value::Object(map) = root else {
            return Err(self.parse_error("top-level value must be an object".to_string()));
        };

        let mut flat = Vec::new();
        for (key, value) in map {
            flatten(key, value, &mut flat).map_err(|e| self.parse_error(e))?;
        }

        for (key, value) in flat {
            match ctx.registry().point_by_name(&key) {
                Some(point) => {
                    layer.insert(point.clone(), value);
                }
                None => tracing::debug!(key = %key, "Ignoring JSON entry for unknown point"),
            }
        }

        Ok(layer)
    }
}

fn flatten(key: String, value: Value, out: &mut Vec<(String, String)>) -> Result<(), String> {
    match value {
        Value::String(s) => out.push((key, s)),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::Bool(b) => out.push((key, b.to_string())),
        Value::Object(map) => {
            for (child, value) in map {
                flatten(format!("{key}.{child}"), value, out)?;
            }
        }
        Value::Array(_) => return Err(format!("unsupported array value at '{key}'")),
        Value::Null => return Err(format!("unsupported null value at '{key}'")),
    }
    Ok(())
}
