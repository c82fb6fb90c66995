//! The `show` command: resolve every point and print value and source.
//!
//! Responsibilities:
//! - Translate `--set` assignments into forced values.
//! - Assemble loaders in precedence order: trailing args, property file, JSON
//!   file, environment.
//! - Render the resolved points as a table or JSON.
//!
//! Does NOT handle:
//! - Precedence itself (the resolver walks layers in order).

use anyhow::{Context, Result};
use layerconf_core::{
    CmdLineLoader, EnvLoader, JsonFileLoader, PropertiesFileLoader, Resolution, Resolver,
};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::args::{OutputFormat, ShowArgs};
use crate::error::InputError;
use crate::manifest::Manifest;

/// Source label reported for values taken from a point's declared default.
const DEFAULT_SOURCE: &str = "default";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PointRow {
    pub name: String,
    pub value: Option<String>,
    pub source: Option<String>,
}

pub fn run(manifest_path: &Path, args: ShowArgs) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let groups = manifest.declare();

    let mut options = manifest.options(groups.clone());
    if !args.set.is_empty() {
        let (registry, errors) = manifest.registry(groups);
        // With naming errors, --set names are not checked; resolving below
        // fails with the naming errors instead.
        let assignments: &[(String, String)] = if errors.is_empty() { &args.set } else { &[] };
        for (name, value) in assignments {
            let point = registry
                .point_by_name(name)
                .ok_or_else(|| InputError::UnknownPoint(name.clone()))?;
            debug!(name = %name, "Forcing value");
            options = options.with_forced(point.clone(), value.clone());
        }
    }

    options = options
        .with_args(args.args.iter().cloned())
        .with_loader(CmdLineLoader::new());
    if let Some(path) = &args.properties {
        options = options.with_loader(PropertiesFileLoader::new(path));
    }
    if let Some(path) = &args.json {
        options = options.with_loader(JsonFileLoader::new(path));
    }
    if !args.no_env {
        let mut env = EnvLoader::new();
        if let Some(prefix) = &args.env_prefix {
            env = env.with_prefix(prefix.clone());
        }
        options = options.with_loader(env);
    }

    info!(manifest = %manifest_path.display(), "Resolving configuration");
    let resolver = Resolver::new(options).context("Failed to resolve configuration")?;
    let rows = collect_rows(&resolver.resolution(), args.defaults);

    let output = match args.format {
        OutputFormat::Table => format_table(&rows),
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
    };
    println!("{output}");
    Ok(())
}

/// One row per registered point, in declaration order.
pub fn collect_rows(resolution: &Resolution, with_defaults: bool) -> Vec<PointRow> {
    resolution
        .registry()
        .named_points()
        .map(|(name, point)| {
            let (value, source) = match resolution.layer_for(point) {
                Some(layer) => (
                    layer.get(point).map(str::to_string),
                    Some(layer.source().to_string()),
                ),
                None if with_defaults && point.default_value().is_some() => (
                    point.default_value().map(str::to_string),
                    Some(DEFAULT_SOURCE.to_string()),
                ),
                None => (None, None),
            };
            PointRow {
                name: name.to_string(),
                value,
                source,
            }
        })
        .collect()
}

/// Tab-separated table; absent cells are shown as `-`.
pub fn format_table(rows: &[PointRow]) -> String {
    if rows.is_empty() {
        return "No configuration points declared.".to_string();
    }

    let mut output = String::from("NAME\tVALUE\tSOURCE\n");
    for row in rows {
        output.push_str(&row.name);
        output.push('\t');
        output.push_str(row.value.as_deref().unwrap_or("-"));
        output.push('\t');
        output.push_str(row.source.as_deref().unwrap_or("-"));
        output.push('\n');
    }
    output.pop();
    output
}
