//! The `check` command: validate names without loading any values.

use anyhow::{Context, Result};
use layerconf_core::Resolver;
use std::path::Path;
use tracing::info;

use crate::manifest::Manifest;

pub fn run(manifest_path: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let options = manifest.options(manifest.declare());

    info!(manifest = %manifest_path.display(), "Checking configuration names");
    let resolver = Resolver::new(options).context("Configuration names are not valid")?;

    let resolution = resolver.resolution();
    for (name, point) in resolution.registry().named_points() {
        match point.description() {
            Some(description) => println!("{name}\t{description}"),
            None => println!("{name}"),
        }
    }
    println!("{} points OK", resolution.registry().len());
    Ok(())
}
