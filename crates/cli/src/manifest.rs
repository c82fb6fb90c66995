//! Manifest files declaring configuration points.
//!
//! A manifest is a JSON document:
//!
//! ```json
//! {
//!   "naming": "basic",
//!   "groups": [
//!     { "name": "server", "points": [ { "name": "port", "default": "8080" } ] }
//!   ]
//! }
//! ```
//!
//! `naming` is `basic` (`group.point`, the default) or `flat` (`point`).

use layerconf_core::{
    BasicNamingStrategy, ConfigPoint, NamingError, PointGroup, PointOnlyNamingStrategy, Registry,
    ResolverOptions,
};
use serde::Deserialize;
use std::path::Path;

use crate::error::InputError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub naming: Naming,
    #[serde(default)]
    pub groups: Vec<GroupDecl>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Naming {
    #[default]
    Basic,
    Flat,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDecl {
    pub name: String,
    #[serde(default)]
    pub points: Vec<PointDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointDecl {
    pub name: String,
    pub description: Option<String>,
    pub default: Option<String>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path).map_err(|source| InputError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| InputError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Declare the manifest's groups and points.
    pub fn declare(&self) -> Vec<PointGroup> {
        self.groups
            .iter()
            .map(|group| {
                PointGroup::new(group.name.clone()).with_points(group.points.iter().map(|decl| {
                    let mut point = ConfigPoint::new(decl.name.clone());
                    if let Some(description) = &decl.description {
                        point = point.with_description(description.clone());
                    }
                    if let Some(default) = &decl.default {
                        point = point.with_default(default.clone());
                    }
                    point
                }))
            })
            .collect()
    }

    /// Name the points ahead of resolution, to look them up by canonical name.
    pub fn registry(&self, groups: Vec<PointGroup>) -> (Registry, Vec<NamingError>) {
        match self.naming {
            Naming::Basic => Registry::build(groups, &BasicNamingStrategy),
            Naming::Flat => Registry::build(groups, &PointOnlyNamingStrategy),
        }
    }

    /// Resolver options carrying the manifest's naming strategy and groups.
    pub fn options(&self, groups: Vec<PointGroup>) -> ResolverOptions {
        let options = match self.naming {
            Naming::Basic => ResolverOptions::new().with_naming(BasicNamingStrategy),
            Naming::Flat => ResolverOptions::new().with_naming(PointOnlyNamingStrategy),
        };
        options.with_groups(groups)
    }
}
