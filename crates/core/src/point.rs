//! Configuration point and group declarations.
//!
//! Responsibilities:
//! - Provide `ConfigPoint`, an opaque identity handle for one configurable setting.
//! - Provide `PointGroup`, a named, ordered collection of points.
//!
//! Does NOT handle:
//! - Computing canonical names (see `naming.rs`).
//! - Indexing points or detecting collisions (see `registry.rs`).
//!
//! Invariants:
//! - `ConfigPoint` equality and hashing use identity, never the declared name.
//!   Two points declared with the same name are distinct points.
//! - Clones of a `ConfigPoint` are the same point.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

struct PointDecl {
    name: String,
    description: Option<String>,
    default: Option<String>,
}

/// Opaque handle for one configurable setting.
///
/// The handle is cheap to clone; every clone refers to the same point.
#[derive(Clone)]
pub struct ConfigPoint {
    decl: Arc<PointDecl>,
}

impl ConfigPoint {
    /// Declare a new point with the given local name.
    ///
    /// The local name is the point's identifier within its group; the
    /// canonical name is computed later by a `NamingStrategy`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            decl: Arc::new(PointDecl {
                name: name.into(),
                description: None,
                default: None,
            }),
        }
    }

    /// Attach a human-readable description.
    ///
    /// Must be called before the point is cloned; the result is a new point.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        let decl = PointDecl {
            name: self.decl.name.clone(),
            description: Some(description.into()),
            default: self.decl.default.clone(),
        };
        Self {
            decl: Arc::new(decl),
        }
    }

    /// Attach a default value, consulted only by `Resolver::value_or_default`.
    ///
    /// Must be called before the point is cloned; the result is a new point.
    pub fn with_default(self, default: impl Into<String>) -> Self {
        let decl = PointDecl {
            name: self.decl.name.clone(),
            description: self.decl.description.clone(),
            default: Some(default.into()),
        };
        Self {
            decl: Arc::new(decl),
        }
    }

    /// The declared local name.
    pub fn name(&self) -> &str {
        &self.decl.name
    }

    pub fn description(&self) -> Option<&str> {
        self.decl.description.as_deref()
    }

    pub fn default_value(&self) -> Option<&str> {
        self.decl.default.as_deref()
    }

    fn addr(&self) -> *const PointDecl {
        Arc::as_ptr(&self.decl)
    }
}

impl PartialEq for ConfigPoint {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.decl, &other.decl)
    }
}

impl Eq for ConfigPoint {}

impl Hash for ConfigPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for ConfigPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigPoint")
            .field("name", &self.decl.name)
            .field("id", &self.addr())
            .finish()
    }
}

impl fmt::Display for ConfigPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decl.name)
    }
}

/// A named collection of configuration points, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointGroup {
    name: String,
    points: Vec<ConfigPoint>,
}

impl PointGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Append a point to the group.
    pub fn with_point(mut self, point: ConfigPoint) -> Self {
        self.points.push(point);
        self
    }

    /// Append several points to the group, preserving their order.
    pub fn with_points<I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = ConfigPoint>,
    {
        self.points.extend(points);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[ConfigPoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_points_compare_by_identity() {
        let a = ConfigPoint::new("port");
        let b = ConfigPoint::new("port");

        assert_eq!(a, a.clone());
        assert_ne!(a, b, "same name must not make two points equal");

        let set: HashSet<ConfigPoint> = [a.clone(), a.clone(), b.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_builder_attributes() {
        let point = ConfigPoint::new("timeout")
            .with_description("Request timeout in seconds")
            .with_default("30");

        assert_eq!(point.name(), "timeout");
        assert_eq!(point.description(), Some("Request timeout in seconds"));
        assert_eq!(point.default_value(), Some("30"));
        assert_eq!(point.to_string(), "timeout");
    }

    #[test]
    fn test_group_preserves_declaration_order() {
        let a = ConfigPoint::new("a");
        let b = ConfigPoint::new("b");
        let c = ConfigPoint::new("c");
        let group = PointGroup::new("app")
            .with_point(a.clone())
            .with_points([b.clone(), c.clone()]);

        assert_eq!(group.name(), "app");
        assert_eq!(group.points(), &[a, b, c]);
    }
}
