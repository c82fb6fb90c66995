//! Point registry construction and lookup.
//!
//! Responsibilities:
//! - Scan declared groups through a `NamingStrategy` and index every point.
//! - Detect canonical name collisions and strategy failures.
//! - Expose ordered groups/points and name <-> point lookups.
//!
//! Does NOT handle:
//! - Deciding whether naming errors are fatal (see `resolver`).
//! - Loading values (see `loader`).
//!
//! Invariants:
//! - The scan never stops early: every point is visited, so one build reports
//!   every naming problem at once.
//! - A registry built with zero errors has unique canonical names.
//! - Points keep declaration order; a point registered more than once is kept
//!   at its first position only.

use std::collections::HashMap;

use crate::naming::{CanonicalName, NamingError, NamingStrategy};
use crate::point::{ConfigPoint, PointGroup};

/// Index of every known configuration point and its owning group.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    groups: Vec<PointGroup>,
    points: Vec<ConfigPoint>,
    by_name: HashMap<CanonicalName, ConfigPoint>,
    names: HashMap<ConfigPoint, CanonicalName>,
    owners: HashMap<ConfigPoint, usize>,
}

impl Registry {
    /// An empty, valid registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Name and index every point of every group.
    ///
    /// The registry is only valid when the returned error list is empty; callers
    /// must not load values from a registry built with errors.
    pub fn build(
        groups: Vec<PointGroup>,
        naming: &dyn NamingStrategy,
    ) -> (Registry, Vec<NamingError>) {
        let mut registry = Registry {
            groups,
            ..Registry::default()
        };
        let mut errors = Vec::new();

        for (group_idx, group) in registry.groups.iter().enumerate() {
            for point in group.points() {
                if let Some(&owner) = registry.owners.get(point) {
                    tracing::warn!(
                        point = %point,
                        group = group.name(),
                        first_group = registry.groups[owner].name(),
                        "Point registered more than once; keeping the first registration"
                    );
                    continue;
                }
                registry.owners.insert(point.clone(), group_idx);
                registry.points.push(point.clone());

                let name = match naming.canonical_name(point, group) {
                    Ok(name) => name,
                    Err(err) => {
                        errors.push(err);
                        continue;
                    }
                };

                if let Some(existing) = registry.by_name.get(&name) {
                    let first_group = registry
                        .owners
                        .get(existing)
                        .map(|&idx| registry.groups[idx].name().to_string())
                        .unwrap_or_default();
                    errors.push(NamingError::Duplicate {
                        name,
                        first: existing.clone(),
                        first_group,
                        second: point.clone(),
                        second_group: group.name().to_string(),
                    });
                    continue;
                }

                registry.by_name.insert(name.clone(), point.clone());
                registry.names.insert(point.clone(), name);
            }
        }

        tracing::debug!(
            groups = registry.groups.len(),
            points = registry.points.len(),
            errors = errors.len(),
            "Built point registry"
        );

        (registry, errors)
    }

    /// Registered groups, in declaration order.
    pub fn groups(&self) -> &[PointGroup] {
        &self.groups
    }

    /// Registered points, in declaration order and without duplicates.
    pub fn points(&self) -> &[ConfigPoint] {
        &self.points
    }

    pub fn point_by_name(&self, name: &str) -> Option<&ConfigPoint> {
        self.by_name.get(name)
    }

    pub fn name_of(&self, point: &ConfigPoint) -> Option<&CanonicalName> {
        self.names.get(point)
    }

    /// The group that first registered the point.
    pub fn group_of(&self, point: &ConfigPoint) -> Option<&PointGroup> {
        self.owners.get(point).map(|&idx| &self.groups[idx])
    }

    pub fn contains(&self, point: &ConfigPoint) -> bool {
        self.owners.contains_key(point)
    }

    /// Canonical names paired with their points, in declaration order.
    pub fn named_points(&self) -> impl Iterator<Item = (&CanonicalName, &ConfigPoint)> {
        self.points
            .iter()
            .filter_map(|point| self.names.get(point).map(|name| (name, point)))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{BasicNamingStrategy, PointOnlyNamingStrategy};

    fn fixed_names(
        mapping: Vec<(ConfigPoint, &'static str)>,
    ) -> impl Fn(&ConfigPoint, &PointGroup) -> Result<CanonicalName, NamingError> + Send + Sync
    {
        move |point: &ConfigPoint, _group: &PointGroup| {
            let name = mapping
                .iter()
                .find(|(p, _)| p == point)
                .map(|(_, name)| *name)
                .unwrap_or("unmapped");
            Ok(CanonicalName::new(name))
        }
    }

    #[test]
    fn test_empty_group_list_is_valid() {
        let (registry, errors) = Registry::build(Vec::new(), &BasicNamingStrategy);

        assert!(errors.is_empty());
        assert!(registry.is_empty());
        assert!(registry.groups().is_empty());
    }

    #[test]
    fn test_distinct_names_build_cleanly() {
        let a = ConfigPoint::new("a");
        let b = ConfigPoint::new("b");
        let group = PointGroup::new("g").with_points([a.clone(), b.clone()]);
        let naming = fixed_names(vec![(a.clone(), "app.a"), (b.clone(), "app.b")]);

        let (registry, errors) = Registry::build(vec![group], &naming);

        assert!(errors.is_empty());
        assert_eq!(registry.points(), &[a.clone(), b.clone()]);
        assert_eq!(registry.point_by_name("app.a"), Some(&a));
        assert_eq!(registry.name_of(&b).map(CanonicalName::as_str), Some("app.b"));
        assert_eq!(registry.group_of(&a).map(PointGroup::name), Some("g"));
    }

    #[test]
    fn test_collision_yields_single_error_naming_both_points() {
        let a = ConfigPoint::new("a");
        let b = ConfigPoint::new("b");
        let group = PointGroup::new("g").with_points([a.clone(), b.clone()]);
        let naming = fixed_names(vec![(a.clone(), "app.x"), (b.clone(), "app.x")]);

        let (registry, errors) = Registry::build(vec![group], &naming);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].points(), vec![&a, &b]);
        // The first claimant keeps the name; neither is silently dropped from the point list.
        assert_eq!(registry.point_by_name("app.x"), Some(&a));
        assert!(registry.name_of(&b).is_none());
        assert_eq!(registry.points().len(), 2);
    }

    #[test]
    fn test_scan_continues_past_errors() {
        let bad = ConfigPoint::new("");
        let x1 = ConfigPoint::new("x");
        let x2 = ConfigPoint::new("x");
        let x3 = ConfigPoint::new("x");
        let ok = ConfigPoint::new("ok");
        let groups = vec![
            PointGroup::new("one").with_points([bad.clone(), x1.clone()]),
            PointGroup::new("two").with_points([x2.clone(), x3.clone(), ok.clone()]),
        ];

        let (registry, errors) = Registry::build(groups, &PointOnlyNamingStrategy);

        assert_eq!(errors.len(), 3, "one invalid name plus two collisions");
        assert!(matches!(errors[0], NamingError::Invalid { .. }));
        assert!(matches!(
            &errors[1],
            NamingError::Duplicate { first, first_group, second_group, .. }
                if first == &x1 && first_group == "one" && second_group == "two"
        ));
        assert_eq!(errors[2].points(), vec![&x1, &x3]);
        assert_eq!(registry.point_by_name("ok"), Some(&ok));
    }

    #[test]
    fn test_same_point_twice_is_not_a_collision() {
        let shared = ConfigPoint::new("shared");
        let groups = vec![
            PointGroup::new("first").with_point(shared.clone()),
            PointGroup::new("second").with_point(shared.clone()),
        ];

        let (registry, errors) = Registry::build(groups, &BasicNamingStrategy);

        assert!(errors.is_empty());
        assert_eq!(registry.points(), &[shared.clone()]);
        assert_eq!(
            registry.name_of(&shared).map(CanonicalName::as_str),
            Some("first.shared")
        );
        assert_eq!(registry.groups().len(), 2);
    }

    #[test]
    fn test_named_points_in_declaration_order() {
        let a = ConfigPoint::new("a");
        let b = ConfigPoint::new("b");
        let groups = vec![
            PointGroup::new("z").with_point(a.clone()),
            PointGroup::new("y").with_point(b.clone()),
        ];

        let (registry, _) = Registry::build(groups, &BasicNamingStrategy);
        let names: Vec<&str> = registry.named_points().map(|(n, _)| n.as_str()).collect();

        assert_eq!(names, vec!["z.a", "y.b"]);
    }
}
