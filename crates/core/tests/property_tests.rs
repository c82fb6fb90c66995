//! Property-based tests for registry uniqueness and layer precedence.
//!
//! Test coverage:
//! - Collision-free registries contain exactly the declared points, once each.
//! - Colliding names always produce an error referencing both points.
//! - Forced values win regardless of loader contents.
//! - The first loader defining a point wins.

use proptest::prelude::*;
use std::collections::BTreeSet;

use layerconf_core::{
    CanonicalName, ConfigPoint, FixedLoader, MemorySink, NamingError, PointGroup, Registry,
    Resolver, ResolverOptions,
};
use std::sync::Arc;

fn point_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

/// Sets of distinct names split into one to three groups.
fn grouped_names_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::btree_set(point_name_strategy(), 0..12).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let len = names.len();
        (Just(names), prop::collection::vec(0usize..3, len))
    })
    .prop_map(|(names, buckets)| {
        let mut groups = vec![Vec::new(), Vec::new(), Vec::new()];
        for (name, bucket) in names.into_iter().zip(buckets) {
            groups[bucket].push(name);
        }
        groups
    })
}

fn flat_name(point: &ConfigPoint, _group: &PointGroup) -> Result<CanonicalName, NamingError> {
    Ok(CanonicalName::new(point.name()))
}

proptest! {
    #[test]
    fn prop_unique_names_build_union(groups in grouped_names_strategy()) {
        let declared: Vec<PointGroup> = groups
            .iter()
            .enumerate()
            .map(|(i, names)| {
                PointGroup::new(format!("g{i}"))
                    .with_points(names.iter().map(ConfigPoint::new))
            })
            .collect();
        let expected: Vec<ConfigPoint> =
            declared.iter().flat_map(|g| g.points().to_vec()).collect();

        let (registry, errors) = Registry::build(declared, &flat_name);

        prop_assert!(errors.is_empty());
        prop_assert_eq!(registry.points(), expected.as_slice());
        let names: BTreeSet<&str> = registry.named_points().map(|(n, _)| n.as_str()).collect();
        prop_assert_eq!(names.len(), expected.len());
    }

    #[test]
    fn prop_collisions_are_reported(name in point_name_strategy(), spread in any::<bool>()) {
        let first = ConfigPoint::new(name.clone());
        let second = ConfigPoint::new(name);
        let groups = if spread {
            vec![
                PointGroup::new("one").with_point(first.clone()),
                PointGroup::new("two").with_point(second.clone()),
            ]
        } else {
            vec![PointGroup::new("one").with_points([first.clone(), second.clone()])]
        };

        let (_, errors) = Registry::build(groups, &flat_name);

        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].points(), vec![&first, &second]);
    }

    #[test]
    fn prop_forced_value_always_wins(
        forced in "[a-z0-9]{1,8}",
        loader_values in prop::collection::vec(prop::option::of("[a-z0-9]{1,8}"), 0..5),
    ) {
        let point = ConfigPoint::new("p");
        let mut options = ResolverOptions::new()
            .with_group(PointGroup::new("app").with_point(point.clone()))
            .with_forced(point.clone(), forced.clone())
            .with_diagnostics(Arc::new(MemorySink::new()));
        for (i, value) in loader_values.iter().enumerate() {
            let mut loader = FixedLoader::new(format!("l{i}"));
            if let Some(value) = value {
                loader = loader.with_value("app.p", value.clone());
            }
            options = options.with_loader(loader);
        }

        let resolver = Resolver::new(options).unwrap();

        prop_assert_eq!(resolver.get_value(&point), Some(forced));
    }

    #[test]
    fn prop_first_defining_loader_wins(
        loader_values in prop::collection::vec(prop::option::of("[a-z0-9]{1,8}"), 1..6),
    ) {
        let point = ConfigPoint::new("p");
        let mut options = ResolverOptions::new()
            .with_group(PointGroup::new("app").with_point(point.clone()));
        for (i, value) in loader_values.iter().enumerate() {
            let mut loader = FixedLoader::new(format!("l{i}"));
            if let Some(value) = value {
                loader = loader.with_value("app.p", value.clone());
            }
            options = options.with_loader(loader);
        }

        let resolver = Resolver::new(options).unwrap();
        let expected = loader_values.iter().flatten().next().cloned();

        prop_assert_eq!(resolver.get_value(&point), expected.clone());
        prop_assert_eq!(resolver.is_present(&point), expected.is_some());
    }
}
