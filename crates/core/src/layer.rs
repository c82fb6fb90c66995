//! Value layers contributed by forced values or by a single loader run.

use indexmap::IndexMap;

use crate::point::ConfigPoint;

/// Source label of the forced-value layer.
pub const FORCED_SOURCE: &str = "forced";

/// Ordered mapping from point to value, labelled with the source that produced it.
///
/// A layer is built by one source and then frozen: once handed to the resolver
/// it is shared behind an `Arc` and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueLayer {
    source: String,
    values: IndexMap<ConfigPoint, String>,
}

impl ValueLayer {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            values: IndexMap::new(),
        }
    }

    /// Set the value for a point, replacing any value this layer already held.
    pub fn insert(&mut self, point: ConfigPoint, value: impl Into<String>) -> Option<String> {
        self.values.insert(point, value.into())
    }

    /// Set the value for a point only if this layer does not hold one yet.
    pub fn insert_if_absent(&mut self, point: ConfigPoint, value: impl Into<String>) -> bool {
        match self.values.entry(point) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
        }
    }

    pub fn with_value(mut self, point: ConfigPoint, value: impl Into<String>) -> Self {
        self.insert(point, value);
        self
    }

    pub fn get(&self, point: &ConfigPoint) -> Option<&str> {
        self.values.get(point).map(String::as_str)
    }

    pub fn contains(&self, point: &ConfigPoint) -> bool {
        self.values.contains_key(point)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ConfigPoint, &str)> {
        self.values.iter().map(|(point, value)| (point, value.as_str()))
    }
}

impl<'a> IntoIterator for &'a ValueLayer {
    type Item = (&'a ConfigPoint, &'a String);
    type IntoIter = indexmap::map::Iter<'a, ConfigPoint, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
