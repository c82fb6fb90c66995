//! Canonical naming of configuration points.
//!
//! Responsibilities:
//! - Define the `NamingStrategy` contract that maps a point and its group to a
//!   `CanonicalName`, or to a structured `NamingError`.
//! - Provide the default `BasicNamingStrategy` and a flat `PointOnlyNamingStrategy`.
//!
//! Does NOT handle:
//! - Collision detection across points (see `registry.rs`); a strategy only ever
//!   sees one point at a time.
//!
//! Invariants:
//! - Strategies are pure and deterministic: the same point/group pair always
//!   yields the same result, and no strategy performs I/O.
//! - Strategies are total: a bad declaration is reported as `NamingError::Invalid`,
//!   never by panicking.

use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

use crate::point::{ConfigPoint, PointGroup};

/// The unique string identity of a point within an active registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalName(String);

impl CanonicalName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CanonicalName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a point could not be given a usable canonical name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// The strategy rejected the point's declaration.
    #[error("point '{point}' in group '{group}' cannot be named: {reason}")]
    Invalid {
        point: ConfigPoint,
        group: String,
        reason: String,
    },

    /// Two distinct points computed the same canonical name.
    #[error(
        "canonical name '{name}' is shared by point '{first}' in group '{first_group}' \
         and point '{second}' in group '{second_group}'"
    )]
    Duplicate {
        name: CanonicalName,
        first: ConfigPoint,
        first_group: String,
        second: ConfigPoint,
        second_group: String,
    },
}

impl NamingError {
    /// Every point involved in the error.
    pub fn points(&self) -> Vec<&ConfigPoint> {
        match self {
            NamingError::Invalid { point, .. } => vec![point],
            NamingError::Duplicate { first, second, .. } => vec![first, second],
        }
    }
}

/// Maps a point's declared identity to its canonical name.
pub trait NamingStrategy: Send + Sync {
    fn canonical_name(
        &self,
        point: &ConfigPoint,
        group: &PointGroup,
    ) -> Result<CanonicalName, NamingError>;
}

impl<F> NamingStrategy for F
where
    F: Fn(&ConfigPoint, &PointGroup) -> Result<CanonicalName, NamingError> + Send + Sync,
{
    fn canonical_name(
        &self,
        point: &ConfigPoint,
        group: &PointGroup,
    ) -> Result<CanonicalName, NamingError> {
        self(point, group)
    }
}

/// Default strategy: `"{group}.{point}"`.
///
/// Group and point names must be non-empty and may not contain whitespace or `=`
/// (the latter would make `name=value` arguments ambiguous).
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicNamingStrategy;

impl NamingStrategy for BasicNamingStrategy {
    fn canonical_name(
        &self,
        point: &ConfigPoint,
        group: &PointGroup,
    ) -> Result<CanonicalName, NamingError> {
        check_segment(group.name(), "group name")
            .map_err(|reason| invalid(point, group, reason))?;
        check_segment(point.name(), "point name")
            .map_err(|reason| invalid(point, group, reason))?;
        Ok(CanonicalName(format!("{}.{}", group.name(), point.name())))
    }
}

/// Flat strategy: the canonical name is the point's own name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointOnlyNamingStrategy;

impl NamingStrategy for PointOnlyNamingStrategy {
    fn canonical_name(
        &self,
        point: &ConfigPoint,
        group: &PointGroup,
    ) -> Result<CanonicalName, NamingError> {
        check_segment(point.name(), "point name")
            .map_err(|reason| invalid(point, group, reason))?;
        Ok(CanonicalName(point.name().to_string()))
    }
}

fn check_segment(segment: &str, what: &str) -> Result<(), String> {
    if segment.is_empty() {
        return Err(format!("{what} is empty"));
    }
    if let Some(c) = segment.chars().find(|c| c.is_whitespace() || *c == '=') {
        return Err(format!("{what} '{segment}' contains invalid character {c:?}"));
    }
    Ok(())
}

fn invalid(point: &ConfigPoint, group: &PointGroup, reason: String) -> NamingError {
    NamingError::Invalid {
        point: point.clone(),
        group: group.name().to_string(),
        reason,
    }
}
