//! Tests for the standard loaders.
//!
//! Responsibilities:
//! - Test argument, environment, property file and JSON loading against a registry.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test`.
//! - Temporary files are cleaned up automatically via `tempfile`.

use crate::naming::BasicNamingStrategy;
use crate::point::{ConfigPoint, PointGroup};
use crate::registry::Registry;


/// Points of the `server` group used across loader tests.
pub struct Fixture {
    pub registry: Registry,
    pub host: ConfigPoint,
    pub port: ConfigPoint,
    pub debug: ConfigPoint,
}

/// Builds a registry with `server.host`, `server.port` and `server.debug`.
pub fn fixture() -> Fixture {
    let host = ConfigPoint::new("host");
    let port = ConfigPoint::new("port");
    let debug = ConfigPoint::new("debug");
    let group = PointGroup::new("server").with_points([host.clone(), port.clone(), debug.clone()]);
    let (registry, errors) = Registry::build(vec![group], &BasicNamingStrategy);
    assert!(errors.is_empty());
    Fixture {
        registry,
        host,
        port,
        debug,
    }
}

pub fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
