//! Shared test utilities for layerconf integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write manifest and source files into a temporary directory.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Tests that exercise the environment loader use the `LCTEST_` prefix so host
//!   variables cannot leak into the results.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Prefix for environment variables set by tests.
#[allow(dead_code)]
pub const ENV_PREFIX: &str = "LCTEST_";

/// Manifest with one `server` group of three points.
#[allow(dead_code)]
pub const SERVER_MANIFEST: &str = r#"{
  "groups": [
    {
      "name": "server",
      "points": [
        { "name": "host", "description": "Bind address", "default": "localhost" },
        { "name": "port", "default": "8080" },
        { "name": "debug" }
      ]
    }
  ]
}"#;

/// Returns a hermetic `layerconf` command.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Variables the CLI reads as defaults are cleared.
pub fn layerconf_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("layerconf");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("LAYERCONF_MANIFEST")
        .env_remove("LAYERCONF_ENV_PREFIX")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `content` to `name` inside `dir` and return the full path.
#[allow(dead_code)]
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A `layerconf` command pointed at `manifest`.
#[allow(dead_code)]
pub fn with_manifest(manifest: &Path) -> Command {
    let mut cmd = layerconf_cmd();
    cmd.arg("--manifest").arg(manifest);
    cmd
}
