//! Architecture tests for the boundary between the library and the binary.
//!
//! Invariants:
//! - `layerconf-core` never depends on CLI-only crates (argument parsing,
//!   `anyhow`, subscriber setup); applications choose those themselves.
//! - Library code never prints; output goes through `tracing` or a `DiagnosticSink`.

use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

const CLI_ONLY_CRATES: &[&str] = &["clap", "anyhow", "tracing-subscriber"];

fn core_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("core")
}

#[test]
fn test_core_has_no_cli_dependencies() {
    let manifest = fs::read_to_string(core_dir().join("Cargo.toml")).unwrap();
    let dependencies = manifest
        .split("[dependencies]")
        .nth(1)
        .and_then(|rest| rest.split("\n[").next())
        .unwrap_or_default();

    for line in dependencies.lines() {
        let name = line.split('=').next().unwrap_or_default().trim();
        assert!(
            !CLI_ONLY_CRATES.contains(&name),
            "layerconf-core must not depend on '{name}'"
        );
    }
}

#[test]
fn test_core_sources_do_not_print() {
    let mut violations = Vec::new();

    for entry in WalkDir::new(core_dir().join("src"))
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let content = fs::read_to_string(entry.path()).unwrap();
        for (idx, line) in content.lines().enumerate() {
            if line.contains("println!") || line.contains("eprintln!") {
                violations.push(format!("{}:{}", entry.path().display(), idx + 1));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Library code must log through tracing instead of printing:\n{}",
        violations.join("\n")
    );
}
