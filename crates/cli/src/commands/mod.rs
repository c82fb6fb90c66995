//! Command handlers.
//!
//! Each handler loads the manifest, builds a resolver and writes to stdout.
//! Failures are returned as `anyhow::Error` so `main` can map them to exit codes.

pub mod check;
pub mod show;
