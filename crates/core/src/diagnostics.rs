//! Diagnostic output for naming failures.
//!
//! `ConfigError::Naming` carries the first naming error as its cause; the
//! complete list is written to a `DiagnosticSink` before the error is returned,
//! so operators see every offending point at once.

use parking_lot::Mutex;
use std::io::Write;

use crate::naming::NamingError;

/// Receives the full list of naming errors before a fatal `ConfigError` is raised.
pub trait DiagnosticSink: Send + Sync {
    fn naming_errors(&self, errors: &[NamingError]);
}

/// Writes naming errors to standard error. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn naming_errors(&self, errors: &[NamingError]) {
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        // Write failures are ignored; the caller still gets the ConfigError.
        let _ = out.write_all(render(errors).as_bytes());
    }
}

/// Keeps reported lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line reported so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn naming_errors(&self, errors: &[NamingError]) {
        let mut lines = self.lines.lock();
        lines.extend(render(errors).lines().map(str::to_string));
    }
}

/// Human-readable report of every naming error.
pub fn render(errors: &[NamingError]) -> String {
    let mut out = format!("Configuration naming errors ({}):\n", errors.len());
    for error in errors {
        out.push_str("  - ");
        out.push_str(&error.to_string());
        out.push('\n');
    }
    out
}
