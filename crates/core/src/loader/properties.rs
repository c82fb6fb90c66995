//! Key/value property file loader.
//!
//! Responsibilities:
//! - Read `KEY=VALUE` files whose keys are canonical names.
//!
//! Does NOT handle:
//! - Variable substitution or escape sequences; values are taken literally.
//! - Exporting values into the process environment; the file is only parsed.
//!
//! Invariants:
//! - Blank lines and lines starting with `#` or `!` are ignored.
//! - Keys and values are trimmed; one pair of matching surrounding quotes is
//!   removed from the value.
//! - Parse errors report the line number only, never the raw line.
//! - Within one file, the last occurrence of a key wins.
//! - A missing optional file yields an empty layer.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::LoaderError;
use super::{Loader, LoaderContext};
use crate::layer::ValueLayer;

/// Loads values from a key/value property file.
#[derive(Debug, Clone)]
pub struct PropertiesFileLoader {
    label: String,
    path: PathBuf,
    optional: bool,
}

impl PropertiesFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            label: format!("properties:{}", path.display()),
            path,
            optional: false,
        }
    }

    /// Treat a missing file as an empty source instead of an error.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Loader for PropertiesFileLoader {
    fn name(&self) -> &str {
        &self.label
    }

    fn load(&self, ctx: &LoaderContext<'_>) -> Result<ValueLayer, LoaderError> {
        let mut layer = ValueLayer::new(self.name());

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if self.optional && e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Optional property file not found");
                return Ok(layer);
            }
            Err(e) => {
                return Err(LoaderError::Io {
                    path: self.path.clone(),
                    kind: e.kind(),
                });
            }
        };

        let entries = parse_properties(&content).map_err(|line| LoaderError::Parse {
            source_name: self.path.display().to_string(),
            message: format!("invalid syntax at line {line}"),
        })?;

        for (key, value) in entries {
            match ctx.registry().point_by_name(key) {
                Some(point) => {
                    layer.insert(point.clone(), value);
                }
                None => tracing::debug!(
                    key = %key,
                    path = %self.path.display(),
                    "Ignoring property for unknown point"
                ),
            }
        }

        Ok(layer)
    }
}

/// Split `content` into key/value pairs in file order.
///
/// Returns the 1-based number of the first malformed line on failure.
fn parse_properties(content: &str) -> Result<Vec<(&str, &str)>, usize> {
    let mut entries = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(idx + 1);
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return Err(idx + 1);
        }
        entries.push((key, unquote(value.trim())));
    }

    Ok(entries)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_properties_skips_comments_and_keeps_order() {
        let content = "# comment\n! also a comment\n\n a.b = 1 \nc='quoted value'\nd=\"x\"\ne=\n";
        assert_eq!(
            parse_properties(content),
            Ok(vec![
                ("a.b", "1"),
                ("c", "quoted value"),
                ("d", "x"),
                ("e", "")
            ])
        );
    }

    #[test]
    fn test_parse_properties_takes_values_literally() {
        assert_eq!(
            parse_properties("k=pa$HOME=${USER}\\n"),
            Ok(vec![("k", "pa$HOME=${USER}\\n")])
        );
        assert_eq!(parse_properties("k=\"unbalanced"), Ok(vec![("k", "\"unbalanced")]));
    }

    #[test]
    fn test_parse_properties_reports_line_number() {
        assert_eq!(parse_properties("a=1\nno separator\n"), Err(2));
        assert_eq!(parse_properties("=value"), Err(1));
        assert_eq!(parse_properties("two words=value"), Err(1));
    }
}
